mod action;

use std::{fmt, io};

pub use action::{Action, Command};
use log::{debug, info};

use crate::{
    errors::Result,
    normalizer::{BuiltinNormalizer, Normalizer},
    tokenizer::word::Word,
    word_text::WordText,
};

/// Number of words shown on either side of a discrepancy by default.
pub const DEFAULT_CONTEXT_RADIUS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Scanning,
    AwaitingResolution,
    Terminated,
}

/// How a session ended, telling the caller what to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every compared word matched, nothing needs to be written.
    Identical,

    /// At least one discrepancy came up and the changes are to be kept. The
    /// caller writes both documents and remembers the cursors to resume from.
    Saved {
        edit_index: usize,
        source_index: usize,
    },

    /// The operator quit without saving, nothing must be written.
    Discarded,
}

/// A pair of words that differ after normalization, together with their
/// surroundings for showing to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub edit_index: usize,
    pub source_index: usize,
    pub edit_word: Word,
    pub source_word: Word,
    pub edit_context: String,
    pub source_context: String,
}

/// Whoever decides how discrepancies get resolved. Asking blocks until a
/// decision is made.
pub trait Operator {
    fn resolve(&mut self, discrepancy: &Discrepancy) -> io::Result<Action>;
}

impl<F> Operator for F
where
    F: FnMut(&Discrepancy) -> io::Result<Action>,
{
    fn resolve(&mut self, discrepancy: &Discrepancy) -> io::Result<Action> { self(discrepancy) }
}

/// Walks an edited document and its source side by side, word by word,
/// stopping at every pair of words that doesn't match so that the operator
/// can resolve the difference.
///
/// There is no attempt at finding an optimal alignment: the cursors only ever
/// move forward, and getting them back in sync after a larger divergence is up
/// to the operator.
///
/// ```
/// use word_align::{Action, AlignmentSession, Discrepancy, SessionOutcome, WordText};
///
/// let mut session = AlignmentSession::new(
///     WordText::from_text("Hello wrld"),
///     WordText::from_text("Hello world"),
/// );
///
/// let outcome = session
///     .run(&mut |_: &Discrepancy| -> std::io::Result<Action> { Ok(Action::EditFromSource) })
///     .unwrap();
///
/// assert_eq!(outcome, SessionOutcome::Saved { edit_index: 2, source_index: 2 });
/// assert_eq!(session.edit().text(), "Hello world");
/// ```
pub struct AlignmentSession {
    edit: WordText,
    source: WordText,
    edit_index: usize,
    source_index: usize,
    dirty: bool,
    discarded: bool,
    state: SessionState,
    normalizer: Box<Normalizer>,
    context_radius: usize,
}

impl AlignmentSession {
    /// Start comparing from the first words, with the default normalizer.
    #[must_use]
    pub fn new(edit: WordText, source: WordText) -> Self {
        Self {
            edit,
            source,
            edit_index: 0,
            source_index: 0,
            dirty: false,
            discarded: false,
            state: SessionState::Scanning,
            normalizer: Box::new(|word: &str| (*BuiltinNormalizer::default())(word)),
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    /// Resume comparing from the given cursors.
    #[must_use]
    pub fn starting_at(mut self, edit_index: usize, source_index: usize) -> Self {
        self.edit_index = edit_index;
        self.source_index = source_index;
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl Fn(&str) -> String + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    #[must_use]
    pub fn with_builtin_normalizer(self, normalizer: BuiltinNormalizer) -> Self {
        self.with_normalizer(move |word: &str| (*normalizer)(word))
    }

    #[must_use]
    pub fn with_context_radius(mut self, context_radius: usize) -> Self {
        self.context_radius = context_radius;
        self
    }

    #[must_use]
    pub fn edit(&self) -> &WordText { &self.edit }

    #[must_use]
    pub fn source(&self) -> &WordText { &self.source }

    #[must_use]
    pub fn into_documents(self) -> (WordText, WordText) { (self.edit, self.source) }

    #[must_use]
    pub fn edit_index(&self) -> usize { self.edit_index }

    #[must_use]
    pub fn source_index(&self) -> usize { self.source_index }

    /// Whether any discrepancy has come up so far.
    #[must_use]
    pub fn is_dirty(&self) -> bool { self.dirty }

    #[must_use]
    pub fn state(&self) -> SessionState { self.state }

    /// Drive the session to its end, asking `operator` to resolve every
    /// discrepancy found along the way.
    pub fn run(&mut self, operator: &mut impl Operator) -> Result<SessionOutcome> {
        while let Some(discrepancy) = self.scan()? {
            let action = operator.resolve(&discrepancy)?;
            self.apply(action)?;
        }

        let outcome = self.outcome();
        info!(
            "Session ended as {outcome:?} at indexes [{}, {}]",
            self.edit_index, self.source_index
        );
        Ok(outcome)
    }

    /// Advance the cursors over matching words and return the next
    /// discrepancy, or `None` once the shorter document is exhausted or the
    /// session has been terminated.
    pub fn scan(&mut self) -> Result<Option<Discrepancy>> {
        if self.state == SessionState::Terminated {
            return Ok(None);
        }
        self.state = SessionState::Scanning;

        while self.has_words_left() {
            let edit = (self.normalizer)(self.edit.word_at(self.edit_index)?.text());
            if edit.is_empty() {
                self.edit_index += 1;
                continue;
            }

            let source = (self.normalizer)(self.source.word_at(self.source_index)?.text());
            if source.is_empty() {
                self.source_index += 1;
                continue;
            }

            if edit == source {
                self.edit_index += 1;
                self.source_index += 1;
                continue;
            }

            debug!(
                "Discrepancy at [{}, {}]: {edit:?} != {source:?}",
                self.edit_index, self.source_index
            );
            self.dirty = true;
            self.state = SessionState::AwaitingResolution;
            return self.discrepancy().map(Some);
        }

        self.state = SessionState::Terminated;
        Ok(None)
    }

    /// Apply the operator's resolution at the current cursors. Mutations leave
    /// the cursors in place so the same position gets compared again.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        debug!(
            "Applying '{action}' at [{}, {}]",
            self.edit_index, self.source_index
        );

        match action {
            Action::AdvanceBoth => {
                self.edit_index += 1;
                self.source_index += 1;
            }
            Action::InsertFromSource => {
                let word = self.source.word_at(self.source_index)?.clone();
                self.edit.insert(word, self.edit_index);
            }
            Action::EditFromSource => {
                let word = self.source.word_at(self.source_index)?.clone();
                self.edit.edit(self.edit_index, word)?;
            }
            Action::EditSourceFromEdit => {
                let word = self.edit.word_at(self.edit_index)?.clone();
                self.source.edit(self.source_index, word)?;
            }
            Action::DeleteFromEdit => {
                self.edit.delete(self.edit_index)?;
            }
            Action::DeleteFromSource => {
                self.source.delete(self.source_index)?;
            }
            Action::ManualWord(text) => {
                let mut edit_word = self.edit.word_at(self.edit_index)?.clone();
                let mut source_word = self.source.word_at(self.source_index)?.clone();
                edit_word.set_text(text.as_str());
                source_word.set_text(text);

                self.edit.edit(self.edit_index, edit_word)?;
                self.source.edit(self.source_index, source_word)?;
            }
            Action::Skip { edit, source } => {
                self.edit_index = self.edit_index.saturating_add(edit);
                self.source_index = self.source_index.saturating_add(source);
            }
            Action::SaveAndQuit => {
                self.state = SessionState::Terminated;
                return Ok(());
            }
            Action::QuitWithoutSaving => {
                self.discarded = true;
                self.state = SessionState::Terminated;
                return Ok(());
            }
        }

        self.state = SessionState::Scanning;
        Ok(())
    }

    /// What the caller has to persist, judging by the current state.
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        if self.discarded {
            SessionOutcome::Discarded
        } else if self.dirty {
            SessionOutcome::Saved {
                edit_index: self.edit_index,
                source_index: self.source_index,
            }
        } else {
            SessionOutcome::Identical
        }
    }

    /// Scanning ends once the edit cursor reaches the length of the shorter
    /// document. The source cursor is checked on its own since skips can
    /// carry it past its end.
    fn has_words_left(&self) -> bool {
        self.edit_index < self.edit.len().min(self.source.len())
            && self.source_index < self.source.len()
    }

    fn discrepancy(&self) -> Result<Discrepancy> {
        Ok(Discrepancy {
            edit_index: self.edit_index,
            source_index: self.source_index,
            edit_word: self.edit.word_at(self.edit_index)?.clone(),
            source_word: self.source.word_at(self.source_index)?.clone(),
            edit_context: self
                .edit
                .highlighted_context(self.edit_index, self.context_radius)?,
            source_context: self
                .source
                .highlighted_context(self.source_index, self.context_radius)?,
        })
    }
}

impl fmt::Debug for AlignmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignmentSession")
            .field("edit_index", &self.edit_index)
            .field("source_index", &self.source_index)
            .field("dirty", &self.dirty)
            .field("discarded", &self.discarded)
            .field("state", &self.state)
            .field("context_radius", &self.context_radius)
            .finish_non_exhaustive()
    }
}
