use std::{fmt, str::FromStr};

use crate::errors::WordAlignError;

/// A resolution the operator picked for a discrepancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Accept the difference and move both cursors past it.
    AdvanceBoth,

    /// The edited document is missing the source word; copy it over.
    InsertFromSource,

    /// Overwrite the edited word with the source word.
    EditFromSource,

    /// Overwrite the source word with the edited word.
    EditSourceFromEdit,

    /// The edited document has a surplus word.
    DeleteFromEdit,

    /// The source document has a surplus word.
    DeleteFromSource,

    /// Set both current words to a word typed in by the operator.
    ManualWord(String),

    /// Move the cursors forward without touching the documents.
    Skip { edit: usize, source: usize },

    /// Stop and keep every change made so far.
    SaveAndQuit,

    /// Stop and throw every change away.
    QuitWithoutSaving,
}

/// A single token typed at the resolution prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Action),

    /// `me`: the replacement word still has to be asked for.
    ManualWord,
}

impl FromStr for Command {
    type Err = WordAlignError;

    /// Parse the resolution vocabulary:
    ///
    /// ```not_rust
    /// s a e ex d x me v q  -> the matching action
    /// "3"                  -> advance the edited cursor by 3
    /// "32"                 -> advance the edited cursor by 3, the source cursor by 2
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let action = match token.trim() {
            "s" => Action::AdvanceBoth,
            "a" => Action::InsertFromSource,
            "e" => Action::EditFromSource,
            "ex" => Action::EditSourceFromEdit,
            "d" => Action::DeleteFromEdit,
            "x" => Action::DeleteFromSource,
            "v" => Action::SaveAndQuit,
            "q" => Action::QuitWithoutSaving,
            "me" => return Ok(Command::ManualWord),
            digits => parse_skip(digits)
                .ok_or_else(|| WordAlignError::MalformedCommand(token.to_owned()))?,
        };

        Ok(Command::Apply(action))
    }
}

fn parse_skip(digits: &str) -> Option<Action> {
    let mut steps = digits.chars().map(|c| c.to_digit(10).map(|d| d as usize));

    match (steps.next(), steps.next(), steps.next()) {
        (Some(Some(edit)), None, None) => Some(Action::Skip { edit, source: 0 }),
        (Some(Some(edit)), Some(Some(source)), None) => Some(Action::Skip { edit, source }),
        _ => None,
    }
}

/// Formats the action as the command token that produces it.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AdvanceBoth => write!(f, "s"),
            Action::InsertFromSource => write!(f, "a"),
            Action::EditFromSource => write!(f, "e"),
            Action::EditSourceFromEdit => write!(f, "ex"),
            Action::DeleteFromEdit => write!(f, "d"),
            Action::DeleteFromSource => write!(f, "x"),
            Action::ManualWord(_) => write!(f, "me"),
            Action::Skip { edit, source: 0 } => write!(f, "{edit}"),
            Action::Skip { edit, source } => write!(f, "{edit}{source}"),
            Action::SaveAndQuit => write!(f, "v"),
            Action::QuitWithoutSaving => write!(f, "q"),
        }
    }
}
