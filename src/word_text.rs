use std::{fmt, fs, path::Path};

use crate::{
    errors::{Result, WordAlignError},
    tokenizer::{word::Word, word_tokenizer::word_tokenizer},
};

/// Whitespace that may be collapsed when the word next to it gets deleted.
const INSIGNIFICANT_WHITESPACE: &str = " ";

/// A plain-text document viewed as an ordered, editable sequence of words.
///
/// Whitespace is kept alongside the words so that `text()` reproduces the
/// original input byte for byte as long as the document hasn't been mutated.
/// Structural edits (`insert`, `delete`) shift the indices of every later word;
/// callers holding on to indices have to re-read them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordText {
    words: Vec<Word>,

    /// Whitespace after the final word, or the entire text when it contains no
    /// words at all.
    trailing_whitespace: String,
}

impl WordText {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let (words, trailing_whitespace) = word_tokenizer(text);

        Self {
            words,
            trailing_whitespace,
        }
    }

    /// Read and tokenize a UTF-8 text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordAlignError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(&text))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.words.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn words(&self) -> impl Iterator<Item = &Word> { self.words.iter() }

    pub fn word_at(&self, at: usize) -> Result<&Word> {
        self.words.get(at).ok_or(WordAlignError::IndexOutOfRange {
            index: at,
            len: self.words.len(),
        })
    }

    #[must_use]
    pub fn trailing_whitespace(&self) -> &str { &self.trailing_whitespace }

    /// Serialize the document back into text.
    #[must_use]
    pub fn text(&self) -> String {
        let mut result = self.serialize(0..self.words.len(), None);
        result.push_str(&self.trailing_whitespace);
        result
    }

    /// The words within `radius` of `at` (clamped to the document) serialized
    /// with their leading whitespace.
    pub fn surrounding_text(&self, at: usize, radius: usize) -> Result<String> {
        let window = self.window(at, radius)?;
        Ok(self.serialize(window, None))
    }

    /// Same as `surrounding_text` but the word at `at` is wrapped in `*` to
    /// make it stand out when shown to the operator.
    ///
    /// ```
    /// use word_align::WordText;
    ///
    /// let document = WordText::from_text("and?\n\nHow could you say that?");
    /// assert_eq!(
    ///     document.highlighted_context(2, 2).unwrap(),
    ///     "and?\n\nHow *could* you say"
    /// );
    /// ```
    pub fn highlighted_context(&self, at: usize, radius: usize) -> Result<String> {
        let window = self.window(at, radius)?;
        Ok(self.serialize(window, Some(at)))
    }

    /// Insert `word` so that it ends up at index `at`, appending it when `at`
    /// is past the end.
    ///
    /// Between two words, the inserted word brings its own spacing: its
    /// leading whitespace separates it from the previous word and its right
    /// whitespace separates it from the next one. Rather than clearing the
    /// whitespace the two neighbours used to share, it is replaced, so a word
    /// copied from another document arrives with that document's spacing.
    ///
    /// Prepending leaves the first word alone unless the inserted word
    /// carries right whitespace of its own.
    pub fn insert(&mut self, mut word: Word, at: usize) {
        let at = at.min(self.words.len());

        if at > 0 {
            self.words[at - 1].set_right_whitespace(word.leading_whitespace());
        }
        if let Some(next) = self.words.get_mut(at) {
            if at > 0 || !word.right_whitespace().is_empty() {
                next.set_leading_whitespace(word.right_whitespace());
            } else {
                word.set_right_whitespace(next.leading_whitespace());
            }
        }

        self.words.insert(at, word);
    }

    /// Replace the word at `at`, including its leading whitespace. Neighbouring
    /// words are left untouched.
    pub fn edit(&mut self, at: usize, word: Word) -> Result<()> {
        let len = self.words.len();
        let slot = self
            .words
            .get_mut(at)
            .ok_or(WordAlignError::IndexOutOfRange { index: at, len })?;

        *slot = word;
        Ok(())
    }

    /// Remove and return the word at `at`.
    ///
    /// Deleting an interior word must neither glue two paragraphs together nor
    /// double up ordinary spacing: if the whitespace on either side of the
    /// deleted word is anything but a single space, it survives in front of
    /// the following word.
    pub fn delete(&mut self, at: usize) -> Result<Word> {
        let len = self.words.len();
        if at >= len {
            return Err(WordAlignError::IndexOutOfRange { index: at, len });
        }

        if at > 0 && at < len - 1 {
            let left = self.words[at - 1].right_whitespace();
            let right = self.words[at + 1].leading_whitespace();

            let left_is_significant = left != INSIGNIFICANT_WHITESPACE;
            let right_is_significant = right != INSIGNIFICANT_WHITESPACE;

            let whitespace = match (left_is_significant, right_is_significant) {
                (true, true) => format!("{left}{right}"),
                (true, false) => left.to_owned(),
                (false, _) => right.to_owned(),
            };

            self.words[at + 1].set_leading_whitespace(whitespace.clone());
            self.words[at - 1].set_right_whitespace(whitespace);
        }

        Ok(self.words.remove(at))
    }

    fn window(&self, at: usize, radius: usize) -> Result<std::ops::Range<usize>> {
        self.word_at(at)?;

        let start = at.saturating_sub(radius);
        let end = at.saturating_add(radius).saturating_add(1).min(self.words.len());
        Ok(start..end)
    }

    fn serialize(&self, range: std::ops::Range<usize>, highlighted: Option<usize>) -> String {
        let mut result = String::new();

        for (i, word) in self.words[range.clone()].iter().enumerate() {
            if highlighted == Some(range.start + i) {
                result.push_str(word.leading_whitespace());
                result.push('*');
                result.push_str(word.text());
                result.push('*');
            } else {
                word.write_to(&mut result);
            }
        }

        result
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.text()) }
}

impl From<&str> for WordText {
    fn from(text: &str) -> Self { WordText::from_text(text) }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const DIALOGUE: &str = "and?\n\nHow could you say that?";

    fn texts(document: &WordText) -> Vec<&str> { document.words().map(Word::text).collect() }

    #[test]
    fn test_word_at() {
        let document = WordText::from_text("Hello there you wonderful world");

        assert_eq!(document.word_at(3).unwrap().text(), "wonderful");
    }

    #[test]
    fn test_word_at_out_of_range() {
        let document = WordText::from_text(DIALOGUE);

        assert!(matches!(
            document.word_at(6),
            Err(WordAlignError::IndexOutOfRange { index: 6, len: 6 })
        ));
        assert!(matches!(
            document.word_at(0usize.wrapping_sub(1)),
            Err(WordAlignError::IndexOutOfRange { len: 6, .. })
        ));
        assert!(matches!(
            WordText::from_text("").word_at(0),
            Err(WordAlignError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test_case(DIALOGUE ; "sentence with newlines")]
    #[test_case("and?\n\nHow could you say that?\nReally, thats.. Pretty incredible." ; "multiple lines")]
    #[test_case("wow" ; "single word")]
    #[test_case("hello world you are looking round today" ; "basic sentence")]
    #[test_case("\n\n\n  Chapter I.\n\n\n\nIt was\t a dark night.\n\n" ; "blank lines and trailing whitespace")]
    #[test_case("" ; "empty")]
    #[test_case(" \n " ; "whitespace only")]
    fn test_round_trip(text: &str) {
        let document = WordText::from_text(text);

        assert_eq!(document.text(), text);
        assert_eq!(document.to_string(), text);
    }

    #[test]
    fn test_last_word() {
        let document = WordText::from_text("hello world you are looking round today");
        let last = document.word_at(document.len() - 1).unwrap();

        assert_eq!(last.text(), "today");
        assert_eq!(last.leading_whitespace(), " ");
        assert_eq!(last.right_whitespace(), "");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{DIALOGUE}\n\n").unwrap();

        let document = WordText::from_file(file.path()).unwrap();
        assert_eq!(document.len(), 6);
        assert_eq!(document.text(), format!("{DIALOGUE}\n\n"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = WordText::from_file("/this/path/does/not/exist.txt");

        assert!(matches!(result, Err(WordAlignError::Io { .. })));
    }

    #[test_case(Word::new("How").with_leading_whitespace("\n\n"), " ", 1, "and?\n\ncould you say that?", "and?\n\nHow could you say that?" ; "interior")]
    #[test_case(Word::new("so?").with_leading_whitespace(" "), "\n\n", 1, "and\n\nHow could you say that?", "and so?\n\nHow could you say that?" ; "interior with paragraph break")]
    #[test_case(Word::new("that?").with_leading_whitespace(" "), "", 4, "How could you say", "How could you say that?" ; "append")]
    #[test_case(Word::new("and?"), "\n\n", 0, "How could you say that?", "and?\n\nHow could you say that?" ; "prepend")]
    #[test_case(Word::new("X"), "", 0, "\n\nHello world", "X\n\nHello world" ; "prepend keeps leading whitespace")]
    fn test_insert(word: Word, right_whitespace: &str, at: usize, have: &str, want: &str) {
        let mut word = word;
        word.set_right_whitespace(right_whitespace);

        let mut document = WordText::from_text(have);
        document.insert(word, at);

        assert_eq!(document.text(), want);
    }

    #[test_case(0 ; "front")]
    #[test_case(3 ; "middle")]
    #[test_case(6 ; "end")]
    #[test_case(100 ; "past the end")]
    fn test_insert_shifts_words(at: usize) {
        let mut document = WordText::from_text(DIALOGUE);
        let mut expected = texts(&document)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        expected.insert(at.min(expected.len()), "X".to_owned());

        document.insert(Word::new("X"), at);

        assert_eq!(document.len(), 7);
        assert_eq!(texts(&document), expected);
    }

    #[test]
    fn test_prepend_keeps_right_whitespace_cache_in_sync() {
        let mut document = WordText::from_text("\n\nHello world");

        document.insert(Word::new("X"), 0);

        assert_eq!(document.word_at(0).unwrap().right_whitespace(), "\n\n");
        assert_eq!(document.word_at(1).unwrap().leading_whitespace(), "\n\n");
    }

    #[test]
    fn test_trailing_whitespace_is_kept_apart_from_words() {
        let document: WordText = "Chapter I.\n\n".into();

        assert_eq!(document.len(), 2);
        assert_eq!(document.trailing_whitespace(), "\n\n");
        assert_eq!(document.word_at(1).unwrap().text(), "I.");

        let blank: WordText = " \n ".into();
        assert!(blank.is_empty());
        assert_eq!(blank.trailing_whitespace(), " \n ");
    }

    #[test]
    fn test_insert_copied_word_keeps_source_spacing() {
        let source = WordText::from_text("Hello big world");
        let mut edit = WordText::from_text("Hello world");

        edit.insert(source.word_at(1).unwrap().clone(), 1);

        assert_eq!(edit.text(), "Hello big world");
    }

    #[test_case(0, "\n\nHow could you say that?" ; "first word")]
    #[test_case(1, "and?\n\ncould you say that?" ; "after paragraph break")]
    #[test_case(2, "and?\n\nHow you say that?" ; "ordinary spacing")]
    #[test_case(3, "and?\n\nHow could say that?" ; "middle")]
    #[test_case(4, "and?\n\nHow could you that?" ; "second to last")]
    #[test_case(5, "and?\n\nHow could you say" ; "last word")]
    fn test_delete(at: usize, want: &str) {
        let mut document = WordText::from_text(DIALOGUE);
        let deleted = document.delete(at).unwrap();

        assert_eq!(Some(deleted.text()), DIALOGUE.split_whitespace().nth(at));
        assert_eq!(document.len(), 5);
        assert_eq!(document.text(), want);
    }

    #[test]
    fn test_delete_keeps_whitespace_from_both_sides() {
        let mut document = WordText::from_text("end.\n\nCHAPTER\n\nIt was");
        document.delete(1).unwrap();

        assert_eq!(document.text(), "end.\n\n\n\nIt was");
    }

    #[test]
    fn test_delete_keeps_significant_right_whitespace() {
        let mut document = WordText::from_text("one two\n\nthree");
        document.delete(1).unwrap();

        assert_eq!(document.text(), "one\n\nthree");
    }

    #[test]
    fn test_repeated_deletes_use_refreshed_whitespace() {
        let mut document = WordText::from_text("end.\n\nstray words\nHere");
        document.delete(1).unwrap();
        document.delete(1).unwrap();

        assert_eq!(document.text(), "end.\n\n\nHere");
    }

    #[test]
    fn test_delete_only_word() {
        let mut document = WordText::from_text("alone\n");
        document.delete(0).unwrap();

        assert!(document.is_empty());
        assert_eq!(document.text(), "\n");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut document = WordText::from_text(DIALOGUE);

        assert!(matches!(
            document.delete(6),
            Err(WordAlignError::IndexOutOfRange { index: 6, len: 6 })
        ));
        assert_eq!(document.text(), DIALOGUE);
    }

    #[test]
    fn test_edit() {
        let mut document = WordText::from_text("Hello wrld");
        let source = WordText::from_text("Hello\nworld");

        document.edit(1, source.word_at(1).unwrap().clone()).unwrap();

        assert_eq!(document.text(), "Hello\nworld");
        assert!(document.edit(2, Word::new("nope")).is_err());
    }

    #[test_case(0, "*and?*\n\nHow could" ; "first word")]
    #[test_case(1, "and?\n\n*How* could you" ; "second word")]
    #[test_case(2, "and?\n\nHow *could* you say" ; "third word")]
    #[test_case(3, "\n\nHow could *you* say that?" ; "fourth word")]
    #[test_case(4, " could you *say* that?" ; "fifth word")]
    #[test_case(5, " you say *that?*" ; "last word")]
    fn test_highlighted_context(at: usize, want: &str) {
        let document = WordText::from_text(DIALOGUE);

        assert_eq!(document.highlighted_context(at, 2).unwrap(), want);
    }

    #[test]
    fn test_surrounding_text() {
        let document = WordText::from_text(DIALOGUE);

        assert_eq!(
            document.surrounding_text(3, 2).unwrap(),
            "\n\nHow could you say that?"
        );
        assert_eq!(document.surrounding_text(0, 100).unwrap(), DIALOGUE);
        assert!(document.surrounding_text(6, 2).is_err());
        assert_eq!(document.text(), DIALOGUE);
    }
}
