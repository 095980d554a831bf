use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A word of a text document together with the whitespace needed to put it
/// back where it came from.
///
/// The whitespace between two neighbouring words is owned by the second one's
/// `leading_whitespace`. `right_whitespace` only caches the whitespace that
/// followed the word when it was tokenized, it is never serialized and is only
/// consulted when a neighbour gets deleted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    text: String,
    leading_whitespace: String,
    right_whitespace: String,

    /// Byte range of `text` within the text it was tokenized from.
    span: Range<usize>,
}

impl Word {
    /// Create a detached word without any surrounding whitespace.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let span = 0..text.len();

        Word {
            text,
            span,
            ..Default::default()
        }
    }

    pub(crate) fn tokenized(text: String, leading_whitespace: String, start: usize) -> Self {
        let span = start..start + text.len();

        Word {
            text,
            leading_whitespace,
            right_whitespace: String::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_leading_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.leading_whitespace = whitespace.into();
        self
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Replace the characters of the word while keeping its whitespace.
    pub fn set_text(&mut self, text: impl Into<String>) { self.text = text.into(); }

    #[must_use]
    pub fn leading_whitespace(&self) -> &str { &self.leading_whitespace }

    pub fn set_leading_whitespace(&mut self, whitespace: impl Into<String>) {
        self.leading_whitespace = whitespace.into();
    }

    #[must_use]
    pub fn right_whitespace(&self) -> &str { &self.right_whitespace }

    pub(crate) fn set_right_whitespace(&mut self, whitespace: impl Into<String>) {
        self.right_whitespace = whitespace.into();
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> { self.span.clone() }

    pub(crate) fn write_to(&self, buffer: &mut String) {
        buffer.push_str(&self.leading_whitespace);
        buffer.push_str(&self.text);
    }
}

/// Formats the word with its leading whitespace, as it appears in a document.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.leading_whitespace, self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self { Word::new(text) }
}
