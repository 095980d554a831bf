use std::{fmt, ops::Deref, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{errors::WordAlignError, filters::plain_quotes};

/// Maps a word onto the form used for deciding whether two words match.
/// Returning an empty string marks the word as noise that is skipped over.
pub type Normalizer = dyn Fn(&str) -> String;

/// Normalizers for the comparisons proofreading usually calls for.
///
/// Dereferences to a `Normalizer`, so it can be passed wherever a custom
/// closure could be:
///
/// ```
/// use word_align::BuiltinNormalizer;
///
/// assert_eq!((*BuiltinNormalizer::PlainQuotes)("“Hi!”"), "\"Hi!\"");
/// assert_eq!((*BuiltinNormalizer::LettersOnly)("“Hi!”"), "Hi");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinNormalizer {
    /// Words have to be identical.
    Exact,

    /// Curly quotes and apostrophes compare equal to their straight forms.
    #[default]
    PlainQuotes,

    /// Only letters are compared; punctuation and digits are ignored and
    /// words without letters are skipped.
    LettersOnly,
}

impl BuiltinNormalizer {
    pub const ALL: [BuiltinNormalizer; 3] = [
        BuiltinNormalizer::Exact,
        BuiltinNormalizer::PlainQuotes,
        BuiltinNormalizer::LettersOnly,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BuiltinNormalizer::Exact => "exact",
            BuiltinNormalizer::PlainQuotes => "plain-quotes",
            BuiltinNormalizer::LettersOnly => "letters-only",
        }
    }
}

impl Deref for BuiltinNormalizer {
    type Target = Normalizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinNormalizer::Exact => &exact,
            BuiltinNormalizer::PlainQuotes => &plain_quotes,
            BuiltinNormalizer::LettersOnly => &letters_only,
        }
    }
}

impl FromStr for BuiltinNormalizer {
    type Err = WordAlignError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|normalizer| normalizer.name() == name)
            .ok_or_else(|| WordAlignError::UnknownNormalizer(name.to_owned()))
    }
}

impl fmt::Display for BuiltinNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

fn exact(word: &str) -> String { word.to_owned() }

fn letters_only(word: &str) -> String { word.chars().filter(|c| c.is_alphabetic()).collect() }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(BuiltinNormalizer::Exact, "‘Tis", "‘Tis" ; "exact keeps everything")]
    #[test_case(BuiltinNormalizer::PlainQuotes, "‘Tis", "'Tis" ; "plain quotes folds single quotes")]
    #[test_case(BuiltinNormalizer::PlainQuotes, "“said,”", "\"said,\"" ; "plain quotes folds double quotes")]
    #[test_case(BuiltinNormalizer::LettersOnly, "“don’t!”", "dont" ; "letters only strips punctuation")]
    #[test_case(BuiltinNormalizer::LettersOnly, "1847.", "" ; "letters only empties numbers")]
    #[test_case(BuiltinNormalizer::LettersOnly, "Ça-va", "Çava" ; "letters only keeps non ascii letters")]
    fn test_normalize(normalizer: BuiltinNormalizer, word: &str, expected: &str) {
        assert_eq!((*normalizer)(word), expected);
    }

    #[test]
    fn test_names_round_trip() {
        for normalizer in BuiltinNormalizer::ALL {
            assert_eq!(normalizer.to_string().parse::<BuiltinNormalizer>().unwrap(), normalizer);
        }

        assert!(matches!(
            "fuzzy".parse::<BuiltinNormalizer>(),
            Err(WordAlignError::UnknownNormalizer(name)) if name == "fuzzy"
        ));
    }
}
