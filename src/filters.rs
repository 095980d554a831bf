//! Whole-text filters for preparing documents before they are reconciled.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+([;:'"?!.,])"#).expect("valid regex"));

/// Replace curly quotes and apostrophes with their straight forms.
#[must_use]
pub fn plain_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '“' | '”' => '"',
            '‘' | '’' => '\'',
            c => c,
        })
        .collect()
}

/// Replace straight quotes with curly ones. Quotes of each kind are assumed to
/// alternate between opening and closing, starting with an opening quote.
#[must_use]
pub fn curly_quotes(text: &str) -> String {
    let mut in_double_quote = false;
    let mut in_single_quote = false;

    text.chars()
        .map(|c| match c {
            '"' => {
                in_double_quote = !in_double_quote;
                if in_double_quote { '“' } else { '”' }
            }
            '\'' => {
                in_single_quote = !in_single_quote;
                if in_single_quote { '‘' } else { '’' }
            }
            c => c,
        })
        .collect()
}

/// Remove whitespace in front of punctuation, e.g. `"Hello , world !"` becomes
/// `"Hello, world!"`. Quotes count as punctuation too.
#[must_use]
pub fn remove_space_before_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCTUATION.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_quotes() {
        assert_eq!(
            plain_quotes("“I can’t,” she said. ‘Why?’"),
            "\"I can't,\" she said. 'Why?'"
        );
        assert_eq!(plain_quotes(""), "");
    }

    #[test]
    fn test_curly_quotes() {
        assert_snapshot!(curly_quotes(r#""Stop," he said, "or 'else' I go.""#), @"“Stop,” he said, “or ‘else’ I go.”");
    }

    #[test]
    fn test_curly_then_plain_restores_text() {
        let text = r#"He said "no" and 'yes'."#;

        assert_eq!(plain_quotes(&curly_quotes(text)), text);
    }

    #[test]
    fn test_remove_space_before_punctuation() {
        assert_eq!(
            remove_space_before_punctuation("Hello ,  world ! Really ; truly : yes ."),
            "Hello,  world! Really; truly: yes."
        );
        assert_eq!(
            remove_space_before_punctuation("line\n.\nnext"),
            "line.\nnext"
        );
    }
}
