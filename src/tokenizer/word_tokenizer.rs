use super::word::Word;

/// Splits text into words, each word owning the whitespace run in front of it.
/// The whitespace following the final word is returned separately.
///
/// Concatenating every word's leading whitespace and text followed by the
/// trailing whitespace gives back the input exactly.
///
/// ## Example
///
/// ```not_rust
/// " Hi\n\nthere! " -> ([" " + "Hi", "\n\n" + "there!"], " ")
/// ```
pub fn word_tokenizer(text: &str) -> (Vec<Word>, String) {
    let mut words: Vec<Word> = Vec::new();

    let mut whitespace_start = 0;
    let mut word_start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(start)) => {
                words.push(Word::tokenized(
                    text[start..i].to_owned(),
                    text[whitespace_start..start].to_owned(),
                    start,
                ));
                word_start = None;
                whitespace_start = i;
            }
            (false, None) => word_start = Some(i),
            _ => {}
        }
    }

    let trailing_whitespace = match word_start {
        Some(start) => {
            words.push(Word::tokenized(
                text[start..].to_owned(),
                text[whitespace_start..start].to_owned(),
                start,
            ));
            String::new()
        }
        None => text[whitespace_start..].to_owned(),
    };

    for i in 1..words.len() {
        let whitespace = words[i].leading_whitespace().to_owned();
        words[i - 1].set_right_whitespace(whitespace);
    }
    if let Some(last) = words.last_mut() {
        last.set_right_whitespace(trailing_whitespace.clone());
    }

    (words, trailing_whitespace)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> { words.iter().map(Word::text).collect() }

    #[test]
    fn test_empty() {
        let (words, trailing) = word_tokenizer("");

        assert!(words.is_empty());
        assert_eq!(trailing, "");
    }

    #[test]
    fn test_whitespace_only() {
        let (words, trailing) = word_tokenizer(" \n\t ");

        assert!(words.is_empty());
        assert_eq!(trailing, " \n\t ");
    }

    #[test_case("Hello there you wonderful world", &["Hello", "there", "you", "wonderful", "world"] ; "basic sentence")]
    #[test_case("wow", &["wow"] ; "single word")]
    #[test_case("and?\n\nHow could you say that?", &["and?", "How", "could", "you", "say", "that?"] ; "punctuation stays attached")]
    #[test_case("  “Quoted,”\u{a0}said   she. ", &["“Quoted,”", "said", "she."] ; "unicode whitespace")]
    fn test_word_boundaries(text: &str, expected: &[&str]) {
        let (words, _) = word_tokenizer(text);

        assert_eq!(texts(&words), expected);
    }

    #[test]
    fn test_whitespace_ownership() {
        let (words, trailing) = word_tokenizer(" and?\n\nHow  could\n");

        assert_eq!(words[0].leading_whitespace(), " ");
        assert_eq!(words[0].right_whitespace(), "\n\n");
        assert_eq!(words[1].leading_whitespace(), "\n\n");
        assert_eq!(words[1].right_whitespace(), "  ");
        assert_eq!(words[2].leading_whitespace(), "  ");
        assert_eq!(words[2].right_whitespace(), "\n");
        assert_eq!(trailing, "\n");
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let text = "héllo wörld";
        let (words, _) = word_tokenizer(text);

        assert_eq!(&text[words[0].span()], "héllo");
        assert_eq!(&text[words[1].span()], "wörld");
    }
}
