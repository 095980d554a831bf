pub mod word;
pub mod word_tokenizer;
