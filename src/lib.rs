//! Reconcile two near-duplicate plain-text documents word by word.
//!
//! A [`WordText`] tokenizes a document into words while keeping every byte of
//! whitespace around, so it can be edited at the word level and written back
//! without disturbing the formatting. An [`AlignmentSession`] walks two of them
//! in lock-step and hands every mismatch to an [`Operator`] to resolve.

mod alignment;
mod errors;
pub mod filters;
mod normalizer;
mod tokenizer;
mod word_text;

pub use alignment::{
    Action, AlignmentSession, Command, DEFAULT_CONTEXT_RADIUS, Discrepancy, Operator,
    SessionOutcome, SessionState,
};
pub use errors::{Result, WordAlignError};
pub use normalizer::{BuiltinNormalizer, Normalizer};
pub use tokenizer::{word::Word, word_tokenizer::word_tokenizer};
pub use word_text::WordText;
