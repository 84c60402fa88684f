//! Text analysis stages.
//!
//! This module provides the front half of the counting pipeline:
//! - **Tokenizer**: Splits raw text into whitespace-delimited tokens
//! - **Normalizer**: Strips punctuation and lowercases tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{SequenceNormalizer, WordNormalizer};
pub use tokenizer::{tokenize, Tokenizer, Tokens};
