//! Whitespace Tokenizer
//!
//! First stage of the counting pipeline: split raw text into tokens.
//!
//! A token is any maximal run of non-whitespace characters. Runs of
//! whitespace (spaces, tabs, newlines, carriage returns and the other
//! Unicode `White_Space` characters) are delimiters and never produce
//! empty tokens:
//!
//! ```ignore
//! ("This", 0)
//! ("is", 1)
//! ("a", 2)
//! ("test.", 3)
//! ```
//!
//! Tokens are slices of the input; nothing is allocated. Punctuation is left
//! in place, stripping it is the normalizer's job.
//!
//! ## Usage
//!
//! ```rust
//! use wordfreq_core::analyzer::tokenizer::Tokenizer;
//!
//! let mut seen = Vec::new();
//! Tokenizer::new().tokenize("hello,  world\n", |token, position| {
//!     seen.push((token, position));
//! });
//! assert_eq!(seen, [("hello,", 0), ("world", 1)]);
//! ```

use core::str::SplitWhitespace;

/// Splits raw text into whitespace-delimited tokens.
///
/// Stateless and `Copy`; a single instance can be reused for any number of
/// inputs. Any string is valid input.
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)` left to right.
    ///
    /// Position is the zero-based token index. Every token is emitted, the
    /// same sequence [`Tokenizer::tokens`] yields.
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, usize),
    {
        for (pos, token) in text.split_whitespace().enumerate() {
            debug_assert!(!token.is_empty(), "tokenizer: empty token emitted");
            emit(token, pos);
        }
    }

    /// Returns the tokens of `text` as a lazy iterator.
    #[inline]
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'t> {
        Tokens {
            inner: text.split_whitespace(),
        }
    }
}

/// Lazy iterator over the tokens of a text. See [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    inner: SplitWhitespace<'t>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    #[inline]
    fn next(&mut self) -> Option<&'t str> {
        self.inner.next()
    }
}

/// Convenience wrapper: tokens of `text`, in order.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokenizer::new().tokens(text)
}
