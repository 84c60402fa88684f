//! Word normalization.
//!
//! Turns a raw token into the canonical form used as a counting key:
//!
//! 1. **Punctuation removal**: every character outside `[A-Za-z0-9 -]` is dropped.
//! 2. **Case folding**: what survives is lowercased.
//!
//! `"This,"` and `"this"` both become `"this"`; `"?!"` becomes `""`.

/// Per-byte filter and fold table.
///
/// Maps each byte to its lowercase form if it belongs to `[A-Za-z0-9 -]`,
/// otherwise to `0` (dropped). Every byte of a multi-byte UTF-8 sequence is
/// `>= 0x80` and maps to `0`, so non-ASCII characters disappear whole and the
/// output is always ASCII.
const KEEP_FOLD_TABLE: [u8; 256] = build_keep_fold_table();

const fn build_keep_fold_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        let b = i as u8;
        table[i] = match b {
            b'A'..=b'Z' => b + (b'a' - b'A'),
            b'a'..=b'z' | b'0'..=b'9' | b' ' | b'-' => b,
            _ => 0,
        };
        i += 1;
    }
    table
}

/// Strips punctuation from a single token and lowercases it.
///
/// The filter is applied independently of how tokens were produced: internal
/// spaces and hyphens are preserved even though the whitespace tokenizer never
/// emits a token containing a space.
///
/// # Examples
///
/// ```
/// use wordfreq_core::analyzer::normalizer::WordNormalizer;
///
/// let n = WordNormalizer::new();
/// assert_eq!(n.normalize("Test."), "test");
/// assert_eq!(n.normalize("well-known"), "well-known");
/// assert_eq!(n.normalize("?!"), "");
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes `token` into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, token: &str, out: &mut String) {
        out.clear();
        out.reserve(token.len());

        for &b in token.as_bytes() {
            let folded = KEEP_FOLD_TABLE[b as usize];
            if folded != 0 {
                out.push(char::from(folded));
            }
        }
    }

    /// Normalizes `token` and returns a new `String`. May be empty.
    #[inline]
    pub fn normalize(&self, token: &str) -> String {
        let mut out = String::with_capacity(token.len());
        self.normalize_into(token, &mut out);
        out
    }
}

/// Applies [`WordNormalizer`] to every token of a sequence.
///
/// Order and length are preserved, including tokens that normalize to `""`;
/// whether those count is up to the aggregator.
#[derive(Debug, Copy, Clone, Default)]
pub struct SequenceNormalizer {
    word: WordNormalizer,
}

impl SequenceNormalizer {
    /// Creates a sequence normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            word: WordNormalizer::new(),
        }
    }

    /// Lazily normalizes each token.
    pub fn normalize_iter<'t, I>(&self, tokens: I) -> impl Iterator<Item = String> + 't
    where
        I: IntoIterator<Item = &'t str>,
        I::IntoIter: 't,
    {
        let word = self.word;
        tokens.into_iter().map(move |t| word.normalize(t))
    }

    /// Normalizes each token into a `Vec`, one entry per input token.
    pub fn normalize<'t, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        tokens.into_iter().map(|t| self.word.normalize(t)).collect()
    }
}
