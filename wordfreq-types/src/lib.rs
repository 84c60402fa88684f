//! Core types shared across the wordfreq workspace.
//!
//! This crate holds the values that cross the boundary between the counting
//! pipeline and whatever renders or consumes its output:
//!
//! - **WordCount**: a single `(word, count)` pair
//! - **WordCountSeries**: the ranked output of a counting run
//! - **CountOptions**: knobs for tie-breaking, empty words, filtering and truncation
//!
//! Keeping them separate lets front ends depend on the types without pulling
//! in the analyzer.

#![warn(missing_docs)]

use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A normalized word and the number of times it occurred.
///
/// `count` is always at least 1 for entries produced by the counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences (>= 1).
    pub count: u64,
}

impl WordCount {
    /// Creates a new word count.
    #[inline]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        debug_assert!(count >= 1, "word count must be positive");
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}

/// Secondary ordering applied to words with equal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Equal counts keep the order in which each word first appeared.
    #[default]
    FirstOccurrence,
    /// Equal counts are ordered by word, ascending.
    Lexical,
}

impl TieBreak {
    /// Parses the kebab-case name used in config files and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first-occurrence" => Some(TieBreak::FirstOccurrence),
            "lexical" => Some(TieBreak::Lexical),
            _ => None,
        }
    }

    /// Returns the kebab-case name of this policy.
    pub const fn name(self) -> &'static str {
        match self {
            TieBreak::FirstOccurrence => "first-occurrence",
            TieBreak::Lexical => "lexical",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do with tokens that normalize to the empty string (e.g. `"?!"` or `"..."`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyWordPolicy {
    /// Empty words are not counted.
    #[default]
    Drop,
    /// Empty words are counted as the word `""`.
    Keep,
}

/// Options controlling how a counting run is aggregated and trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions {
    /// Ordering among words with equal counts.
    pub tie_break: TieBreak,
    /// Handling of tokens that normalize to nothing.
    pub empty_words: EmptyWordPolicy,
    /// Entries with a count below this are left out. Default: 1 (keep all).
    pub min_count: u64,
    /// Keep only the first `limit` entries, if set.
    pub limit: Option<usize>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CountOptions {
    /// Default options: first-occurrence ties, empty words dropped, no filtering.
    pub const fn new() -> Self {
        Self {
            tie_break: TieBreak::FirstOccurrence,
            empty_words: EmptyWordPolicy::Drop,
            min_count: 1,
            limit: None,
        }
    }

    /// Returns a copy with the given tie-break policy.
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns a copy with the given empty-word policy.
    pub const fn with_empty_words(mut self, policy: EmptyWordPolicy) -> Self {
        self.empty_words = policy;
        self
    }

    /// Returns a copy with the given minimum count.
    pub const fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Returns a copy keeping at most `limit` entries.
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Reasons a list of entries is not a valid ranked series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Entry at `index` has a higher count than the entry before it.
    OutOfOrder {
        /// Position of the offending entry.
        index: usize,
    },
    /// The same word appears more than once.
    DuplicateWord {
        /// The repeated word.
        word: String,
    },
    /// An entry has a count of zero.
    ZeroCount {
        /// The word with the zero count.
        word: String,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::OutOfOrder { index } => {
                write!(f, "counts must be non-increasing (entry {})", index)
            }
            SeriesError::DuplicateWord { word } => write!(f, "duplicate word {:?}", word),
            SeriesError::ZeroCount { word } => write!(f, "zero count for word {:?}", word),
        }
    }
}

impl core::error::Error for SeriesError {}

/// Checks the ranked-series invariants: positive counts, non-increasing
/// counts, unique words.
fn check_ranked(entries: &[WordCount]) -> Result<(), SeriesError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.count == 0 {
            return Err(SeriesError::ZeroCount {
                word: entry.word.clone(),
            });
        }
        if index > 0 && entries[index - 1].count < entry.count {
            return Err(SeriesError::OutOfOrder { index });
        }
        if !seen.insert(entry.word.as_str()) {
            return Err(SeriesError::DuplicateWord {
                word: entry.word.clone(),
            });
        }
    }
    Ok(())
}

/// Ranked output of a counting run.
///
/// Entries are sorted by count (descending); equal counts follow the
/// [`TieBreak`] the series was built with. Each word appears at most once
/// and every count is at least 1. Deserialization enforces all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WordCount>", into = "Vec<WordCount>")]
pub struct WordCountSeries {
    entries: Vec<WordCount>,
}

impl WordCountSeries {
    /// Wraps entries that are already ranked.
    ///
    /// Callers are responsible for the ordering, uniqueness and positive-count
    /// invariants; they are checked in debug builds. Use `TryFrom` for
    /// entries from an untrusted source.
    pub fn from_ranked(entries: Vec<WordCount>) -> Self {
        if cfg!(debug_assertions) {
            if let Err(e) = check_ranked(&entries) {
                panic!("series: {}", e);
            }
        }
        Self { entries }
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for `word`, if present. Linear scan.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }

    /// The first `n` entries (or all of them, if fewer).
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> core::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// Entries in rank order.
    pub fn as_slice(&self) -> &[WordCount] {
        &self.entries
    }

    /// Consumes the series, returning the ranked entries.
    pub fn into_vec(self) -> Vec<WordCount> {
        self.entries
    }
}

impl TryFrom<Vec<WordCount>> for WordCountSeries {
    type Error = SeriesError;

    fn try_from(entries: Vec<WordCount>) -> Result<Self, SeriesError> {
        check_ranked(&entries)?;
        Ok(Self { entries })
    }
}

impl From<WordCountSeries> for Vec<WordCount> {
    fn from(series: WordCountSeries) -> Self {
        series.entries
    }
}

impl<'a> IntoIterator for &'a WordCountSeries {
    type Item = &'a WordCount;
    type IntoIter = core::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for WordCountSeries {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, u64)]) -> WordCountSeries {
        WordCountSeries::from_ranked(pairs.iter().map(|&(w, c)| WordCount::new(w, c)).collect())
    }

    #[test]
    fn word_count_display() {
        assert_eq!(WordCount::new("hello", 3).to_string(), "hello 3");
    }

    #[test]
    fn default_options() {
        let opts = CountOptions::default();
        assert_eq!(opts.tie_break, TieBreak::FirstOccurrence);
        assert_eq!(opts.empty_words, EmptyWordPolicy::Drop);
        assert_eq!(opts.min_count, 1);
        assert_eq!(opts.limit, None);
    }

    #[test]
    fn options_builders_chain() {
        let opts = CountOptions::new()
            .with_tie_break(TieBreak::Lexical)
            .with_empty_words(EmptyWordPolicy::Keep)
            .with_min_count(2)
            .with_limit(5);
        assert_eq!(opts.tie_break, TieBreak::Lexical);
        assert_eq!(opts.empty_words, EmptyWordPolicy::Keep);
        assert_eq!(opts.min_count, 2);
        assert_eq!(opts.limit, Some(5));
    }

    #[test]
    fn tie_break_names_round_trip() {
        for tb in [TieBreak::FirstOccurrence, TieBreak::Lexical] {
            assert_eq!(TieBreak::from_name(tb.name()), Some(tb));
        }
        assert_eq!(TieBreak::from_name("random"), None);
    }

    #[test]
    fn series_total_and_len() {
        let s = series(&[("a", 3), ("b", 2), ("c", 1)]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.total(), 6);
        assert!(!s.is_empty());
    }

    #[test]
    fn empty_series() {
        let s = WordCountSeries::default();
        assert!(s.is_empty());
        assert_eq!(s.total(), 0);
        assert!(s.top(3).is_empty());
    }

    #[test]
    fn series_get() {
        let s = series(&[("a", 3), ("b", 2)]);
        assert_eq!(s.get("b"), Some(2));
        assert_eq!(s.get("z"), None);
    }

    #[test]
    fn top_clamps_to_len() {
        let s = series(&[("a", 3), ("b", 2)]);
        assert_eq!(s.top(1).len(), 1);
        assert_eq!(s.top(1)[0].word, "a");
        assert_eq!(s.top(10).len(), 2);
    }

    #[test]
    fn series_serializes_as_array() {
        let s = series(&[("this", 2), ("is", 1)]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"[{"word":"this","count":2},{"word":"is","count":1}]"#
        );
    }

    #[test]
    fn tie_break_serde_uses_kebab_case() {
        let json = serde_json::to_string(&TieBreak::FirstOccurrence).unwrap();
        assert_eq!(json, r#""first-occurrence""#);
        let tb: TieBreak = serde_json::from_str(r#""lexical""#).unwrap();
        assert_eq!(tb, TieBreak::Lexical);
    }

    #[test]
    #[should_panic(expected = "non-increasing")]
    #[cfg(debug_assertions)]
    fn unranked_entries_rejected_in_debug() {
        let _ = series(&[("a", 1), ("b", 2)]);
    }

    #[test]
    #[should_panic(expected = "duplicate word")]
    #[cfg(debug_assertions)]
    fn duplicate_words_rejected_in_debug() {
        let _ = series(&[("a", 2), ("a", 2)]);
    }

    #[test]
    fn try_from_accepts_ranked_entries() {
        let entries = vec![WordCount::new("a", 2), WordCount::new("b", 2), WordCount::new("c", 1)];
        let s = WordCountSeries::try_from(entries).unwrap();
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn try_from_rejects_out_of_order() {
        let entries = vec![WordCount::new("a", 1), WordCount::new("b", 5)];
        assert_eq!(
            WordCountSeries::try_from(entries),
            Err(SeriesError::OutOfOrder { index: 1 })
        );
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let entries = vec![WordCount::new("a", 3), WordCount::new("a", 1)];
        assert_eq!(
            WordCountSeries::try_from(entries),
            Err(SeriesError::DuplicateWord { word: "a".into() })
        );
    }

    #[test]
    fn try_from_rejects_zero_count() {
        let entries = vec![
            WordCount::new("a", 1),
            WordCount {
                word: "b".into(),
                count: 0,
            },
        ];
        assert_eq!(
            WordCountSeries::try_from(entries),
            Err(SeriesError::ZeroCount { word: "b".into() })
        );
    }

    #[test]
    fn deserialize_round_trips_valid_series() {
        let s = series(&[("this", 2), ("is", 1)]);
        let json = serde_json::to_string(&s).unwrap();
        let back: WordCountSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserialize_rejects_broken_series() {
        let broken = [
            r#"[{"word":"a","count":1},{"word":"b","count":5}]"#,
            r#"[{"word":"a","count":5},{"word":"a","count":1}]"#,
            r#"[{"word":"a","count":1},{"word":"b","count":0}]"#,
            r#"[{"word":"a","count":1},{"word":"a","count":5},{"word":"b","count":0}]"#,
        ];
        for json in broken {
            assert!(
                serde_json::from_str::<WordCountSeries>(json).is_err(),
                "accepted {json}"
            );
        }
    }
}
