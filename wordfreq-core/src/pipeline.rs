//! The counting pipeline.
//!
//! ```text
//! raw text ──► Tokenizer ──► SequenceNormalizer ──► Aggregator ──► WordCountSeries
//! ```
//!
//! Every stage is a pure function of its input; the pipeline holds no state
//! between calls and performs no I/O.

use crate::analyzer::{SequenceNormalizer, Tokenizer};
use crate::count::{aggregate, CountStats, WordCounter};
use wordfreq_types::{CountOptions, WordCountSeries};

/// Counts the words of `text` with default options.
///
/// # Examples
///
/// ```
/// use wordfreq_core::count_words;
///
/// let series = count_words("The cat. THE hat!");
/// assert_eq!(series.get("the"), Some(2));
/// assert_eq!(series.iter().next().map(|e| e.word.as_str()), Some("the"));
/// ```
pub fn count_words(text: &str) -> WordCountSeries {
    CountWords::default().count(text)
}

/// Configurable word-counting pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountWords {
    tokenizer: Tokenizer,
    normalizer: SequenceNormalizer,
    options: CountOptions,
}

impl CountWords {
    /// Creates a pipeline with the given options.
    pub const fn new(options: CountOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            normalizer: SequenceNormalizer::new(),
            options,
        }
    }

    /// Options applied when ranking.
    #[inline]
    pub fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Tokenizes, normalizes and counts `text`.
    pub fn count(&self, text: &str) -> WordCountSeries {
        let tokens = self.tokenizer.tokens(text);
        let words = self.normalizer.normalize_iter(tokens);
        let series = aggregate(words, self.options);

        tracing::debug!(
            bytes = text.len(),
            distinct = series.len(),
            total = series.total(),
            "counted words"
        );
        series
    }

    /// Counts the words of several texts together, as if concatenated with
    /// whitespace between them.
    pub fn count_all<'t, I>(&self, texts: I) -> WordCountSeries
    where
        I: IntoIterator<Item = &'t str>,
    {
        self.count_all_with_stats(texts).0
    }

    /// Like [`count_all`](Self::count_all), also returning run statistics.
    pub fn count_all_with_stats<'t, I>(&self, texts: I) -> (WordCountSeries, CountStats)
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut counter = WordCounter::with_options(self.options);
        for text in texts {
            self.feed(&mut counter, text);
        }

        let stats = counter.stats();
        tracing::debug!(%stats, "counting finished");
        (counter.finish(), stats)
    }

    /// Feeds the normalized words of `text` into an existing counter.
    pub fn feed(&self, counter: &mut WordCounter, text: &str) {
        let tokens = self.tokenizer.tokens(text);
        counter.extend(self.normalizer.normalize_iter(tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_types::{EmptyWordPolicy, TieBreak};

    const BROADCAST: &str =
        "This is a test of the emergency broadcast system. This is only a test.";

    fn pairs(series: &WordCountSeries) -> Vec<(&str, u64)> {
        series.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn empty_text() {
        assert!(count_words("").is_empty());
        assert!(count_words(" \n\t ").is_empty());
    }

    #[test]
    fn broadcast_scenario() {
        let series = count_words(BROADCAST);
        assert_eq!(
            pairs(&series),
            [
                ("this", 2),
                ("is", 2),
                ("a", 2),
                ("test", 2),
                ("of", 1),
                ("the", 1),
                ("emergency", 1),
                ("broadcast", 1),
                ("system", 1),
                ("only", 1),
            ]
        );
    }

    #[test]
    fn broadcast_scenario_lexical() {
        let series = CountWords::new(CountOptions::new().with_tie_break(TieBreak::Lexical))
            .count(BROADCAST);
        let words: Vec<_> = series.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(
            words,
            [
                "a",
                "is",
                "test",
                "this",
                "broadcast",
                "emergency",
                "of",
                "only",
                "system",
                "the",
            ]
        );
    }

    #[test]
    fn case_and_punctuation_fold_together() {
        let series = count_words("Rust, rust! RUST? (rust)");
        assert_eq!(pairs(&series), [("rust", 4)]);
    }

    #[test]
    fn pure_punctuation_tokens_dropped() {
        let series = count_words("wait ... what ?!");
        assert_eq!(pairs(&series), [("wait", 1), ("what", 1)]);
    }

    #[test]
    fn pure_punctuation_tokens_kept_on_request() {
        let pipeline =
            CountWords::new(CountOptions::new().with_empty_words(EmptyWordPolicy::Keep));
        let series = pipeline.count("wait ... what ?!");
        assert_eq!(pairs(&series), [("", 2), ("wait", 1), ("what", 1)]);
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        let series = count_words("well-known well known");
        assert_eq!(series.get("well-known"), Some(1));
        assert_eq!(series.get("well"), Some(1));
    }

    #[test]
    fn count_all_matches_concatenation() {
        let pipeline = CountWords::default();
        let parts = ["one two", "two three", "three three"];
        let joined = parts.join(" ");
        assert_eq!(pipeline.count_all(parts), pipeline.count(&joined));
    }

    #[test]
    fn count_all_reports_stats() {
        let (series, stats) = CountWords::default().count_all_with_stats(["a b", "-- a !"]);
        assert_eq!(stats.words_seen, 5);
        assert_eq!(stats.empty_dropped, 1);
        assert_eq!(stats.counted, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(pairs(&series), [("a", 2), ("b", 1), ("--", 1)]);
    }

    #[test]
    fn options_apply_through_pipeline() {
        let pipeline = CountWords::new(CountOptions::new().with_min_count(2).with_limit(1));
        let series = pipeline.count(BROADCAST);
        assert_eq!(pairs(&series), [("this", 2)]);
    }

    #[test]
    fn deterministic_across_runs() {
        let first = count_words(BROADCAST);
        for _ in 0..10 {
            assert_eq!(count_words(BROADCAST), first);
        }
    }
}
