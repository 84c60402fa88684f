//! Word aggregation.
//!
//! Consumes normalized words in a single left-to-right pass and ranks the
//! distinct words by how often they occurred.
//!
//! ## How It Works
//!
//! Each new word is appended to `entries` and its slot recorded in an
//! `FxHashMap`; later occurrences bump the count in place. `entries` is
//! therefore always in first-occurrence order, which is what makes the
//! default tie-break a plain stable sort on count.

use crate::count::stats::CountStats;
use rustc_hash::FxHashMap;
use wordfreq_types::{CountOptions, EmptyWordPolicy, TieBreak, WordCount, WordCountSeries};

/// Incremental word counter.
///
/// Feed it normalized words with [`add`](Self::add) (possibly across several
/// texts), then call [`finish`](Self::finish) to get the ranked series.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    options: CountOptions,
    slots: FxHashMap<String, usize>,
    entries: Vec<WordCount>,
    words_seen: u64,
    empty_dropped: u64,
}

impl WordCounter {
    /// Creates a counter with default options.
    pub fn new() -> Self {
        Self::with_options(CountOptions::default())
    }

    /// Creates a counter with the given options.
    pub fn with_options(options: CountOptions) -> Self {
        Self {
            options,
            slots: FxHashMap::default(),
            entries: Vec::new(),
            words_seen: 0,
            empty_dropped: 0,
        }
    }

    /// Options this counter was built with.
    #[inline]
    pub fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Records one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.words_seen += 1;

        if word.is_empty() && self.options.empty_words == EmptyWordPolicy::Drop {
            self.empty_dropped += 1;
            return;
        }

        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.slots.insert(word.to_owned(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
    }

    /// Number of distinct words counted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current count for `word`.
    pub fn count_of(&self, word: &str) -> u64 {
        self.slots
            .get(word)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Statistics for the words fed so far.
    pub fn stats(&self) -> CountStats {
        CountStats::from_counter(self)
    }

    #[inline]
    pub(crate) fn words_seen(&self) -> u64 {
        self.words_seen
    }

    #[inline]
    pub(crate) fn empty_dropped(&self) -> u64 {
        self.empty_dropped
    }

    #[inline]
    pub(crate) fn counted(&self) -> u64 {
        self.words_seen - self.empty_dropped
    }

    /// Ranks the counted words, then applies `min_count` and `limit`.
    pub fn finish(self) -> WordCountSeries {
        let CountOptions {
            tie_break,
            min_count,
            limit,
            ..
        } = self.options;
        let mut entries = self.entries;

        rank(&mut entries, tie_break);

        if min_count > 1 {
            entries.retain(|e| e.count >= min_count);
        }
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        WordCountSeries::from_ranked(entries)
    }
}

impl<S: AsRef<str>> Extend<S> for WordCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add(word.as_ref());
        }
    }
}

/// Sorts entries by count descending, resolving ties per `tie_break`.
///
/// Expects `entries` in first-occurrence order.
fn rank(entries: &mut [WordCount], tie_break: TieBreak) {
    match tie_break {
        // stable: equal counts keep first-occurrence order
        TieBreak::FirstOccurrence => entries.sort_by(|a, b| b.count.cmp(&a.count)),
        // words are unique, so this is a total order
        TieBreak::Lexical => {
            entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)))
        }
    }
}

/// Counts `words` in one pass and returns the ranked series.
pub fn aggregate<I, S>(words: I, options: CountOptions) -> WordCountSeries
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = WordCounter::with_options(options);
    counter.extend(words);
    counter.finish()
}
