//! Statistics and CountStats.

use crate::count::aggregator::WordCounter;

/// A snapshot of counting statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountStats {
    /// Number of normalized words fed to the counter.
    pub words_seen: u64,
    /// Number of words that went into a count.
    pub counted: u64,
    /// Number of words dropped for normalizing to the empty string.
    pub empty_dropped: u64,
    /// Number of distinct words.
    pub distinct_words: usize,
}

impl CountStats {
    /// Constructs stats from a counter.
    pub fn from_counter(counter: &WordCounter) -> Self {
        Self {
            words_seen: counter.words_seen(),
            counted: counter.counted(),
            empty_dropped: counter.empty_dropped(),
            distinct_words: counter.len(),
        }
    }

    /// Average number of occurrences per distinct word.
    pub fn mean_frequency(&self) -> f64 {
        if self.distinct_words == 0 {
            return 0.0;
        }
        self.counted as f64 / self.distinct_words as f64
    }
}

impl core::fmt::Display for CountStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} distinct, {:.2} per word",
            self.counted,
            self.distinct_words,
            self.mean_frequency()
        )?;

        if self.empty_dropped > 0 {
            write!(f, ", {} empty dropped", self.empty_dropped)?;
        }

        Ok(())
    }
}
