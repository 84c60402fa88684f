//! Word frequency counting.
//!
//! Splits text on whitespace, strips punctuation, lowercases, tallies and
//! ranks words by descending count.
//!
//! ```
//! use wordfreq_core::count_words;
//!
//! let series = count_words("This is a test. This is only a test.");
//! assert_eq!(series.top(1)[0].word, "this");
//! assert_eq!(series.total(), 9);
//! ```

pub mod analyzer;
pub mod config;
pub mod count;
pub mod error;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod render;

pub use count::{CountStats, WordCounter};
pub use error::{Error, Result};
pub use pipeline::{count_words, CountWords};
pub use render::OutputFormat;
pub use wordfreq_types::{
    CountOptions, EmptyWordPolicy, SeriesError, TieBreak, WordCount, WordCountSeries,
};
