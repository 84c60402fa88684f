//! Counting and ranking.
//!
//! - **Aggregator**: Tallies normalized words and ranks them
//! - **Stats**: Summary of a counting run

pub mod aggregator;
pub mod stats;

pub use aggregator::{aggregate, WordCounter};
pub use stats::CountStats;
