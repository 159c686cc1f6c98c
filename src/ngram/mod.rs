// Mon Oct 12 2026 - Alex

pub mod counter;
pub mod aggregate;

pub use counter::{
    count_ngrams, ngram_coverage, ngram_window_count, top_ngrams, NgramCounter, NgramTable,
};
pub use aggregate::{FileCount, NgramAggregator, NgramSummary};
