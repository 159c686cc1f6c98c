// Mon Oct 12 2026 - Alex

pub mod config;
pub mod memory;
pub mod pattern;
pub mod ngram;
pub mod search;
pub mod analysis;
pub mod transform;
pub mod output;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use memory::{InputFile, NibbleView, SliceEnd};
pub use pattern::{pattern_search, HexPattern, NibblePatternMatcher, NibbleSymbol, PatternError, ScanMode};
pub use ngram::{count_ngrams, NgramCounter, NgramTable};
pub use search::{search_bytes, SearchQuery, StringFormat};
pub use transform::{transform, TransformMode};
