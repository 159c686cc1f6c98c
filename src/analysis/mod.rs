// Wed Oct 14 2026 - Alex

pub mod frequency;

pub use frequency::{byte_frequencies, ByteFrequency, FileFrequencies};
