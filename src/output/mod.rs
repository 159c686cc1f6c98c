// Wed Oct 14 2026 - Alex

pub mod json;
pub mod formatter;

pub use json::{JsonError, JsonSerializer};
pub use formatter::OutputFormatter;

use crate::pattern::HexPattern;
use serde::{Serialize, Serializer};

/// Result of `find-pattern`: the derived pattern and the inputs it covers.
#[derive(Debug, Clone, Serialize)]
pub struct CommonPattern {
    pub files: Vec<String>,
    pub pattern: HexPattern,
}

/// Result of `slice` for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceResult {
    pub file_name: String,
    pub start: usize,
    pub length: usize,
    #[serde(serialize_with = "serialize_hex")]
    pub data: Vec<u8>,
}

impl SliceResult {
    pub fn new(file_name: &str, start: usize, data: &[u8]) -> Self {
        Self {
            file_name: file_name.to_string(),
            start,
            length: data.len(),
            data: data.to_vec(),
        }
    }
}

fn serialize_hex<T, S>(data: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(data.as_ref()))
}
