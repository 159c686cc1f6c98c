// Tue Oct 13 2026 - Alex

use crate::pattern::{HexPattern, NibblePatternMatcher, PatternError, ScanMode};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid hex query: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// How the query string of a search is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    /// UTF-8 text, e.g. `Profile 1`.
    Text,
    /// Hex encoded bytes, e.g. `00 01` or `0001`.
    Hex,
    /// Nibble pattern, e.g. `?? 01` or `??01`.
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Bytes(Vec<u8>),
    Pattern(HexPattern),
}

impl SearchQuery {
    pub fn parse(format: StringFormat, data: &str) -> Result<Self, SearchError> {
        match format {
            StringFormat::Text => Ok(Self::Bytes(data.as_bytes().to_vec())),
            StringFormat::Hex => {
                let clean: String = data.chars().filter(|c| !c.is_whitespace()).collect();
                Ok(Self::Bytes(hex::decode(clean)?))
            }
            StringFormat::Pattern => Ok(Self::Pattern(HexPattern::normalized(data)?)),
        }
    }

    /// Byte offsets of every occurrence in `data`.
    pub fn find_all(&self, data: &[u8]) -> Vec<usize> {
        match self {
            Self::Bytes(needle) => search_bytes(needle, data),
            Self::Pattern(pattern) => {
                NibblePatternMatcher::with_mode(ScanMode::Byte).search(pattern, data)
            }
        }
    }
}

/// Start offsets of every occurrence of `needle`, overlapping ones included.
/// An empty needle finds nothing.
pub fn search_bytes(needle: &[u8], haystack: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let first = needle[0];
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| window[0] == first && *window == needle)
        .map(|(offset, _)| offset)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub file_name: String,
    pub count: usize,
    pub matches: bool,
    pub positions: Vec<usize>,
}

impl SearchReport {
    pub fn new(file_name: &str, positions: Vec<usize>, min_count: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            count: positions.len(),
            matches: positions.len() >= min_count,
            positions,
        }
    }
}

pub fn sort_reports(reports: &mut [SearchReport]) {
    reports.sort_by(|a, b| a.file_name.cmp(&b.file_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_bytes_overlapping() {
        assert_eq!(search_bytes(b"aa", b"aaaa"), vec![0, 1, 2]);
        assert_eq!(search_bytes(b"et", b"street meet"), vec![4, 9]);
    }

    #[test]
    fn test_search_bytes_edges() {
        assert!(search_bytes(b"", b"abc").is_empty());
        assert!(search_bytes(b"abcd", b"abc").is_empty());
        assert_eq!(search_bytes(b"abc", b"abc"), vec![0]);
    }

    #[test]
    fn test_text_query() {
        let query = SearchQuery::parse(StringFormat::Text, "Profile 1").unwrap();
        assert_eq!(query, SearchQuery::Bytes(b"Profile 1".to_vec()));
        assert_eq!(query.find_all(b"xxProfile 1"), vec![2]);
    }

    #[test]
    fn test_hex_query() {
        let spaced = SearchQuery::parse(StringFormat::Hex, "00 01").unwrap();
        let packed = SearchQuery::parse(StringFormat::Hex, "0001").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced.find_all(&[0xFF, 0x00, 0x01, 0x00, 0x01]), vec![1, 3]);

        assert!(matches!(
            SearchQuery::parse(StringFormat::Hex, "0g"),
            Err(SearchError::InvalidHex(_))
        ));
        assert!(SearchQuery::parse(StringFormat::Hex, "001").is_err());
    }

    #[test]
    fn test_pattern_query_reports_byte_offsets() {
        let query = SearchQuery::parse(StringFormat::Pattern, "?? 01").unwrap();
        assert_eq!(query.find_all(&[0x01, 0x01, 0x02, 0x01]), vec![0, 2]);

        assert!(matches!(
            SearchQuery::parse(StringFormat::Pattern, "?? 0x"),
            Err(SearchError::Pattern(PatternError::InvalidPatternSymbol { symbol: 'x', .. }))
        ));
    }

    #[test]
    fn test_report_min_count() {
        let report = SearchReport::new("a.bin", vec![1, 5], 3);
        assert_eq!(report.count, 2);
        assert!(!report.matches);

        let report = SearchReport::new("a.bin", vec![1, 5], 2);
        assert!(report.matches);
    }

    #[test]
    fn test_sort_reports() {
        let mut reports = vec![
            SearchReport::new("b", vec![], 1),
            SearchReport::new("a", vec![0], 1),
        ];
        sort_reports(&mut reports);
        assert_eq!(reports[0].file_name, "a");
    }
}
