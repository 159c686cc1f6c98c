// Mon Oct 12 2026 - Alex

pub mod error;
pub mod wildcard;
pub mod pattern;
pub mod matcher;
pub mod builder;
pub mod dump;

pub use error::PatternError;
pub use wildcard::NibbleSymbol;
pub use pattern::HexPattern;
pub use matcher::{NibblePatternMatcher, ScanMode};
pub use builder::{find_common_pattern, PatternBuilder};
pub use dump::{HexDump, MAX_DUMP_WIDTH};

/// Scans `data` as a nibble stream for `pattern` (`0-9`, `a-f`, `?`),
/// trying a start every `step` nibbles. Returns `start / step` for each match.
///
/// The pattern and stride are both validated before scanning, so an error
/// never comes with partial results.
pub fn pattern_search(pattern: &str, data: &[u8], step: i64) -> Result<Vec<usize>, PatternError> {
    let pattern = HexPattern::parse(pattern)?;
    let matcher = NibblePatternMatcher::new(step)?;
    Ok(matcher.search(&pattern, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_wildcard_single_byte() {
        assert_eq!(pattern_search("??", &[0x12], 1).unwrap(), vec![0]);
    }

    #[test]
    fn test_invalid_symbol() {
        let err = pattern_search("1g", &[0x12], 1).unwrap_err();
        assert_eq!(err, PatternError::InvalidPatternSymbol { symbol: 'g', position: 1 });
    }

    #[test]
    fn test_invalid_symbol_after_possible_match() {
        // "1" would match at 0; the trailing bad symbol must still fail the call
        let err = pattern_search("1?Z", &[0x12, 0x34], 1).unwrap_err();
        assert_eq!(err, PatternError::InvalidPatternSymbol { symbol: 'Z', position: 2 });
    }

    #[test]
    fn test_invalid_symbol_with_oversized_pattern() {
        assert!(pattern_search("12345x", &[0x12], 1).is_err());
    }

    #[test]
    fn test_stride_two_lands_on_high_nibbles() {
        let results = pattern_search("1", &[0x12, 0x34], 2).unwrap();
        assert_eq!(results, vec![0]);
        assert!(results.iter().all(|i| (i * 2) % 2 == 0));

        assert!(pattern_search("2", &[0x12, 0x34], 2).unwrap().is_empty());
        assert_eq!(pattern_search("3", &[0x12, 0x34], 2).unwrap(), vec![1]);
    }

    #[test]
    fn test_invalid_stride() {
        assert_eq!(pattern_search("1", &[0x12], 0), Err(PatternError::InvalidStride(0)));
        assert_eq!(pattern_search("1", &[0x12], -1), Err(PatternError::InvalidStride(-1)));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let data = [0xAB, 0xBA, 0xAB];
        let first = pattern_search("ab", &data, 1).unwrap();
        let second = pattern_search("ab", &data, 1).unwrap();
        assert_eq!(first, vec![0, 4]);
        assert_eq!(first, second);
    }
}
