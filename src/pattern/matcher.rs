// Mon Oct 12 2026 - Alex

use crate::memory::{window_starts, NibbleView};
use crate::pattern::{HexPattern, PatternError};
use serde::{Deserialize, Serialize};

/// How candidate positions advance through the nibble stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Byte-aligned starts only; indices come back as byte offsets.
    #[default]
    Byte,
    /// Every nibble is a candidate start.
    Nibble,
}

impl ScanMode {
    pub fn step(&self) -> usize {
        match self {
            Self::Byte => 2,
            Self::Nibble => 1,
        }
    }
}

/// Scans a buffer's nibble stream at a fixed stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NibblePatternMatcher {
    step: usize,
}

impl NibblePatternMatcher {
    pub fn new(step: i64) -> Result<Self, PatternError> {
        if step <= 0 {
            return Err(PatternError::InvalidStride(step));
        }
        let step = usize::try_from(step).map_err(|_| PatternError::InvalidStride(step))?;
        Ok(Self { step })
    }

    pub fn with_mode(mode: ScanMode) -> Self {
        Self { step: mode.step() }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Candidate starts are `0, step, 2 * step, ...` with
    /// `start + pattern.len() <= 2 * data.len()`. Matches are reported as
    /// `start / step`, in ascending order.
    pub fn search(&self, pattern: &HexPattern, data: &[u8]) -> Vec<usize> {
        self.candidates(pattern, data)
            .map(|start| start / self.step)
            .collect()
    }

    pub fn find_first(&self, pattern: &HexPattern, data: &[u8]) -> Option<usize> {
        self.candidates(pattern, data)
            .next()
            .map(|start| start / self.step)
    }

    pub fn count(&self, pattern: &HexPattern, data: &[u8]) -> usize {
        self.candidates(pattern, data).count()
    }

    fn candidates<'a>(
        &self,
        pattern: &'a HexPattern,
        data: &'a [u8],
    ) -> impl Iterator<Item = usize> + 'a {
        let view = NibbleView::new(data);
        window_starts(view.len(), pattern.len(), self.step)
            .filter(move |&start| matches_at(pattern, &view, start))
    }
}

fn matches_at(pattern: &HexPattern, view: &NibbleView<'_>, start: usize) -> bool {
    pattern
        .symbols()
        .iter()
        .enumerate()
        .all(|(offset, symbol)| {
            symbol.is_wildcard() || symbol.matches(view.nibble_at(start + offset))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_exact_positions(pattern: &str, data: &[u8]) -> Vec<usize> {
        let nibbles: Vec<u8> = data.iter().flat_map(|b| [b >> 4, b & 0xF]).collect();
        let wanted: Vec<u8> = pattern
            .chars()
            .map(|c| c.to_digit(16).unwrap() as u8)
            .collect();

        if wanted.len() > nibbles.len() {
            return Vec::new();
        }
        (0..=nibbles.len() - wanted.len())
            .filter(|&p| nibbles[p..p + wanted.len()] == wanted[..])
            .collect()
    }

    #[test]
    fn test_rejects_non_positive_stride() {
        assert_eq!(NibblePatternMatcher::new(0), Err(PatternError::InvalidStride(0)));
        assert_eq!(NibblePatternMatcher::new(-3), Err(PatternError::InvalidStride(-3)));
        assert_eq!(NibblePatternMatcher::new(1).unwrap().step(), 1);
    }

    #[test]
    fn test_scan_modes() {
        assert_eq!(NibblePatternMatcher::with_mode(ScanMode::Byte).step(), 2);
        assert_eq!(NibblePatternMatcher::with_mode(ScanMode::Nibble).step(), 1);
    }

    #[test]
    fn test_byte_mode_offsets() {
        let matcher = NibblePatternMatcher::with_mode(ScanMode::Byte);
        let pattern = HexPattern::normalized("01 01 ?? 01").unwrap();

        let results = matcher.search(&pattern, &[0x01, 0x01, 0xfe, 0x01, 0x01, 0x01, 0x01]);
        assert_eq!(results, vec![0, 3]);

        let results = matcher.search(&pattern, &[0x01, 0x20, 0x01, 0x01]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_nibble_mode_finds_unaligned() {
        let matcher = NibblePatternMatcher::new(1).unwrap();
        let pattern = HexPattern::parse("23").unwrap();

        assert_eq!(matcher.search(&pattern, &[0x12, 0x34]), vec![1]);
        assert_eq!(matcher.find_first(&pattern, &[0x12, 0x34]), Some(1));

        let byte_matcher = NibblePatternMatcher::with_mode(ScanMode::Byte);
        assert!(byte_matcher.search(&pattern, &[0x12, 0x34]).is_empty());
    }

    #[test]
    fn test_pattern_filling_whole_buffer() {
        let matcher = NibblePatternMatcher::new(1).unwrap();

        let exact = HexPattern::parse("1234").unwrap();
        assert_eq!(matcher.search(&exact, &[0x12, 0x34]), vec![0]);

        let too_long = HexPattern::parse("12340").unwrap();
        assert!(matcher.search(&too_long, &[0x12, 0x34]).is_empty());
    }

    #[test]
    fn test_wildcards_never_read_past_end() {
        let matcher = NibblePatternMatcher::new(1).unwrap();
        let pattern = HexPattern::parse("??").unwrap();
        assert_eq!(matcher.search(&pattern, &[0x12]), vec![0]);

        let pattern = HexPattern::parse("?").unwrap();
        assert_eq!(matcher.search(&pattern, &[0x12]), vec![0, 1]);
    }

    #[test]
    fn test_empty_pattern_matches_every_candidate() {
        let matcher = NibblePatternMatcher::new(1).unwrap();
        let pattern = HexPattern::default();
        assert_eq!(matcher.search(&pattern, &[0xAB]), vec![0, 1, 2]);
        assert_eq!(matcher.search(&pattern, &[]), vec![0]);
    }

    #[test]
    fn test_empty_buffer() {
        let matcher = NibblePatternMatcher::new(1).unwrap();
        let pattern = HexPattern::parse("0").unwrap();
        assert!(matcher.search(&pattern, &[]).is_empty());
        assert_eq!(matcher.count(&pattern, &[]), 0);
    }

    #[test]
    fn test_stride_three_divides_indices() {
        let matcher = NibblePatternMatcher::new(3).unwrap();
        let pattern = HexPattern::parse("?").unwrap();
        // starts 0, 3 over four nibbles
        assert_eq!(matcher.search(&pattern, &[0x00, 0x00]), vec![0, 1]);
    }

    #[test]
    fn test_agrees_with_naive_scan() {
        let data: Vec<u8> = (0u8..=255).map(|b| b.wrapping_mul(37) ^ 0x5A).collect();
        let matcher = NibblePatternMatcher::new(1).unwrap();

        for pattern in ["a", "5a", "0f", "e3c", "5a7f", "abcdef", "00"] {
            let parsed = HexPattern::parse(pattern).unwrap();
            assert_eq!(
                matcher.search(&parsed, &data),
                naive_exact_positions(pattern, &data),
                "pattern {}",
                pattern
            );
        }
    }
}
