// Thu Oct 15 2026 - Alex

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid offset {0:?}: expected a decimal, 0x, 0o or 0b number")]
    InvalidOffset(String),
}

/// Parses an offset in decimal or with a `0x`, `0o` or `0b` radix prefix.
/// Underscores are allowed as digit separators.
pub fn parse_offset(text: &str) -> Result<usize, RangeError> {
    let invalid = || RangeError::InvalidOffset(text.to_string());
    let clean: String = text.trim().chars().filter(|&c| c != '_').collect();
    let lower = clean.to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() {
        return Err(invalid());
    }
    usize::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// End of a slice: an absolute position, or a length from the slice start or
/// the end of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceEnd {
    /// `N`: absolute position.
    Absolute(usize),
    /// `+N`: `N` bytes from the start.
    FromStart(usize),
    /// `-N`: `N` bytes before the end of the data.
    FromEnd(usize),
}

impl SliceEnd {
    /// Byte range selected by `start` and this end over data of `size` bytes.
    /// The range is clipped to the data and is empty when the end falls
    /// before the start.
    pub fn resolve(&self, start: usize, size: usize) -> Range<usize> {
        let end = match *self {
            SliceEnd::Absolute(end) => end,
            SliceEnd::FromStart(len) => start.saturating_add(len),
            SliceEnd::FromEnd(len) => size.saturating_sub(len),
        };

        let start = start.min(size);
        start..end.clamp(start, size)
    }
}

impl FromStr for SliceEnd {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('+') {
            Ok(SliceEnd::FromStart(parse_offset(rest)?))
        } else if let Some(rest) = s.strip_prefix('-') {
            Ok(SliceEnd::FromEnd(parse_offset(rest)?))
        } else {
            Ok(SliceEnd::Absolute(parse_offset(s)?))
        }
    }
}

impl fmt::Display for SliceEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceEnd::Absolute(n) => write!(f, "{:#x}", n),
            SliceEnd::FromStart(n) => write!(f, "+{:#x}", n),
            SliceEnd::FromEnd(n) => write!(f, "-{:#x}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_radixes() {
        assert_eq!(parse_offset("16"), Ok(16));
        assert_eq!(parse_offset("0x10"), Ok(16));
        assert_eq!(parse_offset("0X1f"), Ok(31));
        assert_eq!(parse_offset("0o20"), Ok(16));
        assert_eq!(parse_offset("0b1_0000"), Ok(16));
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        assert!(parse_offset("").is_err());
        assert!(parse_offset("0x").is_err());
        assert!(parse_offset("12g").is_err());
        assert!(parse_offset("-1").is_err());
    }

    #[test]
    fn test_slice_end_forms() {
        assert_eq!("0x20".parse::<SliceEnd>(), Ok(SliceEnd::Absolute(0x20)));
        assert_eq!("+4".parse::<SliceEnd>(), Ok(SliceEnd::FromStart(4)));
        assert_eq!("-0x2".parse::<SliceEnd>(), Ok(SliceEnd::FromEnd(2)));
        assert!("+".parse::<SliceEnd>().is_err());
    }

    #[test]
    fn test_resolve_within_data() {
        assert_eq!(SliceEnd::Absolute(6).resolve(2, 10), 2..6);
        assert_eq!(SliceEnd::FromStart(3).resolve(2, 10), 2..5);
        assert_eq!(SliceEnd::FromEnd(1).resolve(2, 10), 2..9);
    }

    #[test]
    fn test_resolve_clips() {
        assert_eq!(SliceEnd::Absolute(1).resolve(4, 10), 4..4);
        assert_eq!(SliceEnd::FromStart(100).resolve(8, 10), 8..10);
        assert_eq!(SliceEnd::FromEnd(20).resolve(2, 10), 2..2);
        assert_eq!(SliceEnd::FromStart(4).resolve(12, 10), 10..10);
        assert_eq!(SliceEnd::FromStart(usize::MAX).resolve(1, 10), 1..10);
    }
}
