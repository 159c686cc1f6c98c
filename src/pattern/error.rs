// Mon Oct 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern symbol {symbol:?} at position {position}")]
    InvalidPatternSymbol { symbol: char, position: usize },
    #[error("Invalid stride: {0} (must be at least 1)")]
    InvalidStride(i64),
}

impl PatternError {
    pub fn symbol(&self) -> Option<(char, usize)> {
        match self {
            Self::InvalidPatternSymbol { symbol, position } => Some((*symbol, *position)),
            Self::InvalidStride(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PatternError::InvalidPatternSymbol { symbol: 'g', position: 1 };
        assert_eq!(err.to_string(), "Invalid pattern symbol 'g' at position 1");
        assert_eq!(err.symbol(), Some(('g', 1)));

        let err = PatternError::InvalidStride(0);
        assert_eq!(err.to_string(), "Invalid stride: 0 (must be at least 1)");
        assert_eq!(err.symbol(), None);
    }
}
