// Mon Oct 12 2026 - Alex

/// One position of a nibble pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NibbleSymbol {
    Any,
    Exact(u8),
}

impl NibbleSymbol {
    pub const WILDCARD: char = '?';

    pub fn matches(&self, nibble: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(n) => *n == nibble,
        }
    }

    /// Accepts `0-9`, `a-f` and `?`. Uppercase digits are not accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Exact(c as u8 - b'0')),
            'a'..='f' => Some(Self::Exact(c as u8 - b'a' + 0xa)),
            Self::WILDCARD => Some(Self::Any),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Any => Self::WILDCARD,
            Self::Exact(n) => char::from_digit(*n as u32, 16).unwrap_or(Self::WILDCARD),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn to_nibble(&self) -> Option<u8> {
        match self {
            Self::Any => None,
            Self::Exact(n) => Some(*n),
        }
    }
}

impl From<u8> for NibbleSymbol {
    fn from(nibble: u8) -> Self {
        Self::Exact(nibble & 0xF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_digits() {
        assert_eq!(NibbleSymbol::from_char('0'), Some(NibbleSymbol::Exact(0)));
        assert_eq!(NibbleSymbol::from_char('9'), Some(NibbleSymbol::Exact(9)));
        assert_eq!(NibbleSymbol::from_char('a'), Some(NibbleSymbol::Exact(0xa)));
        assert_eq!(NibbleSymbol::from_char('f'), Some(NibbleSymbol::Exact(0xf)));
        assert_eq!(NibbleSymbol::from_char('?'), Some(NibbleSymbol::Any));
    }

    #[test]
    fn test_from_char_rejects() {
        for c in ['A', 'F', 'g', ' ', 'x', '*', '\0'] {
            assert_eq!(NibbleSymbol::from_char(c), None, "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_matches() {
        assert!(NibbleSymbol::Any.matches(0x0));
        assert!(NibbleSymbol::Any.matches(0xF));
        assert!(NibbleSymbol::Exact(0xC).matches(0xC));
        assert!(!NibbleSymbol::Exact(0xC).matches(0xD));
    }

    #[test]
    fn test_to_char() {
        for c in "0123456789abcdef?".chars() {
            assert_eq!(NibbleSymbol::from_char(c).unwrap().to_char(), c);
        }
    }
}
