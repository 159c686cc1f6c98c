// Mon Oct 12 2026 - Alex

use crate::pattern::{NibbleSymbol, PatternError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A nibble pattern such as `"4d5a??00"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexPattern {
    symbols: Vec<NibbleSymbol>,
}

impl HexPattern {
    pub fn new(symbols: Vec<NibbleSymbol>) -> Self {
        Self { symbols }
    }

    /// Strict parse of the `0-9a-f?` form. The whole string is checked before
    /// anything is returned.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let symbols = pattern
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                NibbleSymbol::from_char(symbol)
                    .ok_or(PatternError::InvalidPatternSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { symbols })
    }

    /// Parse of user input: whitespace is dropped and hex digits are lowercased,
    /// so `"4D 5A ?? 00"` and `"4d5a??00"` are the same pattern.
    pub fn normalized(pattern: &str) -> Result<Self, PatternError> {
        let clean: String = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::parse(&clean)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let symbols = bytes
            .iter()
            .flat_map(|&b| [NibbleSymbol::Exact(b >> 4), NibbleSymbol::Exact(b & 0xF)])
            .collect();
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[NibbleSymbol] {
        &self.symbols
    }

    pub fn byte_len(&self) -> usize {
        self.symbols.len().div_ceil(2)
    }

    pub fn wildcard_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_wildcard()).count()
    }

    pub fn significant_count(&self) -> usize {
        self.symbols.len() - self.wildcard_count()
    }

    /// Packed byte values, wildcards as 0. An odd trailing nibble lands in
    /// the high half of the last byte.
    pub fn bits(&self) -> Vec<u8> {
        self.pack(|s| s.to_nibble().unwrap_or(0))
    }

    /// Packed mask, 0xF per exact nibble and 0x0 per wildcard.
    pub fn mask(&self) -> Vec<u8> {
        self.pack(|s| if s.is_wildcard() { 0x0 } else { 0xF })
    }

    fn pack<F: Fn(&NibbleSymbol) -> u8>(&self, nibble: F) -> Vec<u8> {
        self.symbols
            .chunks(2)
            .map(|pair| {
                let high = nibble(&pair[0]);
                let low = pair.get(1).map(&nibble).unwrap_or(0);
                high << 4 | low
            })
            .collect()
    }

    pub fn to_hex_string(&self) -> String {
        self.symbols.iter().map(NibbleSymbol::to_char).collect()
    }
}

impl fmt::Display for HexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl FromStr for HexPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for HexPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
