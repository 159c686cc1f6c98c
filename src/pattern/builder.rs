// Tue Oct 13 2026 - Alex

use crate::memory::NibbleView;
use crate::pattern::{HexPattern, NibbleSymbol};

pub struct PatternBuilder {
    symbols: Vec<NibbleSymbol>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self { symbols: Vec::new() }
    }

    pub fn nibble(mut self, nibble: u8) -> Self {
        self.symbols.push(NibbleSymbol::from(nibble));
        self
    }

    pub fn byte(self, byte: u8) -> Self {
        self.nibble(byte >> 4).nibble(byte & 0xF)
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self = self.byte(b);
        }
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.symbols.push(NibbleSymbol::Any);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        self.symbols
            .extend(std::iter::repeat(NibbleSymbol::Any).take(count));
        self
    }

    pub fn build(self) -> HexPattern {
        HexPattern::new(self.symbols)
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pattern shared by every buffer, nibble by nibble, over the length of the
/// shortest one. Positions where the buffers disagree become wildcards.
pub fn find_common_pattern<B: AsRef<[u8]>>(buffers: &[B]) -> HexPattern {
    let views: Vec<NibbleView<'_>> = buffers
        .iter()
        .map(|b| NibbleView::new(b.as_ref()))
        .collect();

    let Some(length) = views.iter().map(NibbleView::len).min() else {
        return HexPattern::default();
    };

    let mut builder = PatternBuilder::new();
    for position in 0..length {
        let first = views[0].nibble_at(position);
        if views.iter().all(|v| v.nibble_at(position) == first) {
            builder = builder.nibble(first);
        } else {
            builder = builder.wildcard();
        }
    }

    builder.build()
}
