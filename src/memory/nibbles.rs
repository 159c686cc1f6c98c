// Mon Oct 12 2026 - Alex

/// Read-only view of a byte buffer addressed in nibbles.
///
/// Scan position `p` maps to byte `p / 2`; even positions are the high
/// nibble, odd positions the low nibble.
#[derive(Debug, Clone, Copy)]
pub struct NibbleView<'a> {
    bytes: &'a [u8],
}

impl<'a> NibbleView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn get(&self, position: usize) -> Option<u8> {
        let byte = *self.bytes.get(position / 2)?;
        Some(split_nibble(byte, position))
    }

    /// Nibble at `position`; panics when `position >= self.len()`.
    #[inline]
    pub(crate) fn nibble_at(&self, position: usize) -> u8 {
        split_nibble(self.bytes[position / 2], position)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        self.bytes
            .iter()
            .flat_map(|&b| [(b >> 4) & 0xF, b & 0xF])
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl<'a> From<&'a [u8]> for NibbleView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

#[inline]
fn split_nibble(byte: u8, position: usize) -> u8 {
    if position % 2 == 0 {
        (byte >> 4) & 0xF
    } else {
        byte & 0xF
    }
}
