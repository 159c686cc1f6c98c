// Wed Oct 14 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByteFrequency {
    pub value: u8,
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFrequencies {
    pub file_name: String,
    pub frequencies: Vec<ByteFrequency>,
}

impl FileFrequencies {
    pub fn new(file_name: &str, data: &[u8]) -> Self {
        let frequencies = byte_frequencies(data)
            .iter()
            .enumerate()
            .map(|(value, &frequency)| ByteFrequency {
                value: value as u8,
                frequency,
            })
            .collect();

        Self {
            file_name: file_name.to_string(),
            frequencies,
        }
    }

    /// Byte values that occur at all, most frequent first.
    pub fn present(&self) -> Vec<ByteFrequency> {
        let mut present: Vec<_> = self
            .frequencies
            .iter()
            .filter(|f| f.frequency > 0.0)
            .copied()
            .collect();
        present.sort_by(|a, b| b.frequency.total_cmp(&a.frequency).then(a.value.cmp(&b.value)));
        present
    }
}

/// Share of each byte value in `data`. All zeros for empty input.
pub fn byte_frequencies(data: &[u8]) -> [f64; 256] {
    let mut counts = [0usize; 256];
    for &b in data {
        counts[b as usize] += 1;
    }

    let mut frequencies = [0.0; 256];
    if data.is_empty() {
        return frequencies;
    }

    let total = data.len() as f64;
    for (slot, count) in frequencies.iter_mut().zip(counts) {
        *slot = count as f64 / total;
    }
    frequencies
}
