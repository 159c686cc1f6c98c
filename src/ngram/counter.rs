// Mon Oct 12 2026 - Alex

use std::collections::HashMap;

/// Occurrence count per n-gram.
pub type NgramTable = HashMap<Vec<u8>, usize>;

/// Number of window starts `count_ngrams` examines: `[0, len - length)`.
///
/// The final window that ends exactly at the end of the data is not counted.
/// A length at or past the data size gives zero windows, never a wraparound.
pub fn ngram_window_count(data_len: usize, length: usize) -> usize {
    data_len.saturating_sub(length)
}

/// Counts the `length`-byte windows of `data` starting in `[0, len - length)`.
///
/// `b"aaaa"` with length 1 gives `{b"a": 3}`. A length equal to or longer
/// than the data gives an empty table.
pub fn count_ngrams(data: &[u8], length: usize) -> NgramTable {
    let mut counts = NgramTable::new();

    for start in 0..ngram_window_count(data.len(), length) {
        let ngram = &data[start..start + length];
        match counts.get_mut(ngram) {
            Some(count) => *count += 1,
            None => {
                counts.insert(ngram.to_vec(), 1);
            }
        }
    }

    counts
}

/// N-gram counter with an optional floor on reported counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramCounter {
    length: usize,
    min_count: Option<usize>,
}

impl NgramCounter {
    pub fn new(length: usize) -> Self {
        Self { length, min_count: None }
    }

    /// Keep only n-grams seen strictly more than `min_count` times.
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self, data: &[u8]) -> NgramTable {
        let mut counts = count_ngrams(data, self.length);
        if let Some(floor) = self.min_count {
            counts.retain(|_, &mut count| count > floor);
        }
        counts
    }
}

/// The `k` most frequent n-grams, highest count first, ties in byte order.
pub fn top_ngrams(table: &NgramTable, k: usize) -> Vec<(Vec<u8>, usize)> {
    let mut entries: Vec<_> = table
        .iter()
        .map(|(ngram, &count)| (ngram.clone(), count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}

/// Unique n-grams over total occurrences; low values mean repetitive data.
pub fn ngram_coverage(table: &NgramTable) -> f64 {
    let total: usize = table.values().sum();
    if total == 0 {
        return 0.0;
    }
    table.len() as f64 / total as f64
}
