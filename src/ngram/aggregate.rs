// Tue Oct 13 2026 - Alex

use crate::ngram::NgramTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    pub file_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramSummary {
    pub ngram: String,
    pub total_count: usize,
    pub file_counts: Vec<FileCount>,
}

/// Merges per-file n-gram tables, keeping first-seen order.
#[derive(Debug, Default)]
pub struct NgramAggregator {
    entries: IndexMap<Vec<u8>, NgramSummary>,
}

impl NgramAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file_name: &str, table: &NgramTable) {
        let mut ngrams: Vec<_> = table.iter().collect();
        ngrams.sort_by(|a, b| a.0.cmp(b.0));

        for (ngram, &count) in ngrams {
            let summary = self
                .entries
                .entry(ngram.clone())
                .or_insert_with(|| NgramSummary {
                    ngram: hex::encode(ngram),
                    total_count: 0,
                    file_counts: Vec::new(),
                });

            summary.total_count += count;
            summary.file_counts.push(FileCount {
                file_name: file_name.to_string(),
                count,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, ngram: &[u8]) -> Option<&NgramSummary> {
        self.entries.get(ngram)
    }

    pub fn into_summaries(self) -> Vec<NgramSummary> {
        self.entries.into_values().collect()
    }

    /// Summaries ordered by total count, highest first.
    pub fn into_ranked(self) -> Vec<NgramSummary> {
        let mut summaries = self.into_summaries();
        summaries.sort_by(|a, b| b.total_count.cmp(&a.total_count));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::count_ngrams;

    #[test]
    fn test_merge_two_files() {
        let mut aggregator = NgramAggregator::new();
        aggregator.add("a.bin", &count_ngrams(b"ababa", 2));
        aggregator.add("b.bin", &count_ngrams(b"abxy", 2));

        let ab = aggregator.get(b"ab").unwrap();
        assert_eq!(ab.ngram, "6162");
        assert_eq!(ab.total_count, 3);
        assert_eq!(
            ab.file_counts,
            vec![
                FileCount { file_name: "a.bin".to_string(), count: 2 },
                FileCount { file_name: "b.bin".to_string(), count: 1 },
            ]
        );

        assert_eq!(aggregator.get(b"bx").unwrap().total_count, 1);
        assert_eq!(aggregator.len(), 3);
    }

    #[test]
    fn test_ranked_order() {
        let mut aggregator = NgramAggregator::new();
        aggregator.add("x", &count_ngrams(b"zzzzyy", 1));

        let ranked = aggregator.into_ranked();
        assert_eq!(ranked[0].ngram, "7a");
        assert_eq!(ranked[0].total_count, 4);
        assert_eq!(ranked[1].ngram, "79");
    }

    #[test]
    fn test_empty() {
        let mut aggregator = NgramAggregator::new();
        aggregator.add("empty", &NgramTable::new());
        assert!(aggregator.is_empty());
        assert!(aggregator.into_summaries().is_empty());
    }
}
