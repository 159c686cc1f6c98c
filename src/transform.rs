// Thu Oct 15 2026 - Alex

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whole-buffer byte transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Reverse the byte order of the input.
    Reverse,
}

pub fn transform(mode: TransformMode, data: &[u8]) -> Vec<u8> {
    match mode {
        TransformMode::Reverse => data.iter().rev().copied().collect(),
    }
}
