// Wed Oct 14 2026 - Alex

use crate::memory::{parse_offset, SliceEnd};
use crate::pattern::MAX_DUMP_WIDTH;
use crate::search::StringFormat;
use crate::transform::TransformMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reven")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Byte-level tooling for reverse engineering binary files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub json: bool,

    /// JSON config file; flags given on the command line override it.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub threads: Option<usize>,
}

/// File-based commands also read a whitespace separated file list from stdin
/// when stdin is not a terminal.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Finds the n-grams shared across the given files.
    Ngram(NgramArgs),
    /// Searches for text, hex bytes or a nibble pattern within files.
    Search(SearchArgs),
    /// Finds a common pattern for all the given files.
    FindPattern(FindPatternArgs),
    /// Calculates the byte frequencies of stdin or the given files.
    ByteFreq(ByteFreqArgs),
    /// Slices files between a start and an end position.
    Slice(SliceArgs),
    /// Transforms an input to an output (e.g. reverse).
    Transform(TransformArgs),
}

#[derive(Parser, Debug)]
pub struct NgramArgs {
    /// The number of bytes per n-gram.
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Only report n-grams seen more than this many times in a file.
    #[arg(long)]
    pub min_count: Option<usize>,

    /// Only report the K most frequent n-grams.
    #[arg(long)]
    pub top: Option<usize>,

    pub inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// How DATA is interpreted. Results are byte offsets for every format.
    #[arg(short, long, value_enum)]
    pub format: StringFormat,

    /// The data to search for.
    pub data: String,

    pub inputs: Vec<PathBuf>,

    /// Minimum number of occurrences to mark a file as matched.
    #[arg(short, long)]
    pub min_count: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct FindPatternArgs {
    /// Number of bytes to compare from each file; all of it when omitted.
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    #[arg(short, long, default_value = "0")]
    pub start_offset: usize,

    /// Bytes per row of the rendered pattern.
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    pub inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ByteFreqArgs {
    /// Input files; stdin is read as data when none are given.
    pub inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SliceArgs {
    /// Position to start slicing at. Accepts 0x, 0o and 0b prefixes.
    #[arg(value_parser = parse_offset)]
    pub start: usize,

    /// Position to slice until. `+N` is N bytes from the start, `-N` is N
    /// bytes before the end of the file.
    #[arg(allow_hyphen_values = true)]
    pub end: SliceEnd,

    pub inputs: Vec<PathBuf>,

    /// Write the sliced bytes to stdout instead of a table.
    #[arg(short, long)]
    pub raw: bool,
}

#[derive(Parser, Debug)]
pub struct TransformArgs {
    #[arg(value_enum)]
    pub mode: TransformMode,

    /// Input file; stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl NgramArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.length == Some(0) {
            return Err("N-gram length must be at least 1".to_string());
        }
        Ok(())
    }
}

impl SearchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.data.is_empty() {
            return Err("Search data must not be empty".to_string());
        }
        Ok(())
    }
}

impl FindPatternArgs {
    pub fn validate(&self) -> Result<(), String> {
        match self.width {
            Some(0) => Err("Width must be at least 1".to_string()),
            Some(w) if w > MAX_DUMP_WIDTH => {
                Err(format!("Width must be at most {}", MAX_DUMP_WIDTH))
            }
            _ => Ok(()),
        }
    }
}
