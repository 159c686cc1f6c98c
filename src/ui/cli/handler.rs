// Wed Oct 14 2026 - Alex

use super::args::{
    Args, ByteFreqArgs, Command, FindPatternArgs, NgramArgs, SearchArgs, SliceArgs, TransformArgs,
};
use crate::analysis::FileFrequencies;
use crate::config::Config;
use crate::memory::InputFile;
use crate::ngram::{NgramAggregator, NgramCounter, NgramSummary};
use crate::output::{CommonPattern, JsonSerializer, OutputFormatter, SliceResult};
use crate::pattern::{find_common_pattern, HexDump};
use crate::search::{sort_reports, SearchQuery, SearchReport};
use crate::transform::transform;
use crate::ui::progress::ProgressManager;
use crate::utils::logging::{init_logger, level_from_str, scoped_timer};
use anyhow::{bail, Context};
use indexmap::IndexSet;
use log::LevelFilter;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

const STDIN_NAME: &str = "<stdin>";

/// Splits a whitespace separated file list.
pub fn read_file_list<R: Read>(mut reader: R) -> io::Result<Vec<PathBuf>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.split_whitespace().map(PathBuf::from).collect())
}

pub struct CommandHandler {
    config: Config,
    json: bool,
    stdin_file_list: bool,
}

impl CommandHandler {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            json: false,
            stdin_file_list: false,
        }
    }

    /// Also take input paths from a file list piped on stdin.
    pub fn with_stdin_file_list(mut self, enabled: bool) -> Self {
        self.stdin_file_list = enabled;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the handler from parsed arguments: logging, config file, then
    /// global flag overrides.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let level = if args.quiet {
            LevelFilter::Warn
        } else {
            level_from_str(&args.log_level)
        };
        init_logger(level);

        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(threads) = args.threads {
            config.max_threads = threads;
        }
        if args.no_color {
            config.color = false;
        }
        if args.quiet || args.json {
            config.show_progress = false;
        }
        config.validate()?;

        if !config.color {
            colored::control::set_override(false);
        }

        log::debug!("Effective config: {:?}", config);

        Ok(Self {
            config,
            json: args.json,
            stdin_file_list: !io::stdin().is_terminal(),
        })
    }

    pub fn execute(&self, command: Command) -> anyhow::Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_threads)
            .build()
            .context("Failed to build worker pool")?;

        pool.install(|| match command {
            Command::Ngram(args) => self.handle_ngram(args),
            Command::Search(args) => self.handle_search(args),
            Command::FindPattern(args) => self.handle_find_pattern(args),
            Command::ByteFreq(args) => self.handle_byte_freq(args),
            Command::Slice(args) => self.handle_slice(args),
            Command::Transform(args) => self.handle_transform(args),
        })
    }

    fn handle_ngram(&self, args: NgramArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let _timer = scoped_timer("ngram");

        let length = args.length.unwrap_or(self.config.ngram_length);
        let min_count = args.min_count.unwrap_or(self.config.ngram_min_count);
        let counter = NgramCounter::new(length).with_min_count(min_count);
        let inputs = self.resolve_inputs(args.inputs)?;
        log::info!("Counting {}-byte n-grams in {} file(s)", length, inputs.len());

        let tables = self.map_inputs(&inputs, "Counting n-grams", |input| {
            Ok(counter.count(input.as_slice()))
        })?;

        let mut aggregator = NgramAggregator::new();
        for (name, table) in &tables {
            log::debug!("{}: {} n-gram(s) above threshold", name, table.len());
            aggregator.add(name, table);
        }

        let summaries: Vec<NgramSummary> = match args.top {
            Some(k) => {
                let ranked = aggregator.into_ranked();
                ranked.into_iter().take(k).collect()
            }
            None => aggregator.into_summaries(),
        };

        self.emit(&summaries, |f| f.format_ngrams(&summaries))
    }

    fn handle_search(&self, args: SearchArgs) -> anyhow::Result<()> {
        let reports = self.search(args)?;

        let matched = reports.iter().filter(|r| r.matches).count();
        log::info!("{} of {} file(s) matched", matched, reports.len());

        self.emit(&reports, |f| f.format_search(&reports))
    }

    /// Runs a search and returns one report per input, sorted by file name.
    /// Positions are byte offsets for every query format.
    pub fn search(&self, args: SearchArgs) -> anyhow::Result<Vec<SearchReport>> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let _timer = scoped_timer("search");

        let query = SearchQuery::parse(args.format, &args.data)
            .with_context(|| format!("Invalid search data {:?}", args.data))?;
        let min_count = args.min_count.unwrap_or(self.config.min_match_count);
        let inputs = self.resolve_inputs(args.inputs)?;

        let results = self.map_inputs(&inputs, "Searching", |input| {
            Ok(query.find_all(input.as_slice()))
        })?;

        let mut reports: Vec<SearchReport> = results
            .into_iter()
            .map(|(name, positions)| SearchReport::new(&name, positions, min_count))
            .collect();
        sort_reports(&mut reports);
        Ok(reports)
    }

    fn handle_find_pattern(&self, args: FindPatternArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let _timer = scoped_timer("find-pattern");

        let inputs = self
            .resolve_inputs(args.inputs)?
            .iter()
            .map(|path| {
                InputFile::open(path).with_context(|| format!("Failed to open {}", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let slices = inputs
            .iter()
            .map(|input| input.slice(args.start_offset, args.length))
            .collect::<Result<Vec<_>, _>>()?;

        let pattern = find_common_pattern(&slices);
        log::info!(
            "Common pattern over {} file(s): {} nibble(s), {} wildcard(s)",
            inputs.len(),
            pattern.len(),
            pattern.wildcard_count()
        );

        let result = CommonPattern {
            files: inputs.iter().map(InputFile::name).collect(),
            pattern,
        };

        let width = args.width.unwrap_or(self.config.output_width);
        let color = self.config.color && io::stdout().is_terminal();
        self.emit(&result, |_| {
            if color {
                HexDump::new().with_width(width).render(&result.pattern)
            } else {
                result.pattern.to_string()
            }
        })
    }

    fn handle_byte_freq(&self, args: ByteFreqArgs) -> anyhow::Result<()> {
        let _timer = scoped_timer("byte-freq");

        let files: Vec<FileFrequencies> = if args.inputs.is_empty() {
            log::debug!("No input files, reading data from stdin");
            let mut data = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
            vec![FileFrequencies::new(STDIN_NAME, &data)]
        } else {
            self.map_inputs(&args.inputs, "Counting bytes", |input| {
                Ok(FileFrequencies::new(&input.name(), input.as_slice()))
            })?
            .into_iter()
            .map(|(_, freqs)| freqs)
            .collect()
        };

        self.emit(&files, |f| f.format_frequencies(&files))
    }

    fn handle_slice(&self, args: SliceArgs) -> anyhow::Result<()> {
        let raw = args.raw;
        let slices = self.slice(args)?;

        if raw && !self.json {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for slice in &slices {
                out.write_all(&slice.data)?;
            }
            out.flush()?;
            return Ok(());
        }

        self.emit(&slices, |f| f.format_slices(&slices))
    }

    /// Slices every input, sorted by file name.
    pub fn slice(&self, args: SliceArgs) -> anyhow::Result<Vec<SliceResult>> {
        let _timer = scoped_timer("slice");
        let inputs = self.resolve_inputs(args.inputs)?;

        let mut slices: Vec<SliceResult> = self
            .map_inputs(&inputs, "Slicing", |input| {
                let range = args.end.resolve(args.start, input.size());
                log::debug!("{}: slicing {:#x}..{:#x}", input.name(), range.start, range.end);
                Ok(SliceResult::new(&input.name(), range.start, &input.as_slice()[range]))
            })?
            .into_iter()
            .map(|(_, slice)| slice)
            .collect();

        slices.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(slices)
    }

    fn handle_transform(&self, args: TransformArgs) -> anyhow::Result<()> {
        let _timer = scoped_timer("transform");

        let output = match &args.input {
            Some(path) => {
                let input = InputFile::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                transform(args.mode, input.as_slice())
            }
            None => {
                let mut data = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut data)
                    .context("Failed to read stdin")?;
                transform(args.mode, &data)
            }
        };
        log::debug!("Transformed {} byte(s) with {:?}", output.len(), args.mode);

        match &args.output {
            Some(path) => fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(&output)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    /// Command line paths plus any file list piped on stdin, without repeats.
    fn resolve_inputs(&self, paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        let mut inputs: IndexSet<PathBuf> = paths.into_iter().collect();

        if self.stdin_file_list {
            let piped = read_file_list(io::stdin().lock())
                .context("Failed to read file list from stdin")?;
            log::debug!("Read {} path(s) from stdin", piped.len());
            inputs.extend(piped);
        }

        if inputs.is_empty() {
            bail!("No input files given");
        }
        Ok(inputs.into_iter().collect())
    }

    /// Maps every input in parallel and runs `f` on it. Results keep the input
    /// order and carry the file name.
    fn map_inputs<T, F>(&self, paths: &[PathBuf], message: &str, f: F) -> anyhow::Result<Vec<(String, T)>>
    where
        T: Send,
        F: Fn(&InputFile) -> anyhow::Result<T> + Sync,
    {
        let progress = ProgressManager::new(self.config.show_progress)
            .create(paths.len() as u64, message);

        let results = paths
            .par_iter()
            .map(|path| {
                let input = InputFile::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                log::debug!("Mapped {} ({} bytes)", input.name(), input.size());

                let value = f(&input)?;
                progress.inc(1);
                Ok((input.name(), value))
            })
            .collect::<anyhow::Result<Vec<_>>>();

        progress.finish_and_clear();
        results
    }

    fn emit<T, R>(&self, value: &T, render: R) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        R: FnOnce(&OutputFormatter) -> String,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.json {
            JsonSerializer::new().write_to(value, &mut out)?;
            return Ok(());
        }

        let formatter = OutputFormatter::new().with_color(self.config.color);
        let text = render(&formatter);
        if !text.is_empty() {
            writeln!(out, "{}", text)?;
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
