//! Scan command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use scansion_core::{forms, Pattern, PatternMatcher};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::counter_source::CounterSource;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_candidates, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter, Verse};
use crate::progress::ProgressReporter;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Named verse form (see `list forms`)
    #[arg(long, value_name = "NAME", conflicts_with = "pattern")]
    pub form: Option<String>,

    /// Syllable pattern such as 5-7-5
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// CMU-format pronouncing dictionary
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Do not estimate syllables for words missing from the dictionary
    #[arg(long)]
    pub no_estimate: bool,

    /// Match each non-blank line separately instead of the whole file
    #[arg(long)]
    pub per_line: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one group per line
    Text,
    /// JSON array of matches with their source
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting scan");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let pattern = self.resolve_pattern(&config)?;
        let source = self.counter_source(&config);
        log::info!("Pattern: {pattern}, counter: {}", source.display_name());

        let matcher = PatternMatcher::new(source.build()?, pattern);
        log::debug!("Length bound: {:?}", matcher.length_bound());

        let files = resolve_patterns(&self.input)?;
        let pool = self.build_thread_pool(&config)?;
        let per_line = self.per_line || config.matching.per_line;

        let mut formatter = self.create_formatter(&config)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total = 0;
        for path in &files {
            let content = FileReader::read_text(path)?;
            let source_name = path.display().to_string();
            let candidates = split_candidates(&content, per_line);
            let texts: Vec<&str> = candidates.iter().map(|c| c.text).collect();

            let results = pool.install(|| matcher.match_all(&texts));

            let mut verses = 0;
            for (candidate, partition) in candidates.iter().zip(&results) {
                if let Some(partition) = partition {
                    formatter.format_verse(&Verse {
                        source: &source_name,
                        line: candidate.line,
                        partition,
                    })?;
                    verses += 1;
                }
            }

            log::debug!("{source_name}: {verses} of {} texts scan", candidates.len());
            progress.file_completed(&source_name, verses);
            total += verses;
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Found {total} verses in {} files", files.len());
        Ok(())
    }

    /// Pick the pattern: flags first, then the config file, then haiku
    pub(crate) fn resolve_pattern(&self, config: &CliConfig) -> Result<Pattern> {
        let pattern = self
            .pattern
            .as_ref()
            .or(if self.form.is_none() {
                config.matching.pattern.as_ref()
            } else {
                None
            });
        if let Some(pattern) = pattern {
            return pattern
                .parse::<Pattern>()
                .map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")).into());
        }

        match self.form.as_ref().or(config.matching.form.as_ref()) {
            Some(name) => Ok(forms::find(name)?.pattern.clone()),
            None => Ok(Pattern::haiku()),
        }
    }

    fn counter_source(&self, config: &CliConfig) -> CounterSource {
        CounterSource {
            dictionary: self
                .dictionary
                .clone()
                .or_else(|| config.matching.dictionary.clone()),
            estimate: !self.no_estimate && config.matching.estimate_fallback,
        }
    }

    fn build_thread_pool(&self, config: &CliConfig) -> Result<rayon::ThreadPool> {
        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };
        log::debug!("Using {threads} worker threads");

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker thread pool")
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn create_formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.resolve_format(config)?;
        let pretty = config.output.pretty_json;

        let formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let writer = BufWriter::new(file);
                match format {
                    OutputFormat::Text => Box::new(TextFormatter::new(writer)),
                    OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
                    OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
                }
            }
            None => match format {
                OutputFormat::Text => Box::new(TextFormatter::stdout()),
                OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty)),
                OutputFormat::Markdown => Box::new(MarkdownFormatter::new(io::stdout())),
            },
        };

        Ok(formatter)
    }
}
