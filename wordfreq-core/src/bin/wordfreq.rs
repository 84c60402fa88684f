//! wordfreq: count words in text files and print them by frequency.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordfreq_core::config::{FileConfig, Settings};
use wordfreq_core::input::Source;
use wordfreq_core::{logging, render, CountWords, Error, OutputFormat, Result, TieBreak};

#[derive(Debug, Parser)]
#[command(name = "wordfreq")]
#[command(about = "Count word occurrences and list them by descending frequency")]
struct Cli {
    /// Input files. Reads stdin when none are given or for `-`.
    files: Vec<PathBuf>,

    /// Show only the N most frequent words.
    #[arg(long, short = 'n', value_name = "N")]
    top: Option<usize>,

    /// Leave out words seen fewer than N times.
    #[arg(long, value_name = "N")]
    min_count: Option<u64>,

    /// Order of words with equal counts.
    #[arg(long, value_enum)]
    tie_break: Option<TieBreak>,

    /// Count tokens that are pure punctuation as the empty word.
    #[arg(long)]
    keep_empty: bool,

    /// Drop pure-punctuation tokens even if the config file keeps them.
    #[arg(long, conflicts_with = "keep_empty")]
    drop_empty: bool,

    /// Output format.
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,

    /// TOML config file; command-line flags take precedence.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print counting statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            top: self.top,
            min_count: self.min_count,
            tie_break: self.tie_break,
            keep_empty: self.keep_empty_override(),
            format: self.format,
        }
    }

    fn keep_empty_override(&self) -> Option<bool> {
        match (self.keep_empty, self.drop_empty) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("wordfreq failed: {}", e);
            eprintln!("wordfreq: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&cli.overrides().over(file_config))?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let texts = Source::from_args(&cli.files)
        .iter()
        .map(Source::read_to_string)
        .collect::<Result<Vec<_>>>()?;

    let pipeline = CountWords::new(settings.options);
    let (series, stats) = pipeline.count_all_with_stats(texts.iter().map(String::as_str));

    if cli.stats {
        eprintln!("{stats}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = render::render(&series, settings.format, &mut out)
        .and_then(|()| out.flush().map_err(Error::from));
    match written {
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed early; output truncated");
            Ok(())
        }
        other => other,
    }
}
