//! Command-line interface.
//!
//! `rewind [YEAR]` generates the yearly report; `rewind record` appends a
//! session summary to the flat store. Flags override config-file defaults,
//! which override built-ins.

use std::path::PathBuf;

use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing::{info, warn};

use crate::config::Config;
use crate::discovery::ClaudeDirectory;
use crate::error::{Result, RewindError};
use crate::export::{print_report, render_html};
use crate::report::YearReport;
use crate::store::{NewSession, SessionStore};
use crate::util::atomic_write;
use crate::{analytics, STORE_DIR_NAME, STORE_FILE_NAME};

/// Default output directory when neither flag nor config specifies one.
const DEFAULT_OUTPUT_DIR: &str = "./rewind-output";

/// Yearly usage reports from Claude Code session logs.
#[derive(Debug, Parser)]
#[command(name = "rewind")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Year to report on (default: current year).
    pub year: Option<i32>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only print the terminal summary, skip the HTML document.
    #[arg(long, conflicts_with = "html_only")]
    pub terminal_only: bool,

    /// Only write the HTML document, skip the terminal summary.
    #[arg(long)]
    pub html_only: bool,

    /// Output directory for the JSON report and HTML document.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Path to Claude directory (default: ~/.claude).
    #[arg(short = 'd', long, global = true, env = "REWIND_CLAUDE_DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Where to read sessions from.
    #[arg(long, value_enum, default_value_t = Source::Auto)]
    pub source: Source,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "REWIND_LOG_LEVEL")]
    pub log_level: LogLevel,
}

/// Session data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Source {
    /// Per-session JSONL event logs under the Claude directory.
    Logs,
    /// The recorded-session store.
    Store,
    /// Prefer live logs, fall back to the store when no logs match.
    #[default]
    Auto,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a session summary in the flat store.
    Record(RecordArgs),
}

/// Arguments for `rewind record`.
#[derive(Debug, clap::Args)]
pub struct RecordArgs {
    /// Project name.
    #[arg(long)]
    pub project: String,

    /// Messages exchanged.
    #[arg(long, default_value_t = 0)]
    pub messages: u64,

    /// Files modified.
    #[arg(long, default_value_t = 0)]
    pub files_modified: u64,

    /// Files created.
    #[arg(long, default_value_t = 0)]
    pub files_created: u64,

    /// Lines added.
    #[arg(long, default_value_t = 0)]
    pub lines_added: u64,

    /// Lines removed.
    #[arg(long, default_value_t = 0)]
    pub lines_removed: u64,

    /// Tool invocations.
    #[arg(long, default_value_t = 0)]
    pub tool_calls: u64,

    /// Language used (repeatable).
    #[arg(long = "language")]
    pub languages: Vec<String>,
}

/// Initialize tracing based on CLI options.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_string()));

    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });
    if config.color == Some(false) {
        console::set_colors_enabled(false);
    }

    let claude_dir = match cli.claude_dir.clone().or_else(|| config.claude_dir.clone()) {
        Some(path) => ClaudeDirectory::from_path(path),
        None => ClaudeDirectory::discover()?,
    };
    let store = SessionStore::new(
        claude_dir
            .root()
            .join(STORE_DIR_NAME)
            .join(STORE_FILE_NAME),
    );

    match &cli.command {
        Some(Commands::Record(args)) => record(&store, args),
        None => generate(&cli, &config, &claude_dir, &store),
    }
}

/// Generate the yearly report.
fn generate(
    cli: &Cli,
    config: &Config,
    claude_dir: &ClaudeDirectory,
    store: &SessionStore,
) -> Result<()> {
    let now = Utc::now();
    let year = cli.year.unwrap_or_else(|| now.year());
    if !(1970..=9999).contains(&year) {
        return Err(RewindError::InvalidArgument {
            name: "year".to_string(),
            reason: format!("{year} is not a plausible calendar year"),
        });
    }

    let stats = load_stats(cli.source, claude_dir, store, year)?;
    if stats.total_sessions == 0 {
        return Err(RewindError::NoSessions { year });
    }

    let report = YearReport::build(stats, year, now.date_naive(), now);

    let output_dir = cli
        .output
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let json_path = output_dir.join(format!("rewind-{year}.json"));
    report.save_json(&json_path)?;

    if !cli.terminal_only {
        let html_path = output_dir.join(format!("rewind-{year}.html"));
        atomic_write(&html_path, render_html(&report).as_bytes()).map_err(|e| match e {
            RewindError::IoError { source, .. } => RewindError::ReportWrite {
                path: html_path.clone(),
                source,
            },
            other => other,
        })?;
        println!("HTML report: {}", style(html_path.display()).cyan());
    }

    if !cli.html_only {
        print_report(&report);
    }
    println!("JSON report: {}", style(json_path.display()).cyan());
    Ok(())
}

/// Load and aggregate sessions from the selected source.
fn load_stats(
    source: Source,
    claude_dir: &ClaudeDirectory,
    store: &SessionStore,
    year: i32,
) -> Result<crate::AggregatedStats> {
    let from_logs = |claude_dir: &ClaudeDirectory| -> Result<crate::AggregatedStats> {
        let sources = claude_dir.read_sessions(Some(year))?;
        info!(sessions = sources.len(), year, "Loaded sessions from logs");
        let sessions: Vec<_> = sources
            .iter()
            .map(|s| analytics::analyze(&s.project, &s.events))
            .collect();
        Ok(analytics::aggregate(&sessions))
    };
    let from_store = |store: &SessionStore| -> Result<crate::AggregatedStats> {
        let recorded = store.load_for_year(year)?;
        info!(sessions = recorded.len(), year, "Loaded sessions from store");
        Ok(analytics::aggregate_recorded(&recorded))
    };

    match source {
        Source::Logs => from_logs(claude_dir),
        Source::Store => from_store(store),
        Source::Auto => {
            let stats = from_logs(claude_dir)?;
            if stats.total_sessions > 0 {
                Ok(stats)
            } else {
                from_store(store)
            }
        }
    }
}

/// Append a summary to the recorded-session store.
fn record(store: &SessionStore, args: &RecordArgs) -> Result<()> {
    let session = store.record(NewSession {
        project: args.project.clone(),
        message_count: args.messages,
        files_modified: args.files_modified,
        files_created: args.files_created,
        lines_added: args.lines_added,
        lines_removed: args.lines_removed,
        tool_calls: args.tool_calls,
        languages: args.languages.clone(),
    })?;

    println!(
        "Recorded session {} for {}",
        style(&session.id).cyan(),
        style(&session.project).bold()
    );
    Ok(())
}
