//! claude-rewind: yearly usage reports from Claude Code session logs.
//!
//! This crate reads per-session Claude Code JSONL event logs (or a flat store
//! of manually recorded session summaries), reduces each session to a
//! statistics record, folds all sessions into one aggregated object, derives
//! ranking/streak values from the aggregate, evaluates achievement rules, and
//! hands the finished report to the terminal and HTML renderers.
//!
//! # Pipeline
//!
//! ```text
//! discovery -> parser -> analytics::session -> analytics::aggregate
//!           -> analytics::derived -> analytics::insights -> report -> export
//! ```
//!
//! Data flows strictly one way. Renderers are pure consumers of a finished
//! [`report::YearReport`]; they cannot mutate or re-query the core.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use claude_rewind::analytics::{aggregate, session};
//! use claude_rewind::discovery::ClaudeDirectory;
//!
//! fn main() -> claude_rewind::Result<()> {
//!     let dir = ClaudeDirectory::discover()?;
//!     let sources = dir.read_sessions(Some(2025))?;
//!
//!     let stats: Vec<_> = sources
//!         .iter()
//!         .map(|s| session::analyze(&s.project, &s.events))
//!         .collect();
//!
//!     let totals = aggregate::aggregate(&stats);
//!     println!("{} sessions", totals.total_sessions);
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
pub mod store;
pub mod util;

// Re-export commonly used types at the crate root
pub use error::{Result, RewindError};
pub use model::{AggregatedStats, DerivedStats, Insight, RawEvent, SessionStats};
pub use report::YearReport;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Default Claude Code data directory name.
pub const CLAUDE_DIR_NAME: &str = ".claude";

/// Projects subdirectory name.
pub const PROJECTS_DIR_NAME: &str = "projects";

/// Session log file suffix.
pub const SESSION_FILE_SUFFIX: &str = ".jsonl";

/// Recorded-session store subdirectory (inside the Claude data directory).
pub const STORE_DIR_NAME: &str = "rewind";

/// Recorded-session store file name.
pub const STORE_FILE_NAME: &str = "sessions.json";
