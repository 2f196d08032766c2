//! claude-rewind: yearly usage reports from Claude Code session logs.
//!
//! Reads per-session JSONL event logs (or manually recorded session
//! summaries), aggregates them into one yearly statistics report, and renders
//! it to the terminal and/or a static HTML document.

use std::process::ExitCode;

use claude_rewind::cli;

fn main() -> ExitCode {
    // Logging is initialized by cli::run based on --log-level
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(&e) {
                    eprintln!("Caused by: {source}");
                }
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
