//! JSONL parsing for Claude Code session logs.
//!
//! Parses newline-delimited event records with graceful error recovery:
//! in lenient mode (the default) a malformed line is skipped with a warning
//! and the surrounding valid lines still contribute to the session. Strict
//! mode fails on the first bad line and exists for validation tooling.
//!
//! # Example
//!
//! ```rust,no_run
//! use claude_rewind::parser::EventParser;
//!
//! let mut parser = EventParser::new();
//! let events = parser.parse_file("session.jsonl")?;
//! println!("parsed {} events, skipped {}", events.len(), parser.stats().lines_skipped);
//! # Ok::<(), claude_rewind::RewindError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, RewindError};
use crate::model::RawEvent;

/// JSONL parser for per-session event logs.
#[derive(Debug)]
pub struct EventParser {
    /// Whether to skip malformed lines instead of failing.
    lenient: bool,
    /// Statistics about the most recent parse.
    stats: ParseStats,
}

/// Statistics about one parsing operation.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Total lines processed.
    pub lines_processed: usize,
    /// Successfully parsed events.
    pub events_parsed: usize,
    /// Malformed, skipped lines.
    pub lines_skipped: usize,
    /// Empty lines.
    pub empty_lines: usize,
}

impl EventParser {
    /// Create a new parser in lenient mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lenient: true,
            stats: ParseStats::default(),
        }
    }

    /// Set lenient mode (skip malformed lines instead of failing).
    #[must_use]
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Get statistics for the most recent parse.
    #[must_use]
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Parse a JSONL file from a path.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<RawEvent>> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| RewindError::io(format!("Failed to open {}", path.display()), e))?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse JSONL from a reader.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> Result<Vec<RawEvent>> {
        let mut events = Vec::new();
        self.stats = ParseStats::default();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line_num = line_num + 1; // 1-indexed
            self.stats.lines_processed += 1;

            let line = match line_result {
                Ok(l) => l,
                Err(e) => {
                    if self.lenient {
                        self.stats.lines_skipped += 1;
                        warn!(line = line_num, error = %e, "I/O error reading line, skipping");
                        continue;
                    }
                    return Err(RewindError::io(format!("Failed to read line {line_num}"), e));
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.stats.empty_lines += 1;
                continue;
            }

            match serde_json::from_str::<RawEvent>(trimmed) {
                Ok(event) => {
                    self.stats.events_parsed += 1;
                    events.push(event);
                }
                Err(e) => {
                    if self.lenient {
                        self.stats.lines_skipped += 1;
                        warn!(line = line_num, error = %e, "Malformed log line, skipping");
                        continue;
                    }
                    return Err(RewindError::parse_with_source(line_num, e.to_string(), e));
                }
            }
        }

        debug!(
            events = events.len(),
            lines = self.stats.lines_processed,
            skipped = self.stats.lines_skipped,
            "Parsing complete"
        );
        Ok(events)
    }

    /// Parse JSONL from a string.
    pub fn parse_str(&mut self, content: &str) -> Result<Vec<RawEvent>> {
        self.parse_reader(content.as_bytes())
    }
}

impl Default for EventParser {
    fn default() -> Self {
        Self::new()
    }
}
