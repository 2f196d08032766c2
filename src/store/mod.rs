//! Recorded-session store: the flat-file pipeline.
//!
//! Instead of reconstructing sessions from event logs, a user can record
//! session summaries by hand. The store is a single JSON array file; append
//! is read-full-array, push, write-full-array behind an atomic write. Not
//! designed for high write volume or concurrent writers.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, RewindError};
use crate::util::atomic_write;

/// A manually recorded session summary.
///
/// Unlike [`crate::SessionStats`], the file fields here are counts, not path
/// sets: the recording user never enumerates paths, so dedup across sessions
/// is not possible for this pipeline and counts pass through the fold as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSession {
    /// Identifier assigned at write time.
    pub id: String,

    /// Timestamp assigned at write time.
    pub timestamp: DateTime<Utc>,

    /// Project name.
    pub project: String,

    /// Total messages in the session.
    #[serde(default)]
    pub message_count: u64,

    /// Files modified.
    #[serde(default)]
    pub files_modified: u64,

    /// Files created.
    #[serde(default)]
    pub files_created: u64,

    /// Lines added.
    #[serde(default)]
    pub lines_added: u64,

    /// Lines removed.
    #[serde(default)]
    pub lines_removed: u64,

    /// Tool invocations.
    #[serde(default)]
    pub tool_calls: u64,

    /// Languages used.
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Fields of a session summary before the store assigns id and timestamp.
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    /// Project name.
    pub project: String,
    /// Total messages in the session.
    pub message_count: u64,
    /// Files modified.
    pub files_modified: u64,
    /// Files created.
    pub files_created: u64,
    /// Lines added.
    pub lines_added: u64,
    /// Lines removed.
    pub lines_removed: u64,
    /// Tool invocations.
    pub tool_calls: u64,
    /// Languages used.
    pub languages: Vec<String>,
}

/// Flat-file store of recorded sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the store file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all recorded sessions. A missing file yields an empty list.
    pub fn load(&self) -> Result<Vec<RecordedSession>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            RewindError::io(format!("Failed to read store: {}", self.path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| RewindError::SerializationError {
            context: format!("Failed to parse store: {}", self.path.display()),
            source: e,
        })
    }

    /// Load recorded sessions whose timestamp falls in the given year.
    pub fn load_for_year(&self, year: i32) -> Result<Vec<RecordedSession>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|s| s.timestamp.year() == year)
            .collect())
    }

    /// Append one session summary, assigning its id and timestamp.
    ///
    /// Returns the stored record. A write failure aborts only this save; the
    /// existing store file is left unchanged by the atomic write.
    pub fn record(&self, new: NewSession) -> Result<RecordedSession> {
        let mut sessions = self.load()?;

        let session = RecordedSession {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            project: new.project,
            message_count: new.message_count,
            files_modified: new.files_modified,
            files_created: new.files_created,
            lines_added: new.lines_added,
            lines_removed: new.lines_removed,
            tool_calls: new.tool_calls,
            languages: new.languages,
        };
        sessions.push(session.clone());

        let content = serde_json::to_vec_pretty(&sessions)?;
        atomic_write(&self.path, &content).map_err(|e| match e {
            RewindError::IoError { source, .. } => RewindError::ReportWrite {
                path: self.path.clone(),
                source,
            },
            other => other,
        })?;

        debug!(id = %session.id, total = sessions.len(), "Recorded session");
        Ok(session)
    }
}
