//! Session discovery for Claude Code data.
//!
//! Layout on disk: one directory per project under
//! `~/.claude/projects/<encoded-path>/`, one `.jsonl` file per session inside
//! it. Discovery walks project directories non-recursively (one level) and
//! groups each file's events into a [`SessionSource`].
//!
//! An absent data or projects directory yields an empty result, never an
//! error; a present-but-unreadable file is skipped with a logged warning.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, warn};

use crate::error::{Result, RewindError};
use crate::model::RawEvent;
use crate::parser::EventParser;
use crate::{CLAUDE_DIR_NAME, PROJECTS_DIR_NAME, SESSION_FILE_SUFFIX};

/// Claude Code data directory manager.
#[derive(Debug, Clone)]
pub struct ClaudeDirectory {
    /// Root path to the .claude directory.
    root: PathBuf,
    /// Projects subdirectory.
    projects_dir: PathBuf,
}

impl ClaudeDirectory {
    /// Create from an explicit path.
    ///
    /// The path does not have to exist: a missing directory simply yields
    /// zero sessions later.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let root = path.as_ref().to_path_buf();
        let projects_dir = root.join(PROJECTS_DIR_NAME);
        Self { root, projects_dir }
    }

    /// Auto-discover the Claude Code data directory (`~/.claude`).
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| RewindError::ClaudeDirectoryNotFound {
            expected_path: PathBuf::from("~/.claude"),
        })?;
        Ok(Self::from_path(home.join(CLAUDE_DIR_NAME)))
    }

    /// Get the root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the projects directory path.
    #[must_use]
    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// List all project directories.
    ///
    /// A missing projects directory yields an empty list.
    pub fn projects(&self) -> Result<Vec<Project>> {
        if !self.projects_dir.exists() {
            debug!(path = %self.projects_dir.display(), "Projects directory absent, no sessions");
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();

        for entry in std::fs::read_dir(&self.projects_dir).map_err(|e| {
            RewindError::io(
                format!(
                    "Failed to read projects directory: {}",
                    self.projects_dir.display()
                ),
                e,
            )
        })? {
            let entry = entry.map_err(|e| RewindError::io("Failed to read directory entry", e))?;
            let path = entry.path();
            if path.is_dir() {
                if let Some(project) = Project::from_path(&path) {
                    projects.push(project);
                }
            }
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    /// Read all sessions, optionally filtered by year.
    ///
    /// Each session file becomes one [`SessionSource`] with its events in
    /// source order. A session whose first event's year does not match the
    /// filter is excluded entirely. Unreadable files are skipped with a
    /// warning; malformed lines within a file are handled by the parser.
    pub fn read_sessions(&self, year: Option<i32>) -> Result<Vec<SessionSource>> {
        let mut sources = Vec::new();

        for project in self.projects()? {
            for log_path in project.session_files()? {
                let mut parser = EventParser::new();
                let events = match parser.parse_file(&log_path) {
                    Ok(events) => events,
                    Err(e) => {
                        warn!(path = %log_path.display(), error = %e, "Skipping unreadable session file");
                        continue;
                    }
                };

                if let Some(year) = year {
                    let first_year = events
                        .iter()
                        .find_map(|e| e.timestamp)
                        .map(|ts| ts.year());
                    if first_year != Some(year) {
                        continue;
                    }
                }

                sources.push(SessionSource {
                    project: project.name.clone(),
                    path: log_path,
                    events,
                });
            }
        }

        debug!(sessions = sources.len(), "Session discovery complete");
        Ok(sources)
    }
}

/// A project directory under `~/.claude/projects/`.
#[derive(Debug, Clone)]
pub struct Project {
    /// Path to the project directory.
    path: PathBuf,
    /// Display name (last component of the decoded working directory).
    pub name: String,
}

impl Project {
    /// Create a Project from its directory path.
    ///
    /// Returns `None` for directories whose name cannot be interpreted.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref().to_path_buf();
        let encoded = path.file_name()?.to_str()?.to_string();
        let name = project_display_name(&encoded);
        Some(Self { path, name })
    }

    /// Get the path to the project directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List this project's session log files (one level, fixed suffix).
    pub fn session_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let entries = match std::fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Skipping unreadable project directory");
                return Ok(files);
            }
        };

        for entry in entries {
            let entry = entry.map_err(|e| RewindError::io("Failed to read directory entry", e))?;
            let path = entry.path();
            if path.is_file() && is_session_file(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

/// One session's worth of raw events, grouped and in source order.
#[derive(Debug, Clone)]
pub struct SessionSource {
    /// Project display name, derived from the encoded directory name.
    pub project: String,
    /// Path of the session log file.
    pub path: PathBuf,
    /// Events in source order.
    pub events: Vec<RawEvent>,
}

/// Check whether a path looks like a session log file.
#[must_use]
pub fn is_session_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SESSION_FILE_SUFFIX))
}

/// Derive a display name from an encoded project directory name.
///
/// Claude Code encodes the working directory by replacing `/` with `-`
/// (e.g. `-home-user-my-app`). The encoding is lossy - a hyphen that was
/// always a hyphen is indistinguishable from an encoded slash - so for
/// reporting purposes we only use the last path component.
#[must_use]
pub fn project_display_name(encoded: &str) -> String {
    let trimmed = encoded.trim_start_matches('-');
    trimmed
        .rsplit('-')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}
