//! Per-session and aggregated statistics records.
//!
//! [`SessionStats`] is the reduction of one event sequence; it is created
//! once by the analyzer and immutable afterward. [`AggregatedStats`] is the
//! result of one fold over all sessions in scope; [`DerivedStats`] holds the
//! values that cannot be computed incrementally (extreme-selection and
//! streaks) and is attached after the fold completes.
//!
//! Histograms are [`IndexMap`]s so iteration order is insertion order: the
//! "first key strictly greater than the running maximum wins" selection in
//! the derived-stats calculator is deterministic, though the tie-break it
//! implies carries no meaning.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-session reduction result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Session identifier, from the first event that carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Project name, derived from the source path or declared field.
    pub project: String,

    /// Timestamp of the first event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Timestamp of the last event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Session duration in whole minutes (floor, clamped to >= 0).
    pub duration_minutes: u64,

    /// Total counted messages (user + assistant).
    pub message_count: u64,

    /// Externally originated user messages.
    pub user_messages: u64,

    /// Assistant messages.
    pub assistant_messages: u64,

    /// Tool invocation counts by tool name, in first-seen order.
    pub tool_usage: IndexMap<String, u64>,

    /// Ordered record of every tool invocation.
    pub tool_calls: Vec<String>,

    /// Ordered record of shell commands executed.
    pub commands: Vec<String>,

    /// Paths touched by file-oriented tools (deduplicated).
    pub files_accessed: BTreeSet<String>,

    /// Paths passed to mutating tools (deduplicated).
    ///
    /// Independently derived from `files_accessed`; event ordering is only
    /// partial, so neither set is a subset of the other.
    pub files_modified: BTreeSet<String>,

    /// Paths reported by file-creation tool results (deduplicated).
    pub files_created: BTreeSet<String>,

    /// Languages detected from file extensions (deduplicated).
    pub languages: BTreeSet<String>,

    /// Git branch, from the first event that carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,

    /// Number of thinking blocks.
    pub thinking_blocks: u64,
}

impl SessionStats {
    /// Create an empty record for the given project.
    #[must_use]
    pub fn empty(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Total tool invocations across all tools.
    #[must_use]
    pub fn total_tool_calls(&self) -> u64 {
        self.tool_usage.values().sum()
    }
}

/// Cumulative totals across all sessions in scope.
///
/// Set-valued per-session fields are unioned globally during the fold and
/// collapsed to counts here: a file touched in two sessions counts once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStats {
    /// Number of sessions folded in.
    pub total_sessions: u64,

    /// Total counted messages.
    pub total_messages: u64,

    /// Total externally originated user messages.
    pub total_user_messages: u64,

    /// Total assistant messages.
    pub total_assistant_messages: u64,

    /// Total session duration in minutes.
    pub total_duration_minutes: u64,

    /// Total tool invocations.
    pub total_tool_calls: u64,

    /// Total thinking blocks.
    pub total_thinking_blocks: u64,

    /// Size of the global union of accessed paths.
    pub total_files_accessed: u64,

    /// Size of the global union of modified paths (or the recorded-store sum).
    pub total_files_modified: u64,

    /// Size of the global union of created paths (or the recorded-store sum).
    pub total_files_created: u64,

    /// Lines added, recorded-session store only (zero for the log pipeline).
    pub total_lines_added: u64,

    /// Lines removed, recorded-session store only (zero for the log pipeline).
    pub total_lines_removed: u64,

    /// Size of the global union of git branches.
    pub unique_branches: u64,

    /// Tool invocation counts by tool name.
    pub tool_usage: IndexMap<String, u64>,

    /// Session counts by detected language.
    pub language_stats: IndexMap<String, u64>,

    /// Session counts by project.
    pub project_stats: IndexMap<String, u64>,

    /// Session counts by ISO calendar date (YYYY-MM-DD).
    pub daily_activity: BTreeMap<String, u64>,

    /// Session counts by hour of day (0-23).
    pub hourly_activity: BTreeMap<u8, u64>,
}

/// Values derived from [`AggregatedStats`] after the fold.
///
/// Each best-bucket field is `None` when its source mapping is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    /// ISO date with the most sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_productive_day: Option<String>,

    /// Hour of day (0-23) with the most sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_productive_hour: Option<u8>,

    /// Language with the highest session count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_language: Option<String>,

    /// Tool with the highest invocation count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_used_tool: Option<String>,

    /// Up to five projects by session count, descending, stable on ties.
    pub top_projects: Vec<ProjectCount>,

    /// Longest run of calendar-consecutive active days.
    pub longest_streak: u32,

    /// Length of the trailing run, if the last active day is today or
    /// yesterday relative to the injected "now"; otherwise zero.
    pub current_streak: u32,
}

/// One entry in the top-projects ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCount {
    /// Project name.
    pub name: String,
    /// Session count.
    pub sessions: u64,
}

/// A qualitative badge produced by the insight evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Insight category.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Short title.
    pub title: String,
    /// Human-readable description.
    pub description: String,
}

/// Insight categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Milestone reached through volume of activity.
    Achievement,
    /// Qualitative trait of the year's activity.
    Badge,
}
