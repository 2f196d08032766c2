//! Fold session records into one [`AggregatedStats`].
//!
//! The fold is pure addition and set union, so the result is independent of
//! session order up to histogram insertion order (which only affects the
//! meaningless tie-break downstream, never any count).

use std::collections::BTreeSet;

use chrono::Timelike;

use crate::model::{AggregatedStats, SessionStats};
use crate::store::RecordedSession;

/// Incremental fold over session records.
///
/// Set-valued fields are unioned across sessions and collapsed to counts by
/// [`finish`](Self::finish): a path touched in ten sessions counts once.
#[derive(Debug, Default)]
pub struct Aggregator {
    stats: AggregatedStats,
    files_accessed: BTreeSet<String>,
    files_modified: BTreeSet<String>,
    files_created: BTreeSet<String>,
    branches: BTreeSet<String>,
}

impl Aggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one analyzed session.
    pub fn add_session(&mut self, session: &SessionStats) {
        self.stats.total_sessions += 1;
        self.stats.total_messages += session.message_count;
        self.stats.total_user_messages += session.user_messages;
        self.stats.total_assistant_messages += session.assistant_messages;
        self.stats.total_duration_minutes += session.duration_minutes;
        self.stats.total_tool_calls += session.total_tool_calls();
        self.stats.total_thinking_blocks += session.thinking_blocks;

        self.files_accessed
            .extend(session.files_accessed.iter().cloned());
        self.files_modified
            .extend(session.files_modified.iter().cloned());
        self.files_created
            .extend(session.files_created.iter().cloned());
        if let Some(branch) = &session.git_branch {
            self.branches.insert(branch.clone());
        }

        for (tool, count) in &session.tool_usage {
            *self.stats.tool_usage.entry(tool.clone()).or_insert(0) += count;
        }
        // Languages and projects count sessions, not occurrences
        for language in &session.languages {
            *self
                .stats
                .language_stats
                .entry(language.clone())
                .or_insert(0) += 1;
        }
        *self
            .stats
            .project_stats
            .entry(session.project.clone())
            .or_insert(0) += 1;

        // A session lands in the date/hour buckets of its start time; a
        // session with no timestamps contributes to totals only
        if let Some(start) = session.start_time {
            let date = start.date_naive().format("%Y-%m-%d").to_string();
            *self.stats.daily_activity.entry(date).or_insert(0) += 1;
            *self
                .stats
                .hourly_activity
                .entry(start.hour() as u8)
                .or_insert(0) += 1;
        }
    }

    /// Fold in one recorded session summary.
    ///
    /// Recorded file counts are plain sums, not unions: the store carries no
    /// paths to deduplicate on.
    pub fn add_recorded(&mut self, session: &RecordedSession) {
        self.stats.total_sessions += 1;
        self.stats.total_messages += session.message_count;
        self.stats.total_tool_calls += session.tool_calls;
        self.stats.total_files_modified += session.files_modified;
        self.stats.total_files_created += session.files_created;
        self.stats.total_lines_added += session.lines_added;
        self.stats.total_lines_removed += session.lines_removed;

        for language in &session.languages {
            *self
                .stats
                .language_stats
                .entry(language.clone())
                .or_insert(0) += 1;
        }
        *self
            .stats
            .project_stats
            .entry(session.project.clone())
            .or_insert(0) += 1;

        let date = session.timestamp.date_naive().format("%Y-%m-%d").to_string();
        *self.stats.daily_activity.entry(date).or_insert(0) += 1;
        *self
            .stats
            .hourly_activity
            .entry(session.timestamp.hour() as u8)
            .or_insert(0) += 1;
    }

    /// Collapse the unions to counts and return the aggregate.
    #[must_use]
    pub fn finish(mut self) -> AggregatedStats {
        self.stats.total_files_accessed += self.files_accessed.len() as u64;
        self.stats.total_files_modified += self.files_modified.len() as u64;
        self.stats.total_files_created += self.files_created.len() as u64;
        self.stats.unique_branches = self.branches.len() as u64;
        self.stats
    }
}

/// Aggregate analyzed sessions from the log pipeline.
#[must_use]
pub fn aggregate(sessions: &[SessionStats]) -> AggregatedStats {
    let mut agg = Aggregator::new();
    for session in sessions {
        agg.add_session(session);
    }
    agg.finish()
}

/// Aggregate recorded session summaries from the store pipeline.
#[must_use]
pub fn aggregate_recorded(sessions: &[RecordedSession]) -> AggregatedStats {
    let mut agg = Aggregator::new();
    for session in sessions {
        agg.add_recorded(session);
    }
    agg.finish()
}
