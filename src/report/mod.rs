//! The finished yearly report object.
//!
//! [`YearReport`] is the single value handed to every renderer. Renderers are
//! pure consumers; once built, the report is never mutated.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analytics::{compute_derived, evaluate_insights};
use crate::error::{Result, RewindError};
use crate::model::{AggregatedStats, DerivedStats, Insight};
use crate::util::atomic_write;

/// One year's aggregated usage, ranking values, and earned insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearReport {
    /// Calendar year covered.
    pub year: i32,

    /// Aggregated totals.
    pub stats: AggregatedStats,

    /// Ranking and streak values.
    pub derived: DerivedStats,

    /// Earned achievements and badges, in rule-table order.
    pub insights: Vec<Insight>,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl YearReport {
    /// Build a report from a finished aggregate.
    ///
    /// `today` anchors the current-streak check and `generated_at` is stamped
    /// into the report; both are passed in so generation stays reproducible.
    #[must_use]
    pub fn build(
        stats: AggregatedStats,
        year: i32,
        today: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let derived = compute_derived(&stats, today);
        let insights = evaluate_insights(&stats, &derived);
        Self {
            year,
            stats,
            derived,
            insights,
            generated_at,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_vec_pretty(self)?;
        atomic_write(path, &content).map_err(|e| match e {
            RewindError::IoError { source, .. } => RewindError::ReportWrite {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), "Report written");
        Ok(())
    }
}
