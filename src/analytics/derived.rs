//! Post-fold values: best buckets, project ranking, streaks.

use chrono::NaiveDate;

use crate::model::{AggregatedStats, DerivedStats, ProjectCount};

/// Number of entries in the top-projects ranking.
const TOP_PROJECTS: usize = 5;

/// Compute ranking and streak values from a finished aggregate.
///
/// `today` anchors the current-streak check; passing it in keeps the
/// computation free of ambient time.
#[must_use]
pub fn compute_derived(stats: &AggregatedStats, today: NaiveDate) -> DerivedStats {
    let (longest_streak, current_streak) = compute_streaks(stats, today);

    DerivedStats {
        most_productive_day: max_key(stats.daily_activity.iter()).cloned(),
        most_productive_hour: max_key(stats.hourly_activity.iter()).copied(),
        favorite_language: max_key(stats.language_stats.iter()).cloned(),
        most_used_tool: max_key(stats.tool_usage.iter()).cloned(),
        top_projects: top_projects(stats),
        longest_streak,
        current_streak,
    }
}

/// Key of the entry with the strictly greatest value, or `None` when empty.
///
/// Linear scan; on ties the first key in iteration order wins. The tie-break
/// is deterministic for our map types but carries no meaning.
fn max_key<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Option<&'a K>
where
    K: 'a,
    V: Ord + 'a,
{
    let mut best: Option<(&K, &V)> = None;
    for (key, value) in entries {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key)
}

/// Projects by session count, descending, stable on ties, capped.
fn top_projects(stats: &AggregatedStats) -> Vec<ProjectCount> {
    let mut projects: Vec<ProjectCount> = stats
        .project_stats
        .iter()
        .map(|(name, sessions)| ProjectCount {
            name: name.clone(),
            sessions: *sessions,
        })
        .collect();
    projects.sort_by(|a, b| b.sessions.cmp(&a.sessions));
    projects.truncate(TOP_PROJECTS);
    projects
}

/// Longest and current runs of calendar-consecutive active days.
///
/// The current streak is the trailing run, counted only when the last active
/// day is `today` or yesterday; an older trailing run is zero, however long.
fn compute_streaks(stats: &AggregatedStats, today: NaiveDate) -> (u32, u32) {
    // BTreeMap keys are already sorted and unique; unparseable keys cannot
    // occur from our own aggregation but are skipped rather than trusted
    let days: Vec<NaiveDate> = stats
        .daily_activity
        .keys()
        .filter_map(|key| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok())
        .collect();

    let Some((&first, rest)) = days.split_first() else {
        return (0, 0);
    };

    let mut longest = 1u32;
    let mut run = 1u32;
    let mut prev = first;
    for &day in rest {
        if (day - prev).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
        prev = day;
    }

    let current = if (today - prev).num_days() <= 1 {
        run
    } else {
        0
    };
    (longest, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stats_with_days(days: &[&str]) -> AggregatedStats {
        let mut stats = AggregatedStats::default();
        for day in days {
            stats.daily_activity.insert((*day).to_string(), 1);
        }
        stats
    }

    #[test]
    fn test_empty_aggregate_derives_nothing() {
        let derived = compute_derived(&AggregatedStats::default(), date("2025-06-01"));
        assert_eq!(derived, DerivedStats::default());
    }

    #[test]
    fn test_best_buckets() {
        let mut stats = AggregatedStats::default();
        stats.tool_usage.insert("Read".to_string(), 10);
        stats.tool_usage.insert("Edit".to_string(), 25);
        stats.language_stats.insert("Rust".to_string(), 8);
        stats.language_stats.insert("Python".to_string(), 3);
        stats.daily_activity.insert("2025-02-01".to_string(), 2);
        stats.daily_activity.insert("2025-02-03".to_string(), 5);
        stats.hourly_activity.insert(9, 4);
        stats.hourly_activity.insert(23, 1);

        let derived = compute_derived(&stats, date("2025-06-01"));
        assert_eq!(derived.most_used_tool.as_deref(), Some("Edit"));
        assert_eq!(derived.favorite_language.as_deref(), Some("Rust"));
        assert_eq!(derived.most_productive_day.as_deref(), Some("2025-02-03"));
        assert_eq!(derived.most_productive_hour, Some(9));
    }

    #[test]
    fn test_tie_goes_to_first_in_iteration_order() {
        let mut stats = AggregatedStats::default();
        stats.tool_usage.insert("Bash".to_string(), 7);
        stats.tool_usage.insert("Edit".to_string(), 7);

        let derived = compute_derived(&stats, date("2025-06-01"));
        assert_eq!(derived.most_used_tool.as_deref(), Some("Bash"));
    }

    #[test]
    fn test_top_projects_ranking() {
        let mut stats = AggregatedStats::default();
        for (name, count) in [("a", 2), ("b", 9), ("c", 9), ("d", 1), ("e", 5), ("f", 4)] {
            stats.project_stats.insert(name.to_string(), count);
        }

        let derived = compute_derived(&stats, date("2025-06-01"));
        let names: Vec<_> = derived.top_projects.iter().map(|p| p.name.as_str()).collect();
        // Stable sort keeps b before c on the tie; capped at five entries
        assert_eq!(names, vec!["b", "c", "e", "f", "a"]);
    }

    #[test]
    fn test_streaks() {
        let stats = stats_with_days(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-10"]);
        let derived = compute_derived(&stats, date("2024-01-11"));
        assert_eq!(derived.longest_streak, 3);
        // The trailing single day was yesterday, so it still counts
        assert_eq!(derived.current_streak, 1);
    }

    #[test]
    fn test_stale_trailing_run_is_not_current() {
        let stats = stats_with_days(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let derived = compute_derived(&stats, date("2024-03-01"));
        assert_eq!(derived.longest_streak, 3);
        assert_eq!(derived.current_streak, 0);
    }

    #[test]
    fn test_active_today_counts_whole_trailing_run() {
        let stats = stats_with_days(&["2024-01-08", "2024-01-09", "2024-01-10"]);
        let derived = compute_derived(&stats, date("2024-01-10"));
        assert_eq!(derived.longest_streak, 3);
        assert_eq!(derived.current_streak, 3);
    }

    #[test]
    fn test_single_day() {
        let stats = stats_with_days(&["2024-05-05"]);
        let derived = compute_derived(&stats, date("2024-05-05"));
        assert_eq!(derived.longest_streak, 1);
        assert_eq!(derived.current_streak, 1);
    }
}
