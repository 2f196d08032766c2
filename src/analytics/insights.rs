//! Achievement and badge rules.
//!
//! A fixed rule table evaluated over the finished aggregate. Rules are
//! independent and non-exclusive; output order is declaration order, so the
//! report reads the same for the same year of data on every run.

use crate::model::{AggregatedStats, DerivedStats, Insight, InsightKind};

type Rule = fn(&AggregatedStats, &DerivedStats) -> Option<Insight>;

const RULES: &[Rule] = &[
    century_club,
    chatterbox,
    streak_master,
    polyglot,
    code_machine,
    deep_thinker,
    portfolio_builder,
    night_owl,
    early_bird,
];

/// Evaluate every rule, collecting matches in declaration order.
#[must_use]
pub fn evaluate_insights(stats: &AggregatedStats, derived: &DerivedStats) -> Vec<Insight> {
    RULES.iter().filter_map(|rule| rule(stats, derived)).collect()
}

fn achievement(title: &str, description: String) -> Insight {
    Insight {
        kind: InsightKind::Achievement,
        title: title.to_string(),
        description,
    }
}

fn badge(title: &str, description: String) -> Insight {
    Insight {
        kind: InsightKind::Badge,
        title: title.to_string(),
        description,
    }
}

fn century_club(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.total_sessions >= 100).then(|| {
        achievement(
            "Century Club",
            format!("{} sessions this year", stats.total_sessions),
        )
    })
}

fn chatterbox(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.total_messages >= 1000).then(|| {
        achievement(
            "Chatterbox",
            format!("{} messages exchanged", stats.total_messages),
        )
    })
}

fn streak_master(_: &AggregatedStats, derived: &DerivedStats) -> Option<Insight> {
    (derived.longest_streak >= 7).then(|| {
        achievement(
            "Streak Master",
            format!("{} consecutive active days", derived.longest_streak),
        )
    })
}

fn polyglot(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.language_stats.len() >= 5).then(|| {
        badge(
            "Polyglot",
            format!("Worked in {} languages", stats.language_stats.len()),
        )
    })
}

fn code_machine(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.total_files_modified >= 100).then(|| {
        badge(
            "Code Machine",
            format!("{} files modified", stats.total_files_modified),
        )
    })
}

fn deep_thinker(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.total_thinking_blocks >= 100).then(|| {
        badge(
            "Deep Thinker",
            format!("{} thinking blocks", stats.total_thinking_blocks),
        )
    })
}

fn portfolio_builder(stats: &AggregatedStats, _: &DerivedStats) -> Option<Insight> {
    (stats.project_stats.len() >= 10).then(|| {
        badge(
            "Portfolio Builder",
            format!("Active in {} projects", stats.project_stats.len()),
        )
    })
}

fn night_owl(_: &AggregatedStats, derived: &DerivedStats) -> Option<Insight> {
    let hour = derived.most_productive_hour?;
    ((22..=23).contains(&hour) || hour <= 4).then(|| {
        badge(
            "Night Owl",
            format!("Busiest at {hour:02}:00 - the late hours suit you"),
        )
    })
}

fn early_bird(_: &AggregatedStats, derived: &DerivedStats) -> Option<Insight> {
    let hour = derived.most_productive_hour?;
    (5..=8).contains(&hour).then(|| {
        badge(
            "Early Bird",
            format!("Busiest at {hour:02}:00 - up before the day starts"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quiet_year_earns_nothing() {
        let insights = evaluate_insights(&AggregatedStats::default(), &DerivedStats::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut stats = AggregatedStats::default();
        stats.total_sessions = 100;
        stats.total_messages = 999;

        let insights = evaluate_insights(&stats, &DerivedStats::default());
        let titles: Vec<_> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Century Club"]);
    }

    #[test]
    fn test_output_follows_declaration_order() {
        let mut stats = AggregatedStats::default();
        stats.total_sessions = 150;
        stats.total_messages = 2000;
        stats.total_thinking_blocks = 500;
        let mut derived = DerivedStats::default();
        derived.longest_streak = 14;

        let insights = evaluate_insights(&stats, &derived);
        let titles: Vec<_> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Century Club", "Chatterbox", "Streak Master", "Deep Thinker"]
        );
    }

    #[test]
    fn test_night_owl_hours() {
        for (hour, expected) in [(23, true), (0, true), (4, true), (5, false), (21, false)] {
            let mut derived = DerivedStats::default();
            derived.most_productive_hour = Some(hour);
            let insights = evaluate_insights(&AggregatedStats::default(), &derived);
            assert_eq!(
                insights.iter().any(|i| i.title == "Night Owl"),
                expected,
                "hour {hour}"
            );
        }
    }

    #[test]
    fn test_owl_and_bird_are_exclusive_by_range() {
        let mut derived = DerivedStats::default();
        derived.most_productive_hour = Some(6);
        let insights = evaluate_insights(&AggregatedStats::default(), &derived);
        assert!(insights.iter().any(|i| i.title == "Early Bird"));
        assert!(!insights.iter().any(|i| i.title == "Night Owl"));
        assert_eq!(insights[0].kind, InsightKind::Badge);
    }
}
