//! Styled terminal summary.
//!
//! Formatting is fixed: same report in, same text out. `console` handles
//! color capability detection, so redirected output degrades to plain text
//! without any flag plumbing here.

use console::style;

use crate::model::{DerivedStats, InsightKind};
use crate::report::YearReport;

/// Width of the activity bars, in cells.
const BAR_WIDTH: usize = 20;

/// Print the report summary to stdout.
pub fn print_report(report: &YearReport) {
    println!();
    println!(
        "  {}",
        style(format!("Claude Code Rewind {}", report.year)).bold().cyan()
    );
    println!("  {}", style("=".repeat(24)).dim());
    println!();

    print_totals(report);
    print_rankings(&report.derived);
    print_hourly(report);
    print_insights(report);
}

fn print_totals(report: &YearReport) {
    let stats = &report.stats;
    println!("  {}", style("Totals").bold());
    print_row("Sessions", &stats.total_sessions.to_string());
    print_row("Messages", &stats.total_messages.to_string());
    print_row("Time in session", &format_duration(stats.total_duration_minutes));
    print_row("Tool calls", &stats.total_tool_calls.to_string());
    print_row("Files modified", &stats.total_files_modified.to_string());
    print_row("Files created", &stats.total_files_created.to_string());
    if stats.total_lines_added > 0 || stats.total_lines_removed > 0 {
        print_row(
            "Lines changed",
            &format!("+{} / -{}", stats.total_lines_added, stats.total_lines_removed),
        );
    }
    println!();
}

fn print_rankings(derived: &DerivedStats) {
    println!("  {}", style("Highlights").bold());
    if let Some(day) = &derived.most_productive_day {
        print_row("Busiest day", day);
    }
    if let Some(hour) = derived.most_productive_hour {
        print_row("Busiest hour", &format!("{hour:02}:00"));
    }
    if let Some(language) = &derived.favorite_language {
        print_row("Favorite language", language);
    }
    if let Some(tool) = &derived.most_used_tool {
        print_row("Most used tool", tool);
    }
    print_row("Longest streak", &format_days(derived.longest_streak));
    print_row("Current streak", &format_days(derived.current_streak));

    if !derived.top_projects.is_empty() {
        println!();
        println!("  {}", style("Top projects").bold());
        for project in &derived.top_projects {
            print_row(&project.name, &format!("{} sessions", project.sessions));
        }
    }
    println!();
}

fn print_hourly(report: &YearReport) {
    if report.stats.hourly_activity.is_empty() {
        return;
    }
    let max = report
        .stats
        .hourly_activity
        .values()
        .copied()
        .max()
        .unwrap_or(1);

    println!("  {}", style("Activity by hour").bold());
    for (hour, count) in &report.stats.hourly_activity {
        println!(
            "  {:>5}  {} {}",
            format!("{hour:02}:00"),
            style(bar(*count, max)).green(),
            style(count).dim()
        );
    }
    println!();
}

fn print_insights(report: &YearReport) {
    if report.insights.is_empty() {
        return;
    }
    println!("  {}", style("Insights").bold());
    for insight in &report.insights {
        let marker = match insight.kind {
            InsightKind::Achievement => style("*").yellow(),
            InsightKind::Badge => style("+").magenta(),
        };
        println!(
            "  {} {} - {}",
            marker,
            style(&insight.title).bold(),
            insight.description
        );
    }
    println!();
}

fn print_row(label: &str, value: &str) {
    println!("  {:<18} {}", style(label).dim(), value);
}

/// Render minutes as "Xh Ym" (or "Ym" under an hour).
fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Proportional bar, at least one cell for any non-zero count.
fn bar(count: u64, max: u64) -> String {
    let cells = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.max(usize::from(count > 0)))
}
