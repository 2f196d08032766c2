//! Standalone HTML report.
//!
//! Generates a single self-contained document: inline CSS, no scripts, no
//! external assets. Every data-derived string is escaped before interpolation.

use crate::model::InsightKind;
use crate::report::YearReport;

/// Render the report as a complete HTML document.
#[must_use]
pub fn render_html(report: &YearReport) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "  <meta name=\"generator\" content=\"claude-rewind {}\">\n",
        crate::VERSION
    ));
    html.push_str(&format!(
        "  <title>Claude Code Rewind {}</title>\n",
        report.year
    ));
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&format!(
        "  <h1>Claude Code Rewind <span class=\"year\">{}</span></h1>\n",
        report.year
    ));

    push_totals(&mut html, report);
    push_highlights(&mut html, report);
    push_projects(&mut html, report);
    push_hourly(&mut html, report);
    push_insights(&mut html, report);

    html.push_str(&format!(
        "  <footer>Generated {}</footer>\n",
        escape_html(&report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_totals(html: &mut String, report: &YearReport) {
    let stats = &report.stats;
    html.push_str("  <section class=\"stats-grid\">\n");
    for (label, value) in [
        ("Sessions", stats.total_sessions.to_string()),
        ("Messages", stats.total_messages.to_string()),
        ("Tool calls", stats.total_tool_calls.to_string()),
        ("Minutes in session", stats.total_duration_minutes.to_string()),
        ("Files modified", stats.total_files_modified.to_string()),
        ("Files created", stats.total_files_created.to_string()),
    ] {
        html.push_str(&format!(
            "    <div class=\"stat\"><div class=\"value\">{}</div><div class=\"label\">{}</div></div>\n",
            escape_html(&value),
            label
        ));
    }
    html.push_str("  </section>\n");
}

fn push_highlights(html: &mut String, report: &YearReport) {
    let derived = &report.derived;
    html.push_str("  <section>\n    <h2>Highlights</h2>\n    <ul class=\"highlights\">\n");
    if let Some(day) = &derived.most_productive_day {
        push_highlight(html, "Busiest day", day);
    }
    if let Some(hour) = derived.most_productive_hour {
        push_highlight(html, "Busiest hour", &format!("{hour:02}:00"));
    }
    if let Some(language) = &derived.favorite_language {
        push_highlight(html, "Favorite language", language);
    }
    if let Some(tool) = &derived.most_used_tool {
        push_highlight(html, "Most used tool", tool);
    }
    push_highlight(html, "Longest streak", &format!("{} days", derived.longest_streak));
    push_highlight(html, "Current streak", &format!("{} days", derived.current_streak));
    html.push_str("    </ul>\n  </section>\n");
}

fn push_highlight(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "      <li><span class=\"label\">{}</span> {}</li>\n",
        label,
        escape_html(value)
    ));
}

fn push_projects(html: &mut String, report: &YearReport) {
    if report.derived.top_projects.is_empty() {
        return;
    }
    html.push_str("  <section>\n    <h2>Top projects</h2>\n    <ol class=\"projects\">\n");
    for project in &report.derived.top_projects {
        html.push_str(&format!(
            "      <li>{} <span class=\"count\">{} sessions</span></li>\n",
            escape_html(&project.name),
            project.sessions
        ));
    }
    html.push_str("    </ol>\n  </section>\n");
}

fn push_hourly(html: &mut String, report: &YearReport) {
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

    html.push_str("  <section>\n    <h2>Activity by hour</h2>\n    <div class=\"hours\">\n");
    for (hour, count) in &report.stats.hourly_activity {
        let percent = (*count as f64 / max as f64 * 100.0).round() as u64;
        html.push_str(&format!(
            "      <div class=\"hour-row\"><span class=\"hour\">{hour:02}:00</span><div class=\"bar\" style=\"width: {percent}%\"></div><span class=\"count\">{count}</span></div>\n",
        ));
    }
    html.push_str("    </div>\n  </section>\n");
}

fn push_insights(html: &mut String, report: &YearReport) {
    if report.insights.is_empty() {
        return;
    }
    html.push_str("  <section>\n    <h2>Insights</h2>\n    <div class=\"insights\">\n");
    for insight in &report.insights {
        let class = match insight.kind {
            InsightKind::Achievement => "achievement",
            InsightKind::Badge => "badge",
        };
        html.push_str(&format!(
            "      <div class=\"insight {}\"><h3>{}</h3><p>{}</p></div>\n",
            class,
            escape_html(&insight.title),
            escape_html(&insight.description)
        ));
    }
    html.push_str("    </div>\n  </section>\n");
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLES: &str = r#"  <style>
    :root {
      --bg: #16161e;
      --panel: #1f1f2b;
      --text: #e6e6f0;
      --muted: #9a9ab0;
      --accent: #d97757;
      --bar: #d97757;
    }
    * { box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: var(--bg);
      color: var(--text);
      margin: 0;
      padding: 40px 20px;
      line-height: 1.6;
    }
    main { max-width: 760px; margin: 0 auto; }
    h1 { font-size: 2em; margin-bottom: 24px; }
    h1 .year { color: var(--accent); }
    h2 { font-size: 1.1em; margin: 32px 0 12px; color: var(--muted); text-transform: uppercase; letter-spacing: 0.05em; }
    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 12px; }
    .stat { background: var(--panel); border-radius: 8px; padding: 16px; }
    .stat .value { font-size: 1.6em; font-weight: 700; }
    .stat .label { font-size: 0.8em; color: var(--muted); }
    .highlights, .projects { padding-left: 0; list-style-position: inside; }
    .highlights li { list-style: none; padding: 4px 0; }
    .highlights .label { color: var(--muted); display: inline-block; min-width: 160px; }
    .projects li { padding: 4px 0; }
    .projects .count { color: var(--muted); font-size: 0.85em; }
    .hours { display: flex; flex-direction: column; gap: 2px; }
    .hour-row { display: flex; align-items: center; gap: 8px; }
    .hour { color: var(--muted); font-size: 0.8em; min-width: 44px; font-variant-numeric: tabular-nums; }
    .bar { background: var(--bar); height: 12px; border-radius: 3px; min-width: 2px; }
    .count { color: var(--muted); font-size: 0.8em; }
    .insights { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 12px; }
    .insight { background: var(--panel); border-radius: 8px; padding: 16px; border-left: 3px solid var(--accent); }
    .insight.badge { border-left-color: #7aa2f7; }
    .insight h3 { margin: 0 0 6px; font-size: 1em; }
    .insight p { margin: 0; color: var(--muted); font-size: 0.9em; }
    footer { margin-top: 40px; color: var(--muted); font-size: 0.8em; }
  </style>
"#;
