//! Session analysis: one pass over an ordered event sequence.
//!
//! [`analyze`] never fails: empty input yields a zeroed record, and an event
//! missing an expected field only skips the step that needed it.

use crate::model::event::{tool_names, ContentItem};
use crate::model::{language_for_path, RawEvent, SessionStats};

/// Reduce one session's events into a [`SessionStats`] record.
///
/// The events must be in source order; timestamps of the first and last
/// event define the session window.
#[must_use]
pub fn analyze(project: &str, events: &[RawEvent]) -> SessionStats {
    let mut stats = SessionStats::empty(project);

    stats.start_time = events.iter().find_map(|e| e.timestamp);
    stats.end_time = events.iter().rev().find_map(|e| e.timestamp);
    if let (Some(start), Some(end)) = (stats.start_time, stats.end_time) {
        // Floor to whole minutes, clamped: a single-event session is 0
        stats.duration_minutes = (end - start).num_minutes().max(0) as u64;
    }

    for event in events {
        if stats.session_id.is_none() {
            stats.session_id = event.session_id.clone();
        }
        if stats.git_branch.is_none() {
            stats.git_branch = event.git_branch.clone();
        }

        if event.is_external_user_message() {
            stats.user_messages += 1;
            stats.message_count += 1;
        } else if event.kind == crate::model::EventKind::Assistant {
            stats.assistant_messages += 1;
            stats.message_count += 1;
        }

        for item in event.content_items() {
            match item {
                ContentItem::ToolUse(tool) => {
                    if tool.name.is_empty() {
                        continue;
                    }
                    stats.tool_calls.push(tool.name.clone());
                    *stats.tool_usage.entry(tool.name.clone()).or_insert(0) += 1;

                    if let Some(path) = &tool.input.file_path {
                        stats.files_accessed.insert(path.clone());
                        if let Some(language) = language_for_path(path) {
                            stats.languages.insert(language.to_string());
                        }
                        if tool_names::MUTATING.contains(&tool.name.as_str()) {
                            stats.files_modified.insert(path.clone());
                        }
                    }

                    if tool.name == tool_names::BASH {
                        if let Some(command) = &tool.input.command {
                            stats.commands.push(command.clone());
                        }
                    }
                }
                ContentItem::Thinking(_) => {
                    stats.thinking_blocks += 1;
                }
                ContentItem::Other => {}
            }
        }

        // File-creation results are tracked independently of the content walk
        if let Some(path) = event.created_file_path() {
            stats.files_created.insert(path.to_string());
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(json: &str) -> RawEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zeroed_stats() {
        let stats = analyze("demo", &[]);
        assert_eq!(stats, SessionStats::empty("demo"));
    }

    #[test]
    fn test_message_counting() {
        let events = vec![
            event(r#"{"type":"user","userType":"external","timestamp":"2025-04-01T09:00:00Z","sessionId":"s1","message":{"role":"user","content":"hi"}}"#),
            event(r#"{"type":"assistant","timestamp":"2025-04-01T09:02:00Z","message":{"role":"assistant","content":[]}}"#),
            // Tool-result user events are not external and do not count
            event(r#"{"type":"user","timestamp":"2025-04-01T09:03:00Z","message":{"role":"user","content":[]}}"#),
            // Non-message event types never count
            event(r#"{"type":"system","timestamp":"2025-04-01T09:04:30Z"}"#),
        ];

        let stats = analyze("demo", &events);
        assert_eq!(stats.user_messages, 1);
        assert_eq!(stats.assistant_messages, 1);
        assert_eq!(stats.message_count, 2);
        assert_eq!(stats.session_id.as_deref(), Some("s1"));
        // 09:00:00 .. 09:04:30 floors to 4 minutes
        assert_eq!(stats.duration_minutes, 4);
    }

    #[test]
    fn test_single_event_session_has_zero_duration() {
        let events = vec![event(
            r#"{"type":"user","userType":"external","timestamp":"2025-04-01T09:00:00Z","message":{"role":"user","content":"hi"}}"#,
        )];
        let stats = analyze("demo", &events);
        assert_eq!(stats.duration_minutes, 0);
    }

    #[test]
    fn test_tool_walk() {
        let events = vec![event(
            r#"{"type":"assistant","timestamp":"2025-04-01T09:00:00Z","message":{"role":"assistant","content":[
                {"type":"tool_use","name":"Read","input":{"file_path":"/app/src/lib.rs"}},
                {"type":"tool_use","name":"Edit","input":{"file_path":"/app/src/lib.rs"}},
                {"type":"tool_use","name":"Edit","input":{"file_path":"/app/setup.py"}},
                {"type":"tool_use","name":"Bash","input":{"command":"cargo check"}},
                {"type":"thinking","thinking":"..."},
                {"type":"text","text":"done"}
            ]}}"#,
        )];

        let stats = analyze("demo", &events);
        assert_eq!(stats.tool_usage.get("Edit"), Some(&2));
        assert_eq!(stats.tool_usage.get("Read"), Some(&1));
        assert_eq!(stats.tool_calls.len(), 4);
        assert_eq!(stats.commands, vec!["cargo check".to_string()]);
        assert_eq!(stats.thinking_blocks, 1);

        // Dedup: lib.rs accessed via two tools counts once
        assert_eq!(stats.files_accessed.len(), 2);
        // Only the Edit targets are modified; Read alone never is
        assert!(stats.files_modified.contains("/app/src/lib.rs"));
        assert!(stats.files_modified.contains("/app/setup.py"));

        let langs: Vec<_> = stats.languages.iter().cloned().collect();
        assert_eq!(langs, vec!["Python".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_modified_not_forced_into_accessed() {
        // An edit seen without a separate access still lands only where the
        // raw events put it; the two sets stay independently derived.
        let events = vec![event(
            r#"{"type":"assistant","timestamp":"2025-04-01T09:00:00Z","message":{"role":"assistant","content":[
                {"type":"tool_use","name":"Write","input":{"file_path":"/app/new.rs"}}
            ]}}"#,
        )];
        let stats = analyze("demo", &events);
        assert!(stats.files_modified.contains("/app/new.rs"));
        assert!(stats.files_accessed.contains("/app/new.rs"));
    }

    #[test]
    fn test_file_creation_result() {
        let events = vec![
            event(r#"{"type":"user","timestamp":"2025-04-01T09:00:00Z","toolUseResult":{"type":"create","filePath":"/app/created.rs"}}"#),
        ];
        let stats = analyze("demo", &events);
        assert!(stats.files_created.contains("/app/created.rs"));
        // Independent of the content walk
        assert!(stats.files_accessed.is_empty());
    }

    #[test]
    fn test_corrupt_event_skips_only_that_step() {
        let events = vec![
            // tool_use without a name: ignored, analysis continues
            event(r#"{"type":"assistant","timestamp":"2025-04-01T09:00:00Z","message":{"role":"assistant","content":[
                {"type":"tool_use","input":{"file_path":"/app/a.rs"}},
                {"type":"tool_use","name":"Read","input":{"file_path":"/app/b.rs"}}
            ]}}"#),
            // No timestamp: still counted as a message
            event(r#"{"type":"assistant","message":{"role":"assistant","content":[]}}"#),
        ];

        let stats = analyze("demo", &events);
        assert_eq!(stats.tool_calls, vec!["Read".to_string()]);
        assert_eq!(stats.assistant_messages, 2);
    }

    #[test]
    fn test_first_branch_and_session_id_win() {
        let events = vec![
            event(r#"{"type":"user","userType":"external","timestamp":"2025-04-01T09:00:00Z","sessionId":"s1","gitBranch":"main","message":{"role":"user","content":"a"}}"#),
            event(r#"{"type":"assistant","timestamp":"2025-04-01T09:01:00Z","sessionId":"s1","gitBranch":"feature","message":{"role":"assistant","content":[]}}"#),
        ];
        let stats = analyze("demo", &events);
        assert_eq!(stats.git_branch.as_deref(), Some("main"));
    }
}
