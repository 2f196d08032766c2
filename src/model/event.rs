//! Raw event types for Claude Code JSONL logs.
//!
//! One [`RawEvent`] corresponds to one log line. The shapes here are lenient
//! on purpose: every field beyond the type tag is optional or defaulted so
//! that a single missing field degrades to a skipped step in the analyzer
//! rather than a rejected line. Unknown JSON fields are preserved in a
//! flattened map for forward compatibility.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry from a per-session JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// Event type tag (`user`, `assistant`, or anything else).
    #[serde(rename = "type", default)]
    pub kind: EventKind,

    /// Message payload carrying the content items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessagePayload>,

    /// Tool execution result metadata (string or object; inspected lazily).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_result: Option<Value>,

    /// ISO 8601 UTC timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Conversation session identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Working directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Current git branch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,

    /// Interaction source (e.g. "external" for human-originated input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    /// Unknown fields for forward compatibility.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl RawEvent {
    /// Check whether this is an externally originated user message.
    #[must_use]
    pub fn is_external_user_message(&self) -> bool {
        self.kind == EventKind::User && self.user_type.as_deref() == Some("external")
    }

    /// Content items of this event's message, if any.
    #[must_use]
    pub fn content_items(&self) -> &[ContentItem] {
        match self.message.as_ref().map(|m| &m.content) {
            Some(MessageContent::Items(items)) => items,
            _ => &[],
        }
    }

    /// Path created by this event's tool result, if it is flagged as a
    /// file-creation result (`toolUseResult.type == "create"`).
    #[must_use]
    pub fn created_file_path(&self) -> Option<&str> {
        let result = self.tool_use_result.as_ref()?;
        if result.get("type").and_then(Value::as_str) == Some("create") {
            result.get("filePath").and_then(Value::as_str)
        } else {
            None
        }
    }
}

/// Event type tag. Anything that is not `user` or `assistant` collapses into
/// [`EventKind::Other`] so unknown event types never fail deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Human input and tool results.
    User,
    /// Claude's responses, tool invocations, thinking blocks.
    Assistant,
    /// Any other event type (system, summary, etc.).
    #[default]
    #[serde(other)]
    Other,
}

/// Message payload within an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Message role, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content: a plain string or an ordered array of content items.
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content - either a simple string or an array of content items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple string content (direct human input).
    Text(String),
    /// Ordered array of content items.
    Items(Vec<ContentItem>),
}

impl Default for MessageContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A content item within a message.
///
/// Closed variant type: the analyzer only needs `tool_use` and `thinking`;
/// every other tag lands in the unit [`ContentItem::Other`] variant, which
/// makes "unknown variant, ignore" an exhaustive match arm instead of a
/// string comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Tool invocation request.
    ToolUse(ToolUseItem),

    /// Extended reasoning block.
    Thinking(ThinkingItem),

    /// Any other content item type (text, tool_result, image, ...).
    #[serde(other)]
    Other,
}

/// Tool use content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUseItem {
    /// Tool name (empty when the log line omitted it).
    #[serde(default)]
    pub name: String,

    /// Tool input parameters.
    #[serde(default)]
    pub input: ToolInput,
}

/// Tool input parameters relevant to analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolInput {
    /// Target file path, for file-oriented tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Shell command string, for the shell-execution tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Unknown input fields for forward compatibility.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Thinking content item. Only its presence matters to the analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThinkingItem {
    /// Reasoning text, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,

    /// Unknown fields for forward compatibility.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Known tool names in Claude Code, as they appear in `tool_use` items.
pub mod tool_names {
    /// File reading tool.
    pub const READ: &str = "Read";
    /// File writing tool.
    pub const WRITE: &str = "Write";
    /// File editing tool.
    pub const EDIT: &str = "Edit";
    /// Multi-file editing tool.
    pub const MULTI_EDIT: &str = "MultiEdit";
    /// Notebook editing tool.
    pub const NOTEBOOK_EDIT: &str = "NotebookEdit";
    /// Bash command execution.
    pub const BASH: &str = "Bash";

    /// Tools whose `file_path` input mutates the file.
    pub const MUTATING: &[&str] = &[WRITE, EDIT, MULTI_EDIT, NOTEBOOK_EDIT];
}
