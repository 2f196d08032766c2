//! Core data structures for claude-rewind.
//!
//! - [`event`]: raw JSONL event types (one log line each)
//! - [`stats`]: per-session and aggregated statistics records
//! - [`languages`]: the static file-extension to language table

pub mod event;
pub mod languages;
pub mod stats;

pub use event::{ContentItem, EventKind, MessageContent, MessagePayload, RawEvent, ToolInput};
pub use languages::language_for_path;
pub use stats::{
    AggregatedStats, DerivedStats, Insight, InsightKind, ProjectCount, SessionStats,
};
