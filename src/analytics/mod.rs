//! Statistics pipeline for claude-rewind.
//!
//! - [`session`]: reduce one event sequence to a [`crate::SessionStats`]
//! - [`aggregate`]: fold all sessions into one [`crate::AggregatedStats`]
//! - [`derived`]: extreme-selection and streak values over the aggregate
//! - [`insights`]: the fixed achievement/badge rule table

pub mod aggregate;
pub mod derived;
pub mod insights;
pub mod session;

pub use aggregate::{aggregate, aggregate_recorded, Aggregator};
pub use derived::compute_derived;
pub use insights::evaluate_insights;
pub use session::analyze;
