//! Report renderers.
//!
//! Both renderers consume a finished [`crate::YearReport`] and nothing else:
//! - [`terminal`]: styled summary printed to stdout
//! - [`html`]: standalone single-file HTML document

pub mod html;
pub mod terminal;

pub use html::render_html;
pub use terminal::print_report;
