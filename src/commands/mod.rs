//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod html;
pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use html::{execute_html, validate_html_args};
pub use models::{HtmlArgs, RenderArgs};
pub use render::{execute_render, validate_render_args};
pub use utils::{display_version, open_in_viewer, read_trace_input};
