//! CLI command handlers, one per file.

mod completions;
mod config_path;
mod fetch;
mod render;

pub use completions::run_completions;
pub use config_path::run_config_path;
pub use fetch::run_fetch;
pub use render::run_render;
