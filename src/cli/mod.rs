//! CLI command implementations

mod auth;
mod prompt;
pub mod style;

pub use auth::run_auth;
pub use prompt::TerminalPrompter;
