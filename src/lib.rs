// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod env;
pub mod errors;
pub mod runner;

// Re-export commonly used types
pub use crate::commands::{CommandContext, CommandHandler, CommandRegistry};
pub use crate::env::{ActionEnv, RealEnv, TestEnv};
pub use crate::errors::PodloopError;
pub use crate::runner::{resolve_int_env, run_action};
