//! Command registry and dispatch.
//!
//! Available commands:
//! - **basic**: log a hello-world line and exit
//! - **config**: run the delay loop from the LOOP/DELAY config-map variables
//! - **secret**: run the delay loop from the COUNT/SLEEP secret variables
//!
//! The registry is built once at startup and read-only afterwards. Unknown or
//! missing commands go through the fallback path, which logs the sorted list
//! of valid names and fails the invocation.

pub mod basic;
pub mod config;
pub mod secret;

use std::collections::BTreeMap;

use anyhow::Result;
use log::{error, info};

use crate::env::ActionEnv;
use crate::errors::PodloopError;

pub use basic::Basic;
pub use config::Config;
pub use secret::Secret;

/// What a handler gets to see: the raw argument list (command name at index
/// 0, positional convention) and the environment handle.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub env: &'a dyn ActionEnv,
}

pub trait CommandHandler {
    fn run(&self, ctx: &CommandContext) -> Result<()>;
}

/// Immutable name-to-handler lookup table.
///
/// `BTreeMap` keeps the keys in lexicographic order, which is exactly the
/// order the fallback message lists them in.
pub struct CommandRegistry {
    handlers: BTreeMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// The built-in command set.
    pub fn builtin() -> Self {
        let mut handlers: BTreeMap<&'static str, Box<dyn CommandHandler>> = BTreeMap::new();
        handlers.insert("basic", Box::new(Basic));
        handlers.insert("config", Box::new(Config));
        handlers.insert("secret", Box::new(Secret));
        Self { handlers }
    }

    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    /// Registered command names, lexicographically sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    /// Resolve the first argument to a handler and invoke it with the full
    /// argument list. Empty and unrecognized arguments both take the fallback
    /// path and both fail the invocation (exit 1 at the binary edge).
    pub fn dispatch(&self, args: &[String], env: &dyn ActionEnv) -> Result<()> {
        let Some(name) = args.first() else {
            error!("no command: none given");
            self.log_possible_commands();
            return Err(PodloopError::NoCommand.into());
        };

        match self.get(name) {
            Some(handler) => handler.run(&CommandContext { args, env }),
            None => {
                error!("no command: {name}");
                self.log_possible_commands();
                Err(PodloopError::UnknownCommand { name: name.clone() }.into())
            }
        }
    }

    fn log_possible_commands(&self) {
        info!("possible commands are: {}", self.names().join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TestEnv;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_registry_lists_names_sorted() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.names(), vec!["basic", "config", "secret"]);
        assert_eq!(registry.names().join(", "), "basic, config, secret");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = CommandRegistry::builtin();
        assert!(registry.get("config").is_some());
        assert!(registry.get("CONFIG").is_none(), "names are case-sensitive");
        assert!(registry.get("frobnicate").is_none());
    }

    #[test]
    fn test_dispatch_with_no_arguments_is_no_command() {
        let registry = CommandRegistry::builtin();
        let env = TestEnv::new();

        let err = registry.dispatch(&[], &env).unwrap_err();

        let err = err.downcast::<PodloopError>().unwrap();
        assert_eq!(err, PodloopError::NoCommand);
    }

    #[test]
    fn test_dispatch_with_unknown_command_fails() {
        let registry = CommandRegistry::builtin();
        let env = TestEnv::new();

        let err = registry.dispatch(&args(&["frobnicate"]), &env).unwrap_err();

        let err = err.downcast::<PodloopError>().unwrap();
        assert_eq!(
            err,
            PodloopError::UnknownCommand {
                name: "frobnicate".to_string()
            }
        );
    }

    #[test]
    fn test_dispatch_runs_config_loop() {
        let registry = CommandRegistry::builtin();
        let env = TestEnv::new().with_var("LOOP", "2").with_var("DELAY", "0");

        registry.dispatch(&args(&["config"]), &env).unwrap();

        assert_eq!(env.recorded_sleeps().len(), 2);
    }

    #[test]
    fn test_dispatch_runs_secret_loop() {
        let registry = CommandRegistry::builtin();
        let env = TestEnv::new().with_var("COUNT", "1").with_var("SLEEP", "0");

        registry.dispatch(&args(&["secret"]), &env).unwrap();

        assert_eq!(env.recorded_sleeps().len(), 1);
    }

    #[test]
    fn test_dispatch_propagates_validation_failure() {
        let registry = CommandRegistry::builtin();
        // Secret command must not read the config-map variables.
        let env = TestEnv::new().with_var("LOOP", "2").with_var("DELAY", "0");

        let err = registry.dispatch(&args(&["secret"]), &env).unwrap_err();

        let err = err.downcast::<PodloopError>().unwrap();
        assert_eq!(err, PodloopError::missing_variable("COUNT"));
        assert!(env.recorded_sleeps().is_empty());
    }

    #[test]
    fn test_dispatch_runs_basic() {
        let registry = CommandRegistry::builtin();
        let env = TestEnv::new();

        registry.dispatch(&args(&["basic"]), &env).unwrap();

        assert!(env.recorded_sleeps().is_empty());
    }
}
