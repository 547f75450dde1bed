//! Environment abstraction for podloop commands.
//!
//! Commands and the action runner never touch `std::env` or the system clock
//! directly; they go through [`ActionEnv`]. This keeps I/O at the edges and
//! lets tests substitute a [`TestEnv`] with canned variables and a recording
//! sleeper instead of mutating the real process environment.
//!
//! # Usage
//!
//! ## Production Code
//!
//! ```rust
//! use podloop::env::RealEnv;
//!
//! let env = RealEnv::new();
//! // Pass &env to the dispatcher or runner
//! ```
//!
//! ## Testing
//!
//! ```rust
//! use podloop::env::TestEnv;
//!
//! let env = TestEnv::new().with_var("LOOP", "3");
//! assert_eq!(env.recorded_sleeps().len(), 0);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// I/O capabilities the action runner needs: environment lookup and sleeping.
///
/// Variables are resolved fresh on every call; implementations must not cache.
pub trait ActionEnv {
    /// Look up an environment variable by name.
    ///
    /// Returns `None` both for unset variables and for values that are not
    /// valid Unicode, matching how the original tool treats them.
    fn var(&self, name: &str) -> Option<String>;

    /// Block the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Production environment: reads the real process environment and really
/// sleeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnv;

impl RealEnv {
    pub fn new() -> Self {
        Self
    }
}

impl ActionEnv for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Test environment backed by a `HashMap`. Sleeps are recorded, not performed.
#[derive(Debug, Default)]
pub struct TestEnv {
    vars: HashMap<String, String>,
    sleeps: Mutex<Vec<Duration>>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable (builder style).
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Every duration passed to [`ActionEnv::sleep`], in call order.
    pub fn recorded_sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl ActionEnv for TestEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
