//! The environment action runner: validate two environment-sourced integers,
//! then run the observable delay loop.

use std::time::Duration;

use log::{error, info};

use crate::env::ActionEnv;
use crate::errors::PodloopError;

/// Resolve `name` from the environment as a non-negative base-10 integer.
///
/// The value must be composed entirely of ASCII decimal digits: no sign, no
/// whitespace, no decimal point. A digits-only value too large for `u64` is
/// rejected as malformed. Failures are logged here and reported through the
/// `Result`; nothing panics.
pub fn resolve_int_env(env: &dyn ActionEnv, name: &str) -> Result<u64, PodloopError> {
    let Some(value) = env.var(name) else {
        error!("env var {name} not set");
        return Err(PodloopError::missing_variable(name));
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        error!("env var {name} is not a digit");
        return Err(PodloopError::malformed_variable(name));
    }

    value.parse::<u64>().map_err(|_| {
        // Digits-only but overflows u64.
        error!("env var {name} is not a digit");
        PodloopError::malformed_variable(name)
    })
}

/// Resolve both variables, then loop.
///
/// Both variables are resolved before any failure is acted on, so a run with
/// two bad variables logs both error lines. On any failure the loop never
/// starts: the critical line is emitted and the first error is returned for
/// the caller to turn into exit status 1. On success the loop runs exactly
/// `loop` iterations, logging the 1-based index and sleeping `delay` seconds
/// each time. A zero loop count is a normal, silent completion.
pub fn run_action(
    env: &dyn ActionEnv,
    loop_var: &str,
    delay_var: &str,
) -> Result<(), PodloopError> {
    let loop_count = resolve_int_env(env, loop_var);
    let delay_secs = resolve_int_env(env, delay_var);

    match (loop_count, delay_secs) {
        (Ok(count), Ok(delay)) => {
            for i in 1..=count {
                info!("loop {i} of {count}, sleep delay is: {delay} second");
                env.sleep(Duration::from_secs(delay));
            }
            Ok(())
        }
        (Err(err), _) | (_, Err(err)) => {
            error!("exited early due to errors");
            Err(err)
        }
    }
}
