use anyhow::Result;
use log::info;

use super::{CommandContext, CommandHandler};
use crate::runner::run_action;

/// Delay loop driven by config-map variables.
///
/// LOOP is the iteration count, DELAY the per-iteration pause in seconds.
pub struct Config;

impl CommandHandler for Config {
    fn run(&self, ctx: &CommandContext) -> Result<()> {
        info!("loading LOOP and DELAY from config map");
        run_action(ctx.env, "LOOP", "DELAY")?;
        info!("command finished");
        Ok(())
    }
}
