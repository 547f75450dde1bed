use anyhow::Result;
use log::info;

use super::{CommandContext, CommandHandler};
use crate::runner::run_action;

/// Delay loop driven by secret-sourced variables.
///
/// Identical to `config` apart from the variable names (COUNT and SLEEP);
/// config maps and secrets only differ in how the orchestrator mounts them.
pub struct Secret;

impl CommandHandler for Secret {
    fn run(&self, ctx: &CommandContext) -> Result<()> {
        info!("loading COUNT and SLEEP from secret");
        run_action(ctx.env, "COUNT", "SLEEP")?;
        info!("command finished");
        Ok(())
    }
}
