use anyhow::Result;
use log::info;

use super::{CommandContext, CommandHandler};

/// Smoke-test command: proves the container image starts and logs.
pub struct Basic;

impl CommandHandler for Basic {
    fn run(&self, _ctx: &CommandContext) -> Result<()> {
        info!("hello world");
        Ok(())
    }
}
