use clap::Parser;

/// Container command-dispatch demo with environment-driven delay loops.
///
/// The first argument names a command (`basic`, `config`, `secret`); anything
/// else, or no argument at all, is routed to the fallback handler. Commands
/// are resolved by the registry in `commands`, not by clap subcommands, so the
/// fallback can log the valid command list instead of clap rejecting the
/// invocation outright.
#[derive(Parser, Debug)]
#[command(name = "podloop")]
#[command(about = "Container command-dispatch demo with environment-driven delay loops")]
#[command(version)]
pub struct Cli {
    /// Command name followed by its arguments
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}
