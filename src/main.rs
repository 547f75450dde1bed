use std::io::Write;

use clap::Parser;
use podloop::cli::Cli;
use podloop::commands::CommandRegistry;
use podloop::env::RealEnv;

// Main orchestrator function
fn main() {
    init_logger();

    let cli = Cli::parse();
    let registry = CommandRegistry::builtin();
    let env = RealEnv::new();

    // Every failure path has already been logged at its detection site; the
    // binary edge only owns the exit status.
    if registry.dispatch(&cli.args, &env).is_err() {
        std::process::exit(1);
    }
}

/// `timestamp level: message`, info by default, RUST_LOG overrides.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}: {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();
}
