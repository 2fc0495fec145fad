//! Corvus - agent, command and skill registration for AI coding hosts
//!
//! Stand-in host command line: runs registration against a plugin root and prints the
//! resulting host configuration, or lists what a plugin root defines.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive, e.g. `corvus=debug`
const LOG_ENV: &str = "CORVUS_LOG";

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let default_level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(default_level)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Register(args) => commands::register::run(cli.root, args),
        Commands::Agents(args) => commands::list::run_agents(cli.root, args),
        Commands::Commands(args) => commands::list::run_commands(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
