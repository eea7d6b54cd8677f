//! umc-template - UniversalModCore build descriptor resolver
//!
//! Command line driver over the `umc_template` library: resolves a mod
//! descriptor for one Minecraft version and loader, then prints the variables,
//! renders templates or copies the core library jar.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::helpers::GlobalOptions;

/// Log filter: `RUST_LOG` when set, otherwise `info` with `--verbose` and `warn` without
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "info" } else { "warn" })
    })
}

fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GlobalOptions::from_cli(&cli);
    let result = match &cli.command {
        Commands::Vars(args) => commands::vars::run(&options, args),
        Commands::Render(args) => commands::render::run(&options, args),
        Commands::Fetch(args) => commands::fetch::run(&options, args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
