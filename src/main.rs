use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use choroplex::cli::{Cli, Commands};
use choroplex::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Attributes(args) => commands::attributes(&cli, args),
        Commands::Ramps => commands::ramps(&cli),
        Commands::Classify(args) => commands::classify(&cli, args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
