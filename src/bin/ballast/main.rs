//! Ballast CLI - build-configuration resolver for native C/C++ library trees

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("ballast=debug")
    } else {
        EnvFilter::new("ballast=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Platform(args) => commands::platform::execute(args),
        Commands::Configure(args) => commands::configure::execute(args, color),
        Commands::Sources(args) => commands::sources::execute(args),
        Commands::Plan(args) => commands::plan::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
