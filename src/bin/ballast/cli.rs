//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Ballast - build-configuration resolver for native C/C++ library trees
#[derive(Parser)]
#[command(name = "ballast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detected platform and its family
    Platform(PlatformArgs),

    /// Resolve build options into compiler/linker flags
    Configure(ConfigureArgs),

    /// List the source files for a directory, platform-filtered
    Sources(SourcesArgs),

    /// Show the library build plan for the project manifest
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PlatformArgs {
    /// Skip config.guess and report the raw host identifier
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// Platform identifier to resolve for (default: detected)
    #[arg(long)]
    pub platform: Option<String>,

    /// Option override as key=value (debug=1, defines="FOO BAR", ...)
    #[arg(short = 'o', long = "option")]
    pub options: Vec<String>,

    /// Project manifest path (default: ballast.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Emit the resolved configuration as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SourcesArgs {
    /// Directory to enumerate
    pub dir: PathBuf,

    /// Source extension to match
    #[arg(long, default_value = ".c")]
    pub ext: String,

    /// Platform identifier for the filename filter (default: detected)
    #[arg(long)]
    pub platform: Option<String>,

    /// Disable the platform filename filter
    #[arg(long)]
    pub unfiltered: bool,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Platform identifier to resolve for (default: detected)
    #[arg(long)]
    pub platform: Option<String>,

    /// Option override as key=value
    #[arg(short = 'o', long = "option")]
    pub options: Vec<String>,

    /// Project manifest path (default: ballast.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Extra library search path, prepended to the resolved one
    #[arg(long = "lib-path")]
    pub lib_paths: Vec<String>,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
