//! `ballast configure` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ConfigureArgs;
use ballast::config::options::{BuildOptions, RawOptions};
use ballast::config::platform::detect_platform;
use ballast::config::resolve::{resolve, ResolvedConfig};
use ballast::config::toolchain::ToolchainInfo;
use ballast::manifest::{load_merged_options, Manifest, MANIFEST_FILE};
use ballast::util::diagnostic;

/// Load options (global config, project manifest, command-line overrides)
/// and resolve them for a platform. Shared with `ballast plan`.
pub fn resolve_for(
    manifest: &Manifest,
    cli_options: &[String],
    platform_override: Option<&str>,
    color: bool,
) -> Result<(ResolvedConfig, ToolchainInfo)> {
    let mut options: BuildOptions = load_merged_options(manifest).into_options();
    options.apply_raw(&RawOptions::from_pairs(cli_options));

    let platform = match platform_override {
        Some(p) => p.to_string(),
        None => detect_platform(),
    };
    let toolchain = ToolchainInfo::detect();

    match resolve(&options, &platform, &toolchain) {
        Ok(config) => Ok((config, toolchain)),
        Err(e) => {
            diagnostic::emit(&e.to_diagnostic(), color);
            std::process::exit(1);
        }
    }
}

pub fn execute(args: ConfigureArgs, color: bool) -> Result<()> {
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
    let manifest = Manifest::load_or_default(&manifest_path)?;

    let (config, toolchain) =
        resolve_for(&manifest, &args.options, args.platform.as_deref(), color)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("platform: {} ({})", config.platform, config.family);
    println!(
        "toolchain: {} ({:?})",
        toolchain.cc.display(),
        toolchain.family
    );
    println!("local lib: {}", config.local_lib);
    println!("defines: {}", config.defines.join(" "));
    println!("compiler flags: {}", config.compiler_flags.join(" "));
    println!("link libs: {}", config.link_libs.join(" "));
    if !config.include_paths.is_empty() {
        println!(
            "include paths: {}",
            join_paths(&config.include_paths)
        );
    }
    if !config.lib_paths.is_empty() {
        println!("lib paths: {}", join_paths(&config.lib_paths));
    }

    Ok(())
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
