//! `ballast plan` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::PlanArgs;
use crate::commands::configure::resolve_for;
use ballast::manifest::{Manifest, MANIFEST_FILE};
use ballast::targets::engine::{Linkage, PlanEngine};
use ballast::targets::registrar::register_libraries;

pub fn execute(args: PlanArgs, color: bool) -> Result<()> {
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
    let manifest = Manifest::load_or_default(&manifest_path)?;

    if manifest.libs.is_empty() {
        anyhow::bail!(
            "no [[lib]] targets in {}\n\
             help: declare at least one [[lib]] table to plan a build",
            manifest_path.display()
        );
    }

    let (config, _toolchain) =
        resolve_for(&manifest, &args.options, args.platform.as_deref(), color)?;

    let mut engine = PlanEngine::new();
    register_libraries(&mut engine, &manifest.libs, &config, &args.lib_paths)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine)?);
        return Ok(());
    }

    println!("platform: {} ({})", config.platform, config.family);
    println!("local lib: {}", config.local_lib);
    for lib in &engine.libraries {
        let kind = match lib.linkage {
            Linkage::Static => "static",
            Linkage::Shared => "shared",
        };
        println!("{} {} ({} sources)", kind, lib.out, lib.sources.len());
        if !lib.libs.is_empty() {
            println!("  libs: {}", lib.libs.join(" "));
        }
        if !lib.lib_paths.is_empty() {
            println!("  lib paths: {}", lib.lib_paths.join(" "));
        }
    }

    Ok(())
}
