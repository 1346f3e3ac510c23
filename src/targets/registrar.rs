//! Library target registration.
//!
//! Walks a caller-ordered list of library descriptors, enumerates each
//! target's sources, and forwards one request per target to the build
//! engine. Shared libraries see the full resolved link surface (their own
//! depends plus the configuration's libs and search paths); static archives
//! only carry their declared depends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::resolve::ResolvedConfig;

use super::engine::{BuildEngine, LibraryRequest, Linkage};
use super::sources::source_files;

fn default_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_ext() -> String {
    ".c".to_string()
}

/// One library to build, as declared in a `[[lib]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryTarget {
    /// Library name (artifact basename).
    pub name: String,
    /// Directory to enumerate sources from.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Source extension to enumerate.
    #[serde(default = "default_ext")]
    pub ext: String,
    /// Explicit source list; when present, no enumeration happens.
    #[serde(default)]
    pub source: Option<Vec<PathBuf>>,
    /// Names of libraries this one links against.
    #[serde(default)]
    pub depends: Vec<String>,
    /// Build a shared library instead of a static archive.
    #[serde(default)]
    pub dynamic: bool,
}

impl LibraryTarget {
    /// The sources for this target: the explicit list if given, otherwise
    /// an enumeration of `dir/*ext` filtered for `platform`.
    fn sources(&self, platform: &str) -> Result<Vec<PathBuf>> {
        match &self.source {
            Some(explicit) => Ok(explicit.clone()),
            None => source_files(&self.dir, &self.ext, Some(platform)).with_context(|| {
                format!("failed to enumerate sources for library `{}`", self.name)
            }),
        }
    }
}

/// Register library targets against a build engine.
///
/// The library search path for every target is `lib_path` plus the resolved
/// per-platform output directory. Targets are processed in the given order;
/// no dependency ordering is computed or validated.
pub fn register_libraries(
    engine: &mut dyn BuildEngine,
    targets: &[LibraryTarget],
    config: &ResolvedConfig,
    lib_path: &[String],
) -> Result<()> {
    let mut search_path: Vec<String> = lib_path.to_vec();
    search_path.push(config.local_lib.clone());

    for target in targets {
        let sources = target.sources(&config.platform)?;
        let out = format!("{}/{}", config.local_lib, target.name);

        if target.dynamic {
            let mut libs = target.depends.clone();
            libs.extend(config.link_libs.iter().cloned());
            let mut lib_paths = search_path.clone();
            lib_paths.extend(config.lib_paths.iter().map(|p| p.display().to_string()));
            engine.shared_library(LibraryRequest {
                out,
                linkage: Linkage::Shared,
                sources,
                libs,
                lib_paths,
            })?;
        } else {
            engine.static_library(LibraryRequest {
                out,
                linkage: Linkage::Static,
                sources,
                libs: target.depends.clone(),
                lib_paths: search_path.clone(),
            })?;
        }
    }

    Ok(())
}
