//! `ballast.toml` manifests and the global options file.
//!
//! Two configuration locations exist:
//! - Global: `~/.ballast/config.toml` - user-wide option defaults
//! - Project: `ballast.toml` - options plus `[[lib]]` target declarations
//!
//! Project options take precedence over global ones, field by field.
//!
//! ```toml
//! [options]
//! debug = true
//! defines = ["NITF_MODULE_EXPORTS"]
//! include_paths = ["include"]
//!
//! [[lib]]
//! name = "nitf"
//! dir = "src/nitf"
//! depends = ["base"]
//!
//! [[lib]]
//! name = "nitf-shared"
//! dir = "src/nitf"
//! dynamic = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::options::BuildOptions;
use crate::config::profile::OptLevel;
use crate::targets::registrar::LibraryTarget;

/// Default project manifest filename.
pub const MANIFEST_FILE: &str = "ballast.toml";

/// Option values as they appear in a TOML file.
///
/// Every field is optional so that global and project files can be merged
/// field-by-field before the final [`BuildOptions`] is produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsFile {
    pub debug: Option<bool>,
    pub optz: Option<u32>,
    pub warnings: Option<bool>,
    pub prefix: Option<PathBuf>,
    pub defines: Option<Vec<String>>,
    pub include_paths: Option<Vec<PathBuf>>,
    pub lib_paths: Option<Vec<PathBuf>>,
    pub libs: Option<Vec<String>>,
    pub threading: Option<bool>,
    pub verbose: Option<bool>,
    pub enable64: Option<bool>,
}

impl OptionsFile {
    /// Merge another options file into this one (other takes precedence).
    pub fn merge(&mut self, other: OptionsFile) {
        macro_rules! take {
            ($field:ident) => {
                if other.$field.is_some() {
                    self.$field = other.$field;
                }
            };
        }
        take!(debug);
        take!(optz);
        take!(warnings);
        take!(prefix);
        take!(defines);
        take!(include_paths);
        take!(lib_paths);
        take!(libs);
        take!(threading);
        take!(verbose);
        take!(enable64);
    }

    /// Produce typed build options, with unset fields at their defaults.
    pub fn into_options(self) -> BuildOptions {
        BuildOptions {
            debug: self.debug.unwrap_or(false),
            optz: self
                .optz
                .map(|n| OptLevel::from_raw(&n.to_string()))
                .unwrap_or_default(),
            warnings: self.warnings.unwrap_or(false),
            prefix: self.prefix,
            defines: self.defines.unwrap_or_default(),
            include_paths: self.include_paths.unwrap_or_default(),
            lib_paths: self.lib_paths.unwrap_or_default(),
            libs: self.libs.unwrap_or_default(),
            threading: self.threading.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
            enable64: self.enable64.unwrap_or(false),
        }
    }
}

/// A project manifest: options plus library targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Build options.
    pub options: OptionsFile,
    /// Library targets, in build order.
    #[serde(rename = "lib")]
    pub libs: Vec<LibraryTarget>,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Load a manifest, falling back to an empty one if the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Manifest::default())
        }
    }
}

/// The global ballast config directory (`~/.ballast`).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".ballast"))
}

/// The global options file path (`~/.ballast/config.toml`).
pub fn global_options_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load merged options from the global and project locations.
///
/// Precedence (highest to lowest): project `ballast.toml` `[options]`,
/// `~/.ballast/config.toml`, defaults. A malformed global file is warned
/// about and skipped, never fatal.
pub fn load_merged_options(project: &Manifest) -> OptionsFile {
    let mut merged = OptionsFile::default();

    if let Some(global_path) = global_options_path() {
        if global_path.exists() {
            match Manifest::load(&global_path) {
                Ok(global) => merged.merge(global.options),
                Err(e) => {
                    tracing::warn!(
                        "failed to load global config {}: {}",
                        global_path.display(),
                        e
                    );
                }
            }
        }
    }

    merged.merge(project.options.clone());
    merged
}
