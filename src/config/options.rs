//! User-facing build options.
//!
//! Options arrive from two places: `ballast.toml` (already typed, see
//! [`crate::manifest`]) and SCons-style `key=value` command-line pairs. The
//! command-line form carries two legacy conventions that are resolved here,
//! once, at the boundary:
//!
//! - toggle options are integer-truthy strings (`debug=1`, `warnings=0`)
//! - for the list-valued options (`defines`, `include_paths`, `lib_paths`,
//!   `libs`) and `prefix`, the literal string `"0"` means "not provided",
//!   not the value zero.
//!
//! Nothing downstream of this module ever re-interprets a raw string.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::profile::OptLevel;

/// Option names recognized on the command line.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "debug",
    "optz",
    "warnings",
    "prefix",
    "defines",
    "include_paths",
    "lib_paths",
    "libs",
    "threading",
    "verbose",
    "enable64",
];

/// Raw `key=value` option pairs, exactly as supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    values: BTreeMap<String, String>,
}

impl RawOptions {
    /// Parse a list of `key=value` pairs.
    ///
    /// A pair without `=` is treated as `key=1`, matching the toggle-style
    /// usage `ballast configure -o debug`. Unrecognized keys are kept (they
    /// are inert) but noted at debug level.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = BTreeMap::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (pair.trim(), "1"),
            };
            if !RECOGNIZED_KEYS.contains(&key) {
                tracing::debug!("ignoring unrecognized option `{}`", key);
            }
            values.insert(key.to_string(), value.to_string());
        }
        RawOptions { values }
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a list-valued option, honoring the `"0"` absence sentinel.
    fn get_present(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some("") | Some("0") | None => None,
            Some(v) => Some(v),
        }
    }

    /// Look up a toggle option as a boolean.
    ///
    /// Integer values are truthy when non-zero; a non-numeric, non-empty
    /// value is truthy. Malformed values are never rejected.
    fn get_toggle(&self, key: &str) -> Option<bool> {
        self.get(key).map(|v| match v.trim().parse::<i64>() {
            Ok(n) => n != 0,
            Err(_) => !v.trim().is_empty(),
        })
    }
}

/// Typed build options, fully resolved from their raw string forms.
///
/// `optz` and `threading` are accepted and stored for compatibility with the
/// historical option surface, but the resolver does not currently consult
/// them: the optimization tier is always [`OptLevel::Medium`] and thread
/// defines/libs always come from the platform profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    /// Build with debug flags; mutually exclusive with optimization.
    pub debug: bool,
    /// Requested optimization tier (currently not consulted).
    pub optz: OptLevel,
    /// Enable the platform's warning flags.
    pub warnings: bool,
    /// Install prefix; passed through, not used in flag resolution.
    pub prefix: Option<PathBuf>,
    /// Extra preprocessor defines, without the `-D` prefix.
    pub defines: Vec<String>,
    /// Extra include search paths.
    pub include_paths: Vec<PathBuf>,
    /// Extra library search paths.
    pub lib_paths: Vec<PathBuf>,
    /// Extra libraries to link.
    pub libs: Vec<String>,
    /// Enable threading (currently not consulted).
    pub threading: bool,
    /// Enable the platform's compiler-verbose flags.
    pub verbose: bool,
    /// Make a 64-bit build.
    pub enable64: bool,
}

impl BuildOptions {
    /// Build typed options from raw pairs alone.
    pub fn from_raw(raw: &RawOptions) -> Self {
        let mut opts = BuildOptions::default();
        opts.apply_raw(raw);
        opts
    }

    /// Overlay raw command-line pairs onto these options.
    ///
    /// Only keys present in `raw` are touched; a list-valued key whose value
    /// is the `"0"` sentinel contributes nothing and leaves the existing
    /// value alone.
    pub fn apply_raw(&mut self, raw: &RawOptions) {
        if let Some(v) = raw.get_toggle("debug") {
            self.debug = v;
        }
        if let Some(v) = raw.get("optz") {
            self.optz = OptLevel::from_raw(v);
        }
        if let Some(v) = raw.get_toggle("warnings") {
            self.warnings = v;
        }
        if let Some(v) = raw.get_present("prefix") {
            self.prefix = Some(PathBuf::from(v));
        }
        if let Some(v) = raw.get_present("defines") {
            self.defines = v.split_whitespace().map(str::to_string).collect();
        }
        if let Some(v) = raw.get_present("include_paths") {
            self.include_paths = split_paths(v);
        }
        if let Some(v) = raw.get_present("lib_paths") {
            self.lib_paths = split_paths(v);
        }
        if let Some(v) = raw.get_present("libs") {
            self.libs = v
                .split_whitespace()
                .map(|s| s.trim().to_string())
                .collect();
        }
        if let Some(v) = raw.get_toggle("threading") {
            self.threading = v;
        }
        if let Some(v) = raw.get_toggle("verbose") {
            self.verbose = v;
        }
        if let Some(v) = raw.get_toggle("enable64") {
            self.enable64 = v;
        }
    }
}

/// Split a semicolon-separated path list, skipping empty segments.
fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(';')
        .filter(|s| !s.trim().is_empty())
        .map(|s| PathBuf::from(s.trim()))
        .collect()
}
