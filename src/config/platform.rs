//! Host platform detection and family classification.

use std::path::Path;

use serde::Serialize;

use crate::util::diagnostic::UnsupportedPlatformError;
use crate::util::process::ProcessBuilder;

use super::profile::{self, PlatformProfile};

/// Candidate locations for the `config.guess` script, tried in order.
const GUESS_LOCATIONS: &[&str] = &["./build/config.guess", "./config.guess", "../build/config.guess"];

/// The raw host platform identifier, without running any external script.
///
/// Windows reports `win32`; other hosts report the OS name, which is only a
/// last-resort identifier (`config.guess` normally supplies a full triple).
pub fn host_platform() -> String {
    if cfg!(target_os = "windows") {
        "win32".to_string()
    } else {
        std::env::consts::OS.to_string()
    }
}

/// Detect the platform identifier for the current host.
///
/// On Windows this is always the raw host identifier. Elsewhere the first
/// existing `config.guess` script is made executable and run; its trimmed
/// first output line becomes the identifier. Detection is best effort and
/// never fatal: any failure falls back to the raw host identifier.
pub fn detect_platform() -> String {
    let platform = host_platform();
    if cfg!(target_os = "windows") {
        return platform;
    }

    for loc in GUESS_LOCATIONS {
        let path = Path::new(loc);
        if !path.exists() {
            continue;
        }
        match run_guess_script(path) {
            Ok(guessed) if !guessed.is_empty() => return guessed,
            Ok(_) => {
                tracing::debug!("{} produced no output, using `{}`", loc, platform);
            }
            Err(e) => {
                tracing::debug!("{} failed ({}), using `{}`", loc, e, platform);
            }
        }
        break;
    }

    platform
}

/// Run one `config.guess` candidate and return its trimmed first line.
fn run_guess_script(path: &Path) -> anyhow::Result<String> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        std::fs::set_permissions(path, perms)?;
    }

    let output = ProcessBuilder::new(path).exec_and_check()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or("").trim().to_string())
}

/// One of the five platform families known to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Win32,
    Linux,
    Apple,
    Sgi,
    Solaris,
}

impl PlatformFamily {
    /// Classify a platform identifier into its family.
    ///
    /// Patterns are checked in a fixed precedence order, so an identifier
    /// that could match two patterns resolves to the earlier family:
    /// win32, linux, apple, sgi, solaris. An identifier matching none of
    /// them is the one fatal condition in configuration resolution.
    pub fn classify(platform: &str) -> Result<Self, UnsupportedPlatformError> {
        if platform.contains("win32") {
            Ok(PlatformFamily::Win32)
        } else if platform.starts_with("i686-pc") {
            Ok(PlatformFamily::Linux)
        } else if platform.contains("apple") {
            Ok(PlatformFamily::Apple)
        } else if platform.starts_with("mips-sgi-") {
            Ok(PlatformFamily::Sgi)
        } else if platform.starts_with("sparc-sun-") {
            Ok(PlatformFamily::Solaris)
        } else {
            Err(UnsupportedPlatformError {
                platform: platform.to_string(),
            })
        }
    }

    /// The flag profile for this family.
    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            PlatformFamily::Win32 => &profile::WIN32,
            PlatformFamily::Linux => &profile::LINUX,
            PlatformFamily::Apple => &profile::APPLE,
            PlatformFamily::Sgi => &profile::SGI,
            PlatformFamily::Solaris => &profile::SOLARIS,
        }
    }

    /// The family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Win32 => "win32",
            PlatformFamily::Linux => "linux",
            PlatformFamily::Apple => "apple",
            PlatformFamily::Sgi => "sgi",
            PlatformFamily::Solaris => "solaris",
        }
    }
}

impl std::fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
