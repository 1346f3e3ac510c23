//! Active-compiler identification.
//!
//! Resolution only needs two facts about the toolchain: whether the active C
//! compiler is GCC (the `/gnu` output-directory suffix exists because of GCC
//! name mangling) and, on Windows, whether it is something other than GCC
//! (which selects the MSVC static-runtime flag).

use std::path::{Path, PathBuf};

use serde::Serialize;

/// The compiler family behind the active C compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompilerFamily {
    Gnu,
    Clang,
    AppleClang,
    Msvc,
    /// A vendor compiler (Sun Studio, MIPSpro, ...).
    Vendor,
}

impl CompilerFamily {
    pub fn is_gnu(&self) -> bool {
        matches!(self, CompilerFamily::Gnu)
    }
}

/// The active C compiler and its family.
#[derive(Debug, Clone, Serialize)]
pub struct ToolchainInfo {
    /// Path to the C compiler.
    pub cc: PathBuf,
    /// Detected compiler family.
    pub family: CompilerFamily,
}

impl ToolchainInfo {
    pub fn new(cc: PathBuf, family: CompilerFamily) -> Self {
        ToolchainInfo { cc, family }
    }

    /// Identify the active toolchain.
    ///
    /// Honors the `CC` environment variable first, then searches PATH for
    /// common compiler names. When no compiler is found at all, falls back
    /// to a bare `cc` treated as a vendor compiler; configuration resolution
    /// still works, it just never applies the GNU-specific behavior.
    pub fn detect() -> Self {
        let cc = if let Ok(cc_env) = std::env::var("CC") {
            PathBuf::from(cc_env)
        } else {
            match which::which("cc")
                .or_else(|_| which::which("gcc"))
                .or_else(|_| which::which("clang"))
                .or_else(|_| which::which("cl"))
            {
                Ok(p) => p,
                Err(_) => {
                    tracing::debug!("no C compiler found in PATH, assuming `cc`");
                    return ToolchainInfo::new(PathBuf::from("cc"), CompilerFamily::Vendor);
                }
            }
        };

        let family = detect_compiler_family(&cc);
        tracing::info!("using toolchain: cc={} ({:?})", cc.display(), family);
        ToolchainInfo::new(cc, family)
    }
}

/// Detect the compiler family from the binary name, falling back to
/// `--version` output sniffing.
fn detect_compiler_family(cc: &Path) -> CompilerFamily {
    let name = cc
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();

    if name.contains("clang") {
        return detect_clang_variant(cc);
    } else if name.contains("gcc") || name.contains("g++") {
        return CompilerFamily::Gnu;
    } else if name == "cl" {
        return CompilerFamily::Msvc;
    }

    let output = std::process::Command::new(cc).arg("--version").output();
    if let Ok(output) = output {
        let stdout = String::from_utf8_lossy(&output.stdout).to_lowercase();
        if stdout.contains("clang") {
            return detect_clang_variant(cc);
        } else if stdout.contains("gcc") || stdout.contains("free software foundation") {
            return CompilerFamily::Gnu;
        }
    }

    CompilerFamily::Vendor
}

/// Distinguish Apple Clang from stock Clang.
fn detect_clang_variant(cc: &Path) -> CompilerFamily {
    let output = std::process::Command::new(cc).arg("--version").output();
    if let Ok(output) = output {
        let stdout = String::from_utf8_lossy(&output.stdout).to_lowercase();
        if stdout.contains("apple") {
            return CompilerFamily::AppleClang;
        }
    }
    CompilerFamily::Clang
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_binary_name() {
        assert_eq!(
            detect_compiler_family(Path::new("/usr/bin/x86_64-linux-gnu-gcc")),
            CompilerFamily::Gnu
        );
        assert_eq!(detect_compiler_family(Path::new("cl")), CompilerFamily::Msvc);
    }

    #[test]
    fn test_is_gnu() {
        assert!(CompilerFamily::Gnu.is_gnu());
        assert!(!CompilerFamily::Clang.is_gnu());
        assert!(!CompilerFamily::Msvc.is_gnu());
    }
}
