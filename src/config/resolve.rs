//! Option-to-flag resolution.
//!
//! This is the single logic-bearing pass of the crate: classify the platform
//! identifier, select its flag profile, apply the debug/verbose/warnings/
//! 64-bit toggles as flag suppressors, and assemble the final ordered flag
//! lists plus the derived output directory.
//!
//! Resolution is pure: the same inputs always produce the same
//! [`ResolvedConfig`], and the value is handed back to the caller rather
//! than merged into any shared build state.

use std::path::PathBuf;

use serde::Serialize;

use crate::util::diagnostic::UnsupportedPlatformError;

use super::options::BuildOptions;
use super::platform::PlatformFamily;
use super::profile::OptLevel;
use super::toolchain::ToolchainInfo;

/// Default directory the per-platform output folder hangs under.
pub const DEFAULT_LIB_DIR: &str = "lib";

/// The normalized build configuration.
///
/// Every list field is always present; a category with no entries is an
/// empty vector, never an omitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// The platform identifier resolution ran against.
    pub platform: String,
    /// The family the identifier classified into.
    pub family: PlatformFamily,
    /// Include search paths (user-supplied only).
    pub include_paths: Vec<PathBuf>,
    /// Preprocessor defines: platform defines, then thread defines.
    pub defines: Vec<String>,
    /// Compiler flags, in resolution order (user defines first).
    pub compiler_flags: Vec<String>,
    /// Link libraries: user libs, platform libs, thread libs.
    pub link_libs: Vec<String>,
    /// Library search paths (user-supplied only).
    pub lib_paths: Vec<PathBuf>,
    /// Derived output directory, e.g. `lib/i686-pc-linux-gnu/gnu`.
    pub local_lib: String,
}

/// Resolve build options against a platform identifier.
///
/// The only failure mode is an identifier that matches none of the five
/// known families; every option value is interpreted totally (malformed
/// tokens pass through as literal flags, never rejected).
pub fn resolve(
    options: &BuildOptions,
    platform: &str,
    toolchain: &ToolchainInfo,
) -> Result<ResolvedConfig, UnsupportedPlatformError> {
    resolve_in(options, platform, toolchain, DEFAULT_LIB_DIR)
}

/// [`resolve`] with an explicit parent directory for the output folder.
pub fn resolve_in(
    options: &BuildOptions,
    platform: &str,
    toolchain: &ToolchainInfo,
    dirname: &str,
) -> Result<ResolvedConfig, UnsupportedPlatformError> {
    let family = PlatformFamily::classify(platform)?;
    let profile = family.profile();

    let mut compiler_flags_base = profile.compiler_flags.to_string();
    if family == PlatformFamily::Win32 && !toolchain.family.is_gnu() {
        // MSVC runtime selection: static runtime, debug variant when
        // debugging. [/MD /MDd /MT /MTd]
        let rtflag = if options.debug { "/MTd" } else { "/MT" };
        compiler_flags_base = format!("{} {}", compiler_flags_base, rtflag);
    }

    // Debug and optimization are mutually exclusive; the other toggles each
    // blank only their own flag string.
    let mut optz_flags = profile.optimization(OptLevel::Medium);
    let mut debug_flags = profile.debug_flags;
    if options.debug {
        optz_flags = "";
    } else {
        debug_flags = "";
    }
    let verbose_flags = if options.verbose {
        profile.verbose_flags
    } else {
        ""
    };
    let warn_flags = if options.warnings {
        profile.warn_flags
    } else {
        ""
    };
    let flags_64 = if options.enable64 { profile.flags_64 } else { "" };

    let mut compiler_flags: Vec<String> =
        options.defines.iter().map(|d| format!("-D{}", d)).collect();
    compiler_flags.extend(tokens(&compiler_flags_base));
    compiler_flags.extend(tokens(optz_flags));
    compiler_flags.extend(tokens(flags_64));
    compiler_flags.extend(tokens(verbose_flags));
    compiler_flags.extend(tokens(debug_flags));
    compiler_flags.extend(tokens(warn_flags));

    let mut defines = tokens(profile.compiler_defines);
    defines.extend(tokens(profile.thread_defines));

    let mut link_libs = options.libs.clone();
    link_libs.extend(tokens(profile.link_libs));
    link_libs.extend(tokens(profile.thread_libs));

    let mut local_lib = format!("{}/{}", dirname, platform);
    if options.enable64 {
        local_lib.push_str("-64");
    }
    // GCC name mangling differs from the vendor compilers, so GCC builds
    // land in their own subdirectory.
    if toolchain.family.is_gnu() {
        local_lib.push_str("/gnu");
    }

    Ok(ResolvedConfig {
        platform: platform.to_string(),
        family,
        include_paths: options.include_paths.clone(),
        defines,
        compiler_flags,
        link_libs,
        lib_paths: options.lib_paths.clone(),
        local_lib,
    })
}

/// Split a space-separated flag string into owned tokens.
fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toolchain::CompilerFamily;

    fn gnu() -> ToolchainInfo {
        ToolchainInfo::new(PathBuf::from("gcc"), CompilerFamily::Gnu)
    }

    fn msvc() -> ToolchainInfo {
        ToolchainInfo::new(PathBuf::from("cl"), CompilerFamily::Msvc)
    }

    fn vendor() -> ToolchainInfo {
        ToolchainInfo::new(PathBuf::from("cc"), CompilerFamily::Vendor)
    }

    #[test]
    fn test_unknown_platform_is_fatal() {
        let err = resolve(&BuildOptions::default(), "arm-unknown-unknown", &gnu()).unwrap_err();
        assert!(err.to_string().contains("arm-unknown-unknown"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let opts = BuildOptions {
            debug: true,
            defines: vec!["FOO".to_string()],
            ..BuildOptions::default()
        };
        let a = resolve(&opts, "i686-pc-linux-gnu", &gnu()).unwrap();
        let b = resolve(&opts, "i686-pc-linux-gnu", &gnu()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_suppresses_optimization() {
        let debug = resolve(
            &BuildOptions {
                debug: true,
                ..BuildOptions::default()
            },
            "i686-pc-linux-gnu",
            &vendor(),
        )
        .unwrap();
        assert!(debug.compiler_flags.contains(&"-g".to_string()));
        assert!(!debug.compiler_flags.contains(&"-O1".to_string()));

        let release = resolve(&BuildOptions::default(), "i686-pc-linux-gnu", &vendor()).unwrap();
        assert!(!release.compiler_flags.contains(&"-g".to_string()));
        assert!(release.compiler_flags.contains(&"-O1".to_string()));
    }

    #[test]
    fn test_linux_debug_scenario() {
        let opts = BuildOptions {
            debug: true,
            warnings: false,
            enable64: false,
            ..BuildOptions::default()
        };
        let config = resolve(&opts, "i686-pc-linux-gnu", &vendor()).unwrap();
        assert!(config.compiler_flags.contains(&"-g".to_string()));
        assert!(!config.compiler_flags.contains(&"-Wall".to_string()));
        assert!(!config.compiler_flags.contains(&"-m64".to_string()));
        assert!(!config.compiler_flags.contains(&"-O1".to_string()));
        for lib in ["dl", "nsl", "pthread"] {
            assert!(config.link_libs.contains(&lib.to_string()), "missing {lib}");
        }
    }

    #[test]
    fn test_win32_defaults_scenario() {
        let config = resolve(&BuildOptions::default(), "win32", &vendor()).unwrap();
        assert_eq!(config.local_lib, "lib/win32");
        assert!(config.defines.contains(&"-D_REENTRANT".to_string()));
        assert!(config.defines.contains(&"/DWIN32".to_string()));
    }

    #[test]
    fn test_win32_msvc_runtime_flag() {
        let release = resolve(&BuildOptions::default(), "win32", &msvc()).unwrap();
        assert!(release.compiler_flags.contains(&"/MT".to_string()));

        let debug = resolve(
            &BuildOptions {
                debug: true,
                ..BuildOptions::default()
            },
            "win32",
            &msvc(),
        )
        .unwrap();
        assert!(debug.compiler_flags.contains(&"/MTd".to_string()));

        // GCC on win32 links its own runtime; no /MT flag.
        let gcc = resolve(&BuildOptions::default(), "win32", &gnu()).unwrap();
        assert!(!gcc.compiler_flags.iter().any(|f| f.starts_with("/MT")));
    }

    #[test]
    fn test_solaris_64_scenario() {
        let opts = BuildOptions {
            enable64: true,
            ..BuildOptions::default()
        };
        let config = resolve(&opts, "sparc-sun-solaris2.9", &vendor()).unwrap();
        assert_eq!(config.local_lib, "lib/sparc-sun-solaris2.9-64");
        assert!(config
            .compiler_flags
            .contains(&"-xtarget=generic64".to_string()));
    }

    #[test]
    fn test_gnu_toolchain_suffixes_output_dir() {
        let config = resolve(&BuildOptions::default(), "i686-pc-linux-gnu", &gnu()).unwrap();
        assert_eq!(config.local_lib, "lib/i686-pc-linux-gnu/gnu");
    }

    #[test]
    fn test_user_defines_come_first() {
        let opts = BuildOptions {
            defines: vec!["FOO".to_string(), "BAR".to_string()],
            ..BuildOptions::default()
        };
        let config = resolve(&opts, "i686-pc-linux-gnu", &vendor()).unwrap();
        assert_eq!(config.compiler_flags[0], "-DFOO");
        assert_eq!(config.compiler_flags[1], "-DBAR");
    }

    #[test]
    fn test_verbose_toggle() {
        let quiet = resolve(&BuildOptions::default(), "i686-pc-linux-gnu", &vendor()).unwrap();
        assert!(!quiet.compiler_flags.contains(&"-v".to_string()));

        let verbose = resolve(
            &BuildOptions {
                verbose: true,
                ..BuildOptions::default()
            },
            "i686-pc-linux-gnu",
            &vendor(),
        )
        .unwrap();
        assert!(verbose.compiler_flags.contains(&"-v".to_string()));
    }

    #[test]
    fn test_user_paths_pass_through() {
        let opts = BuildOptions {
            include_paths: vec![PathBuf::from("/opt/include")],
            lib_paths: vec![PathBuf::from("/opt/lib")],
            libs: vec!["z".to_string()],
            ..BuildOptions::default()
        };
        let config = resolve(&opts, "x86_64-apple-darwin", &vendor()).unwrap();
        assert_eq!(config.include_paths, vec![PathBuf::from("/opt/include")]);
        assert_eq!(config.lib_paths, vec![PathBuf::from("/opt/lib")]);
        // User libs come before platform libs.
        assert_eq!(config.link_libs, vec!["z", "dl", "pthread"]);
    }
}
