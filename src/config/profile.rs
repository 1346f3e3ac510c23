//! Per-family build-flag profiles.
//!
//! Each supported platform family carries a fixed table of compiler and
//! linker flag strings. The strings are space-separated in the historical
//! `configure`-script style; the resolver splits them into tokens when
//! assembling the final flag lists, so an empty string contributes nothing.

use serde::Serialize;

/// Optimization tier exposed by every profile.
///
/// The resolver always selects [`OptLevel::Medium`] today; the fast and
/// fastest tiers are part of the profile tables and the option surface but
/// are not yet wired into flag selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptLevel {
    #[default]
    Medium,
    Fast,
    Fastest,
}

impl OptLevel {
    /// Map a raw integer-style option value to a tier.
    ///
    /// `0`/unparsable → medium, `1` → fast, anything higher → fastest.
    pub fn from_raw(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(1) => OptLevel::Fast,
            Ok(n) if n >= 2 => OptLevel::Fastest,
            _ => OptLevel::Medium,
        }
    }
}

/// The fixed flag table for one platform family.
///
/// Every field holds a space-separated flag string; empty means the family
/// has no flags in that category.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    /// Debug-info flags.
    pub debug_flags: &'static str,
    /// Warning flags.
    pub warn_flags: &'static str,
    /// Compiler-verbose flags.
    pub verbose_flags: &'static str,
    /// 64-bit build flags.
    pub flags_64: &'static str,
    /// Medium optimization tier.
    pub optz_medium: &'static str,
    /// Fast optimization tier.
    pub optz_fast: &'static str,
    /// Fastest optimization tier.
    pub optz_fastest: &'static str,
    /// Thread-related preprocessor defines.
    pub thread_defines: &'static str,
    /// Thread-related link libraries.
    pub thread_libs: &'static str,
    /// Base preprocessor defines.
    pub compiler_defines: &'static str,
    /// Base compiler flags.
    pub compiler_flags: &'static str,
    /// Extra link libraries.
    pub link_libs: &'static str,
}

impl PlatformProfile {
    /// The flags for one optimization tier.
    pub fn optimization(&self, level: OptLevel) -> &'static str {
        match level {
            OptLevel::Medium => self.optz_medium,
            OptLevel::Fast => self.optz_fast,
            OptLevel::Fastest => self.optz_fastest,
        }
    }
}

/// MSVC on Windows.
pub const WIN32: PlatformProfile = PlatformProfile {
    debug_flags: "/Zi",
    warn_flags: "/Wall",
    verbose_flags: "",
    flags_64: "",
    optz_medium: "-O2",
    optz_fast: "-O2",
    optz_fastest: "-O2",
    thread_defines: "-D_REENTRANT",
    thread_libs: "",
    compiler_defines: "/DWIN32 /UUNICODE /U_UNICODE",
    compiler_flags: "/EHs /GR",
    link_libs: "",
};

/// GCC on x86 Linux.
pub const LINUX: PlatformProfile = PlatformProfile {
    debug_flags: "-g",
    warn_flags: "-Wall",
    verbose_flags: "-v",
    flags_64: "-m64",
    optz_medium: "-O1",
    optz_fast: "-O2",
    optz_fastest: "-O3",
    thread_defines: "-D_REENTRANT -D__POSIX",
    thread_libs: "pthread",
    compiler_defines: "-D_FILE_OFFSET_BITS=64 -D_LARGEFILE_SOURCE",
    compiler_flags: "",
    link_libs: "dl nsl",
};

/// GCC/Clang on macOS.
pub const APPLE: PlatformProfile = PlatformProfile {
    debug_flags: "-g",
    warn_flags: "-Wall",
    verbose_flags: "-v",
    flags_64: "-m64",
    optz_medium: "-O1",
    optz_fast: "-O2",
    optz_fastest: "-O3",
    thread_defines: "-D_REENTRANT -D__POSIX",
    thread_libs: "pthread",
    compiler_defines: "-D_FILE_OFFSET_BITS=64 -D_LARGEFILE_SOURCE",
    compiler_flags: "",
    link_libs: "dl",
};

/// MIPSpro on IRIX.
pub const SGI: PlatformProfile = PlatformProfile {
    debug_flags: "-g",
    warn_flags: "-fullwarn",
    verbose_flags: "-v",
    flags_64: "-64",
    optz_medium: "-O1",
    optz_fast: "-O2",
    optz_fastest: "-O3",
    thread_defines: "-D_REENTRANT",
    thread_libs: "",
    compiler_defines: "-D_FILE_OFFSET_BITS=64 -D_LARGEFILE_SOURCE",
    compiler_flags: "-LANG:std -LANG:ansi-for-init-scope=ON -ptused",
    link_libs: "m",
};

/// Sun Studio on Solaris/SPARC.
pub const SOLARIS: PlatformProfile = PlatformProfile {
    debug_flags: "-g",
    warn_flags: "",
    verbose_flags: "-v",
    flags_64: "-xtarget=generic64",
    optz_medium: "-xO1",
    optz_fast: "-fast",
    optz_fastest: "-fast",
    thread_defines: "-mt",
    thread_libs: "thread",
    compiler_defines: "-D_FILE_OFFSET_BITS=64 -D_LARGEFILE_SOURCE",
    compiler_flags: "-instances=static",
    link_libs: "dl nsl socket",
};
