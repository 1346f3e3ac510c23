//! Source file enumeration.
//!
//! Collects the source files directly inside a directory (non-recursive)
//! and, when a platform is known, drops files whose names mark them as
//! belonging to the other platform family. The filter is filename-convention
//! based and case-insensitive: a `SocketWin32.c` is skipped on unix builds,
//! a `ThreadPosix.c` or `MutexSolaris.c` is skipped on win32 builds.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

/// Build the exclusion filter for a platform.
///
/// Building for win32 excludes unix-family names; any other platform
/// excludes win32 names.
fn platform_filter(platform: &str) -> Regex {
    let pattern = if platform.contains("win32") {
        r"(?i)unix|solaris|irix|posix|nspr"
    } else {
        r"(?i)win32"
    };
    Regex::new(pattern).unwrap()
}

/// Enumerate `dir/*<ext>` as absolute paths.
///
/// `ext` is a suffix match (`.c`, `.cpp`); with a `platform`, files named
/// for the other platform family are filtered out.
pub fn source_files(dir: &Path, ext: &str, platform: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*{}", dir.display(), ext);
    let mut source = Vec::new();
    for entry in glob::glob(&pattern)
        .with_context(|| format!("invalid source pattern `{}`", pattern))?
    {
        let path = entry.with_context(|| format!("failed to read entry under {}", dir.display()))?;
        let abs = std::path::absolute(&path)
            .with_context(|| format!("failed to resolve path {}", path.display()))?;
        source.push(abs);
    }

    if let Some(platform) = platform {
        let filter = platform_filter(platform);
        source.retain(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            !filter.is_match(name)
        });
    }

    Ok(source)
}
