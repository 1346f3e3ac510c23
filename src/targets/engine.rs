//! The external build-engine seam.
//!
//! Registration does not compile anything itself; it hands fully-described
//! library requests to a [`BuildEngine`]. The [`PlanEngine`] implementation
//! records the requests as a build plan, which is what the CLI prints and
//! what tests inspect.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

/// How a library artifact is linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    Static,
    Shared,
}

/// One fully-described library build request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRequest {
    /// Output path, relative to the build root (e.g. `lib/win32/nitf`).
    pub out: String,
    /// Linkage for the artifact.
    pub linkage: Linkage,
    /// Source files, already enumerated and platform-filtered.
    pub sources: Vec<PathBuf>,
    /// Libraries to link against.
    pub libs: Vec<String>,
    /// Library search paths.
    pub lib_paths: Vec<String>,
}

/// An external build engine that can produce library artifacts.
///
/// Ordering among requests is caller-supplied and unvalidated; a request
/// that depends on a not-yet-registered library is not detected here.
pub trait BuildEngine {
    /// Register a static library build.
    fn static_library(&mut self, request: LibraryRequest) -> Result<()>;

    /// Register a shared library build.
    fn shared_library(&mut self, request: LibraryRequest) -> Result<()>;
}

/// A recorded library build, as reported by [`PlanEngine`].
pub type PlannedLibrary = LibraryRequest;

/// A [`BuildEngine`] that records requests instead of building them.
#[derive(Debug, Default, Serialize)]
pub struct PlanEngine {
    /// Recorded requests, in registration order.
    pub libraries: Vec<PlannedLibrary>,
}

impl PlanEngine {
    pub fn new() -> Self {
        PlanEngine::default()
    }
}

impl BuildEngine for PlanEngine {
    fn static_library(&mut self, request: LibraryRequest) -> Result<()> {
        debug_assert_eq!(request.linkage, Linkage::Static);
        self.libraries.push(request);
        Ok(())
    }

    fn shared_library(&mut self, request: LibraryRequest) -> Result<()> {
        debug_assert_eq!(request.linkage, Linkage::Shared);
        self.libraries.push(request);
        Ok(())
    }
}
