//! Library targets: source enumeration and registration against a build
//! engine.

pub mod engine;
pub mod registrar;
pub mod sources;

pub use engine::{BuildEngine, PlanEngine, PlannedLibrary};
pub use registrar::{register_libraries, LibraryTarget};
pub use sources::source_files;
