//! Ballast - a build-configuration resolver for native C/C++ library trees
//!
//! This crate provides the core library functionality for Ballast:
//! platform detection and classification, option-to-flag resolution,
//! source enumeration, and library target registration.

pub mod config;
pub mod manifest;
pub mod targets;
pub mod util;

pub use config::options::{BuildOptions, RawOptions};
pub use config::platform::{detect_platform, PlatformFamily};
pub use config::resolve::{resolve, ResolvedConfig};
pub use config::toolchain::{CompilerFamily, ToolchainInfo};
pub use manifest::Manifest;
pub use targets::engine::{BuildEngine, PlanEngine};
pub use targets::registrar::LibraryTarget;
pub use util::diagnostic::UnsupportedPlatformError;
