//! Build-configuration resolution.
//!
//! This module turns a detected platform identifier and a set of user build
//! options into a normalized configuration: ordered include paths, defines,
//! compiler flags, link libraries, and a per-platform output directory.
//!
//! Resolution is a single pure pass. The only fatal condition anywhere in it
//! is a platform string that matches none of the five known families.

pub mod options;
pub mod platform;
pub mod profile;
pub mod resolve;
pub mod toolchain;

pub use options::BuildOptions;
pub use platform::PlatformFamily;
pub use resolve::ResolvedConfig;
