//! Command implementations

pub mod completions;
pub mod configure;
pub mod plan;
pub mod platform;
pub mod sources;
