//! CLI command implementations.

pub mod common;
pub mod render;
pub mod styles;
pub mod version;
