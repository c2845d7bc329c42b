// citeclean/src/commands/mod.rs
//! Command implementations for the citeclean CLI.

pub mod clean;
pub mod sweep;
