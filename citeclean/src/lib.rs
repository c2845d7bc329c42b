// citeclean/src/lib.rs
//! # citeclean CLI Application
//!
//! This crate provides the command-line interface for the citeclean core
//! library: a `clean` command for single documents and a `sweep` command for
//! rewriting a whole directory of notes in place with `.bak` backups.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
