//! Command-line interface module.
//!
//! Provides argument parsing and run orchestration.

pub mod args;
pub mod commands;
