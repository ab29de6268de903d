//! Core engine: input selection, result parsing, and ranking.

pub mod input;
pub mod parser;
pub mod ranking;
