//! Unified diff output
//!
//! - `options`: header names and color mode
//! - `hunk`: splitting a script into `@@` hunks and their line ranges
//! - `sink`: output adapter that stops at the first failure
//! - `writer`: the renderer itself

pub mod hunk;
pub mod options;
pub mod sink;
pub mod writer;
