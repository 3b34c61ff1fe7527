//! Diff data structures and algorithms
//!
//! - `diff`: sequence capabilities, edit scripts, Myers' algorithm and context trimming
//! - `unified`: rendering edit scripts as unified diff text

pub mod diff;
pub mod unified;
