//! Where input comes from and output goes to
//!
//! - `session`: the workspace and output writer shared by commands
//! - `workspace`: loading files (or standard input) as documents

pub mod session;
pub mod workspace;
