//! Edit script computation
//!
//! - `sequence`: the capabilities a caller supplies (comparison and element output)
//! - `segment`: single runs of one operation
//! - `edit_script`: ordered, run-length encoded segments
//! - `myers`: Myers' shortest edit script search
//! - `context`: trimming unchanged runs to a bounded context
//! - `cancel`: cooperative cancellation signals

pub mod cancel;
pub mod context;
pub mod edit_script;
pub mod myers;
pub mod segment;
pub mod sequence;
