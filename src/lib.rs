//! Shortest edit scripts and unified diff rendering.
//!
//! Two sequences are compared through the [`SequencePair`] capability, the
//! Myers engine produces an [`EditScript`], [`EditScript::with_context`] trims
//! unchanged runs and [`write_unified`] renders the result.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod logging;

pub use artifacts::diff::cancel::{Cancel, Deadline, Never};
pub use artifacts::diff::edit_script::{EditScript, Stat};
pub use artifacts::diff::myers::{DiffOutcome, diff, diff_uncancellable};
pub use artifacts::diff::segment::{Op, Segment};
pub use artifacts::diff::sequence::{BytesPair, ElementWriter, Pair, SequencePair};
pub use artifacts::unified::options::{ColorMode, OptionsError, UnifiedOptions};
pub use artifacts::unified::writer::{WriteError, write_unified};
