use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::diff::segment::{Op, Segment};
use log::debug;

/// Returns a script keeping at most `n` unchanged elements around each change.
///
/// Leading and trailing equal runs are cut to `n` elements. An interior equal
/// run longer than `2n` is split into its first and last `n` elements, leaving
/// a gap in the script that marks a hunk boundary. Context trimmed to zero
/// elements is dropped.
///
/// A script made of a single equal run yields the empty script: identical
/// inputs have nothing to show.
pub fn reduce(script: &EditScript, n: usize) -> EditScript {
    let segments = script.segments();

    match segments {
        [] => return EditScript::empty(),
        [only] if only.op() == Op::Equal => return EditScript::empty(),
        [_] => return script.clone(),
        _ => {}
    }

    let last = segments.len() - 1;
    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut push = |segment: Segment| {
        if !segment.is_empty() {
            out.push(segment);
        }
    };

    for (i, segment) in segments.iter().enumerate() {
        if segment.op() != Op::Equal {
            push(*segment);
            continue;
        }

        if i == 0 {
            push(segment.last_n(n.min(segment.len())));
        } else if i == last {
            push(segment.first_n(n.min(segment.len())));
        } else if segment.len() <= n.saturating_mul(2) {
            push(*segment);
        } else {
            push(segment.first_n(n));
            push(segment.last_n(n));
        }
    }

    debug!(
        "context: {} segments reduced to {} with {n} lines of context",
        segments.len(),
        out.len()
    );
    EditScript::from_segments(out)
}
