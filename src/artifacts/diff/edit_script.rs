use crate::artifacts::diff::context;
use crate::artifacts::diff::segment::{Op, Segment};
use derive_new::new;
use std::sync::Arc;

/// Inserted and deleted element counts of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Stat {
    pub inserted: usize,
    pub deleted: usize,
}

/// An ordered list of segments turning `A` into `B`.
///
/// Scripts are immutable once built. Cloning is cheap and shares the segment
/// storage, so a script can be handed to several readers or threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    segments: Arc<[Segment]>,
}

impl EditScript {
    /// The script with no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a script from explicitly ordered segments.
    ///
    /// # Panics
    ///
    /// Panics if a segment does not describe exactly one operation.
    pub fn from_segments(segments: impl Into<Vec<Segment>>) -> Self {
        let segments = segments.into();
        if let Some(bad) = segments.iter().find(|segment| !segment.is_valid()) {
            panic!("invalid segment in edit script: {:?}", bad);
        }
        Self {
            segments: segments.into(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reports whether every segment is an equal run, i.e. `A` and `B` are identical.
    pub fn is_identity(&self) -> bool {
        self.segments.iter().all(|segment| segment.op() == Op::Equal)
    }

    pub fn stat(&self) -> Stat {
        self.segments
            .iter()
            .fold(Stat::default(), |mut stat, segment| {
                match segment.op() {
                    Op::Insert => stat.inserted += segment.len(),
                    Op::Delete => stat.deleted += segment.len(),
                    Op::Equal => {}
                }
                stat
            })
    }

    /// Keeps at most `n` unchanged elements of context around every change.
    pub fn with_context(&self, n: usize) -> EditScript {
        context::reduce(self, n)
    }

    /// One line per segment, for debugging.
    pub fn dump(&self) -> String {
        self.segments
            .iter()
            .map(|segment| format!("{segment}\n"))
            .collect()
    }

    /// Reports whether the segments form one gapless walk through both sequences.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].is_followed_by(&pair[1]))
    }
}

impl<'s> IntoIterator for &'s EditScript {
    type Item = &'s Segment;
    type IntoIter = std::slice::Iter<'s, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects segments produced from the end of the sequences towards their start.
///
/// Appending a segment with the same operation as the last one extends that
/// segment instead, so adjacent segments never share an operation.
#[derive(Debug, Default)]
pub(crate) struct ReverseBuilder {
    segments: Vec<Segment>,
}

impl ReverseBuilder {
    /// Adds `segment`, which must end where the previously added one starts.
    pub(crate) fn prepend(&mut self, segment: Segment) {
        if segment.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.op() == segment.op() => {
                debug_assert!(segment.is_followed_by(last));
                last.from_a = segment.from_a;
                last.from_b = segment.from_b;
            }
            _ => self.segments.push(segment),
        }
    }

    /// Restores chronological order and publishes the script.
    pub(crate) fn finish(mut self) -> EditScript {
        self.segments.reverse();
        EditScript::from_segments(self.segments)
    }
}
