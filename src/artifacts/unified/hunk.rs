use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::diff::segment::Segment;
use std::fmt::{self, Display};

/// Half-open range of element indices on one side of a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        Self { first, last }
    }

    pub fn size(&self) -> usize {
        self.last - self.first
    }

    /// 1-based start as printed in a hunk header.
    ///
    /// An empty range is printed as starting one line earlier, i.e. at the line
    /// after which the change happens, the way `diff -u` prints it.
    pub fn start(&self) -> usize {
        if self.size() == 0 {
            self.first
        } else {
            self.first + 1
        }
    }
}

impl Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start(), self.size())
    }
}

/// A maximal contiguous run of segments, printed under one `@@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunk<'s> {
    segments: &'s [Segment],
    a: LineRange,
    b: LineRange,
}

impl<'s> Hunk<'s> {
    fn new(segments: &'s [Segment]) -> Self {
        // Segments are contiguous, so inserts never move the A cursor and
        // deletes never move the B cursor: both ranges run from the first
        // segment's start to the last segment's end.
        let (first, last) = (segments[0], segments[segments.len() - 1]);
        Self {
            segments,
            a: LineRange::new(first.from_a, last.to_a),
            b: LineRange::new(first.from_b, last.to_b),
        }
    }

    pub fn segments(&self) -> &'s [Segment] {
        self.segments
    }

    pub fn a_range(&self) -> LineRange {
        self.a
    }

    pub fn b_range(&self) -> LineRange {
        self.b
    }

    pub fn a_start(&self) -> usize {
        self.a.start()
    }

    pub fn a_size(&self) -> usize {
        self.a.size()
    }

    pub fn b_start(&self) -> usize {
        self.b.start()
    }

    pub fn b_size(&self) -> usize {
        self.b.size()
    }

    /// The `@@ -a +b @@` header line, without the newline.
    pub fn header(&self) -> String {
        format!("@@ -{} +{} @@", self.a, self.b)
    }
}

/// Splits a script into hunks wherever consecutive segments are not contiguous.
pub fn hunks(script: &EditScript) -> impl Iterator<Item = Hunk<'_>> {
    script
        .segments()
        .chunk_by(|curr, next| curr.is_followed_by(next))
        .map(Hunk::new)
}
