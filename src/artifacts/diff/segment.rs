use derive_new::new;
use std::fmt::{self, Display};

/// Edit operation turning part of `A` into part of `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Delete,
    Insert,
    Equal,
}

impl Op {
    /// Prefix character used for this operation in unified output.
    pub fn prefix(self) -> u8 {
        match self {
            Op::Delete => b'-',
            Op::Insert => b'+',
            Op::Equal => b' ',
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Delete => "del",
            Op::Insert => "ins",
            Op::Equal => "eq",
        };
        f.write_str(name)
    }
}

/// A run of a single operation over half-open index ranges of `A` and `B`.
///
/// A pure insert has an empty `A` span, a pure delete an empty `B` span and an
/// equal run two spans of the same non-zero length. The operation is derived
/// from the spans, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
pub struct Segment {
    pub from_a: usize,
    pub to_a: usize,
    pub from_b: usize,
    pub to_b: usize,
}

impl Segment {
    pub fn delete(from_a: usize, to_a: usize, at_b: usize) -> Self {
        Segment::new(from_a, to_a, at_b, at_b)
    }

    pub fn insert(at_a: usize, from_b: usize, to_b: usize) -> Self {
        Segment::new(at_a, at_a, from_b, to_b)
    }

    pub fn equal(from_a: usize, from_b: usize, len: usize) -> Self {
        Segment::new(from_a, from_a + len, from_b, from_b + len)
    }

    pub fn op(&self) -> Op {
        if self.from_a == self.to_a {
            Op::Insert
        } else if self.from_b == self.to_b {
            Op::Delete
        } else {
            Op::Equal
        }
    }

    /// Number of elements covered by this segment.
    pub fn len(&self) -> usize {
        if self.from_a == self.to_a {
            self.to_b - self.from_b
        } else {
            self.to_a - self.from_a
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the spans describe exactly one operation.
    pub fn is_valid(&self) -> bool {
        if self.from_a > self.to_a || self.from_b > self.to_b {
            return false;
        }
        let span_a = self.to_a - self.from_a;
        let span_b = self.to_b - self.from_b;
        match (span_a, span_b) {
            (0, 0) => false,
            (0, _) | (_, 0) => true,
            (a, b) => a == b,
        }
    }

    /// Reports whether `next` starts exactly where this segment ends.
    pub fn is_followed_by(&self, next: &Segment) -> bool {
        self.to_a == next.from_a && self.to_b == next.from_b
    }

    /// The first `n` elements of an equal run.
    pub(crate) fn first_n(&self, n: usize) -> Segment {
        debug_assert!(self.op() == Op::Equal && self.len() >= n);
        Segment::equal(self.from_a, self.from_b, n)
    }

    /// The last `n` elements of an equal run.
    pub(crate) fn last_n(&self, n: usize) -> Segment {
        debug_assert!(self.op() == Op::Equal && self.len() >= n);
        Segment::equal(self.to_a - n, self.to_b - n, n)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -- {} {} --> ({}, {})",
            self.from_a,
            self.from_b,
            self.op(),
            self.len(),
            self.to_a,
            self.to_b
        )
    }
}
