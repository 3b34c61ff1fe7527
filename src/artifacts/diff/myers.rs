//! Myers' O((N+M)·D) shortest edit script search.
//!
//! The search walks diagonals `k = x - y` of the edit graph. Round `d` records,
//! for every diagonal reachable with `d` edits, the furthest `x` coordinate it
//! reaches after following the snake of matching elements. Once the end point
//! `(len_a, len_b)` is reached, the recorded rounds are walked backwards to
//! rebuild the path.
//!
//! Every round is snapshotted for the backtrace, so time and memory are both
//! O((N+M)²) in the worst case. That is fine for line-oriented diffs of ordinary
//! files and not suited to very large inputs.

use crate::artifacts::diff::cancel::{Cancel, Never};
use crate::artifacts::diff::edit_script::{EditScript, ReverseBuilder};
use crate::artifacts::diff::segment::Segment;
use crate::artifacts::diff::sequence::SequencePair;
use log::{debug, trace};

/// Rounds between two polls of the cancellation signal.
const CANCEL_POLL_INTERVAL: usize = 16;

/// Trace cells reserved up front. Inputs whose full trace fits get an arena
/// that never reallocates; larger ones start with this many cells and grow.
const TRACE_RESERVE_CELLS: usize = 1 << 20;

/// Result of a cancellable diff computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    Completed(EditScript),
    Cancelled,
}

impl DiffOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DiffOutcome::Cancelled)
    }

    /// The computed script, or `None` if the search was cancelled.
    pub fn completed(self) -> Option<EditScript> {
        match self {
            DiffOutcome::Completed(script) => Some(script),
            DiffOutcome::Cancelled => None,
        }
    }
}

/// Per-round furthest-reaching `x` for every diagonal, stored as one flat arena.
///
/// Each round is a row of `2 * max + 1` cells; diagonal `k` lives at column
/// `max + k`. At most `max` rounds are recorded, so the arena is sized for all
/// of them when that stays under [`TRACE_RESERVE_CELLS`]. Beyond that only the
/// budget is reserved, since most diffs finish in far fewer rounds than `max`.
struct Trace {
    max: usize,
    width: usize,
    cells: Vec<isize>,
}

impl Trace {
    fn new(max: usize) -> Self {
        let width = max
            .checked_mul(2)
            .and_then(|w| w.checked_add(1))
            .filter(|_| max <= (isize::MAX / 2) as usize)
            .unwrap_or_else(|| panic!("sequence lengths overflow the diagonal index range: {max}"));
        let rows = (TRACE_RESERVE_CELLS / width).min(max).max(1);
        Self {
            max,
            width,
            cells: Vec::with_capacity(rows * width),
        }
    }

    fn rounds(&self) -> usize {
        self.cells.len() / self.width
    }

    fn snapshot(&mut self, frontier: &[isize]) {
        debug_assert_eq!(frontier.len(), self.width);
        self.cells.extend_from_slice(frontier);
    }

    fn round(&self, d: usize) -> Round<'_> {
        let start = d * self.width;
        Round {
            max: self.max as isize,
            cells: &self.cells[start..start + self.width],
        }
    }
}

/// One row of the trace, addressed by diagonal.
struct Round<'t> {
    max: isize,
    cells: &'t [isize],
}

impl Round<'_> {
    fn reach(&self, k: isize) -> isize {
        self.cells[(self.max + k) as usize]
    }
}

/// Picks the neighbouring diagonal a path on `k` continues from in round `d`.
///
/// Moving down from `k + 1` is an insertion, moving right from `k - 1` a
/// deletion. The insertion is taken when it reaches strictly further, and
/// always on the lower boundary diagonal.
fn previous_diagonal(k: isize, d: isize, reach: impl Fn(isize) -> isize) -> isize {
    if k == -d || (k != d && reach(k - 1) < reach(k + 1)) {
        k + 1
    } else {
        k - 1
    }
}

/// Computes a shortest edit script turning `A` into `B`.
///
/// The cancellation signal is polled every few rounds; once it fires the
/// search stops and [`DiffOutcome::Cancelled`] is returned.
///
/// # Panics
///
/// Panics if `len_a + len_b` does not fit the diagonal index range.
pub fn diff<P, C>(pair: &P, cancel: &C) -> DiffOutcome
where
    P: SequencePair + ?Sized,
    C: Cancel + ?Sized,
{
    let (n, m) = (pair.len_a(), pair.len_b());

    match (n, m) {
        (0, 0) => return DiffOutcome::Completed(EditScript::empty()),
        (0, _) => return DiffOutcome::Completed(EditScript::from_segments([Segment::insert(0, 0, m)])),
        (_, 0) => return DiffOutcome::Completed(EditScript::from_segments([Segment::delete(0, n, 0)])),
        _ => {}
    }

    let max = n
        .checked_add(m)
        .unwrap_or_else(|| panic!("sequence lengths overflow: {n} + {m}"));
    let mut trace = Trace::new(max);
    let offset = max as isize;
    let (n, m) = (n as isize, m as isize);
    let mut v = vec![0isize; trace.width];

    'search: for d in 0..max {
        if d % CANCEL_POLL_INTERVAL == 0 && cancel.is_cancelled() {
            debug!("myers: cancelled after {d} rounds");
            return DiffOutcome::Cancelled;
        }

        trace.snapshot(&v);

        let d = d as isize;
        for k in (-d..=d).step_by(2) {
            let prev_k = previous_diagonal(k, d, |k| v[(offset + k) as usize]);
            let mut x = if prev_k > k {
                v[(offset + prev_k) as usize]
            } else {
                v[(offset + prev_k) as usize] + 1
            };

            let mut y = x - k;
            while x < n && y < m && pair.equal(x as usize, y as usize) {
                // snake
                x += 1;
                y += 1;
            }
            v[(offset + k) as usize] = x;

            if x == n && y == m {
                break 'search;
            }
        }
    }

    if trace.rounds() == max {
        // No common element at all: the end point is only reachable in round
        // `max`, which the search above never enters.
        debug!("myers: no common elements, edit distance {max}");
        return DiffOutcome::Completed(EditScript::from_segments([
            Segment::delete(0, n as usize, 0),
            Segment::insert(n as usize, 0, m as usize),
        ]));
    }

    debug!("myers: edit distance {}", trace.rounds() - 1);
    DiffOutcome::Completed(backtrack(&trace, n, m))
}

/// [`diff`] without a cancellation signal.
pub fn diff_uncancellable<P: SequencePair + ?Sized>(pair: &P) -> EditScript {
    match diff(pair, &Never) {
        DiffOutcome::Completed(script) => script,
        DiffOutcome::Cancelled => unreachable!("Never does not cancel"),
    }
}

fn backtrack(trace: &Trace, n: isize, m: isize) -> EditScript {
    let (mut x, mut y) = (n, m);
    let mut builder = ReverseBuilder::default();

    for d in (0..trace.rounds()).rev() {
        let round = trace.round(d);
        let d = d as isize;
        let k = x - y;
        let prev_k = previous_diagonal(k, d, |k| round.reach(k));
        let prev_x = round.reach(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            builder.prepend(Segment::equal((x - 1) as usize, (y - 1) as usize, 1));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            trace!("myers: round {d} steps ({prev_x}, {prev_y}) -> ({x}, {y})");
            builder.prepend(Segment::new(
                prev_x as usize,
                x as usize,
                prev_y as usize,
                y as usize,
            ));
        }

        (x, y) = (prev_x, prev_y);
    }

    builder.finish()
}
