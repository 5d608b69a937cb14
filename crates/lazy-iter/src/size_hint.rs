/**
 * @file size_hint.rs
 * @author Krisna Pranav
 * @brief lazy-iter[size_hint]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use commons::utils::min;
use opt::{Absent, Opt, Present};

/// Estimate of how many elements an iterator has left.
///
/// `lower_bound` never exceeds a present `upper_bound`. Both bounds are
/// conservative: sources backed by a fixed sequence report an exact hint,
/// sources of unknown length report `(0, Absent)`. The hint only sizes
/// allocations, it is never trusted for correctness.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct SizeHint {
    pub lower_bound: usize,
    pub upper_bound: Opt<usize>,
} // pub struct SizeHint

impl SizeHint {
    pub const fn new(lower_bound: usize, upper_bound: Opt<usize>) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    pub const fn exact(len: usize) -> Self {
        Self::new(len, Present(len))
    }

    pub const fn unknown() -> Self {
        Self::new(0, Absent)
    }

    /// Hint of an exhausted iterator.
    pub const fn empty() -> Self {
        Self::exact(0)
    }

    pub fn is_exact(&self) -> bool {
        self.upper_bound == Present(self.lower_bound)
    }

    /// Hint of an iterator that stops at the shorter of `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        let upper_bound = match (self.upper_bound, other.upper_bound) {
            (Present(a), Present(b)) => Present(min(a, b)),
            (Present(a), Absent) => Present(a),
            (Absent, Present(b)) => Present(b),
            (Absent, Absent) => Absent,
        };

        Self::new(min(self.lower_bound, other.lower_bound), upper_bound)
    }

    /// Same upper bound, but every element may be rejected.
    pub fn without_lower_bound(self) -> Self {
        Self::new(0, self.upper_bound)
    }

    /// Hint after capping the iterator at `n` elements.
    pub fn take(self, n: usize) -> Self {
        Self::new(
            min(n, self.lower_bound),
            Present(self.upper_bound.map_or(n, |upper| min(n, upper))),
        )
    }

    /// Hint after dropping `n` leading elements.
    pub fn skip(self, n: usize) -> Self {
        Self::new(
            self.lower_bound.saturating_sub(n),
            self.upper_bound.map(|upper| upper.saturating_sub(n)),
        )
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<(usize, Option<usize>)> for SizeHint {
    fn from((lower_bound, upper_bound): (usize, Option<usize>)) -> Self {
        Self::new(lower_bound, upper_bound.into())
    }
}

impl From<SizeHint> for (usize, Option<usize>) {
    fn from(hint: SizeHint) -> Self {
        (hint.lower_bound, hint.upper_bound.into())
    }
}
