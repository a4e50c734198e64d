use std::fmt::{self, Display};

use crate::weight::Weight;

/// The length of a shortest path, or [`Distance::Unreachable`] when no path
/// exists.
///
/// `Unreachable` plays the role of positive infinity: it orders after every
/// finite distance, and extending it by an edge yields `Unreachable` again
/// without touching the underlying numeric type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    #[default]
    Unreachable,
}

impl<W> Distance<W> {
    /// Returns true if the distance is finite.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite distance, if any.
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Maps a finite distance, leaving `Unreachable` untouched.
    pub fn map<U>(self, f: impl FnOnce(W) -> U) -> Distance<U> {
        match self {
            Distance::Finite(w) => Distance::Finite(f(w)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Extends the distance by one edge of weight `weight`.
    pub fn plus(self, weight: W) -> Self {
        self.map(|w| w + weight)
    }

    /// Returns true if `self` is strictly shorter than `other`.  An
    /// unreachable distance never improves on anything.
    pub fn improves_on(self, other: Self) -> bool {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a < b,
            (Distance::Finite(_), Distance::Unreachable) => true,
            (Distance::Unreachable, _) => false,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

impl<W> From<Distance<W>> for Option<W> {
    fn from(value: Distance<W>) -> Self {
        value.finite()
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}
