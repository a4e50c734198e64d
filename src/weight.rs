use std::{fmt::Debug, ops::Sub};

use num_traits::Zero;

/// A numeric edge weight.
///
/// Implemented for every signed integer type and for `f32`/`f64`.  Unsigned
/// types are deliberately left out: reweighting needs subtraction that may go
/// below zero.
///
/// Sums of finite weights are computed with the type's own `+`, so inputs
/// whose shortest paths exceed the type's range overflow the same way plain
/// arithmetic would.  Float weights must not be NaN.
pub trait Weight: Copy + Debug + PartialOrd + Zero + Sub<Output = Self> {
    /// Returns true if the weight is strictly below zero.
    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// Applies a node potential to an edge weight: `self + from - to`, where
    /// `from` and `to` are the potentials of the edge's source and target.
    fn shift(self, from: Self, to: Self) -> Self {
        self + from - to
    }

    /// Inverse of [`Self::shift`] for a path distance: `self + to - from`.
    ///
    /// With `self >= 0` and potentials at most zero, `self + to` stays
    /// between `to` and `self`, so only a result outside the type's range
    /// can overflow.
    fn unshift(self, from: Self, to: Self) -> Self {
        self + to - from
    }
}

macro_rules! int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {}
        )*
    };
}

int_weight!(i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                // Potentials are exact shortest distances, so a reweighted
                // float edge can only dip below zero by rounding.  Snap that
                // noise to zero; anything larger is left for the caller's
                // invariant check to catch.
                fn shift(self, from: Self, to: Self) -> Self {
                    let shifted = self + from - to;
                    let scale = self.abs().max(from.abs()).max(to.abs());
                    if shifted < 0.0 && -shifted <= scale * (4.0 * <$t>::EPSILON) {
                        0.0
                    } else {
                        shifted
                    }
                }
            }
        )*
    };
}

float_weight!(f32, f64);
