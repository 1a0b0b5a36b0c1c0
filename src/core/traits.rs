//! Core numeric traits for relaxa.

use num_traits::Float;
use std::fmt::Debug;

/// Cell type of a grid: any float that can cross thread boundaries.
pub trait Real: Float + Send + Sync + Debug + 'static {
    /// Five-point average of the four neighbours: 0.25·(l + r + t + b).
    #[inline(always)]
    fn stencil(left: Self, right: Self, top: Self, bottom: Self) -> Self {
        let two = Self::one() + Self::one();
        (left + right + top + bottom) * (two * two).recip()
    }
}

impl<T> Real for T where T: Float + Send + Sync + Debug + 'static {}
