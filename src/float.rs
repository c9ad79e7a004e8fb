use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the primitive floating-point types (`f32`, `f64`).
///
/// This is the "detached" side of every [`Scalar`](crate::Scalar): the plain
/// value left over once derivative information is stripped. Dual numbers do
/// not implement it.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// Convert an `f64` literal into this type (rounding for `f32`).
    fn lit(val: f64) -> Self;
}

impl Float for f32 {
    #[inline]
    fn lit(val: f64) -> Self {
        val as f32
    }
}

impl Float for f64 {
    #[inline]
    fn lit(val: f64) -> Self {
        val
    }
}
