//! The [`Scalar`] trait for writing optics code once for every number type.
//!
//! Functions written as `fn f<T: Scalar>(x: T) -> T` work with plain `f32`/`f64`
//! and with [`Dual<S, N>`](crate::Dual), which carries a gradient alongside the
//! value. Every formula in the trace engine is written against this trait.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::dual::Dual;
use crate::float::Float;

/// The numeric operations every optical computation relies on.
///
/// Comparisons (`PartialOrd`, `PartialEq`) look at the primal value only, so
/// branch decisions such as total internal reflection never depend on
/// derivative information.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Lift a plain float to this scalar (constant, zero derivative).
    fn from_f(val: Self::Float) -> Self;

    /// Extract the primal value, discarding any derivative information.
    fn detach(&self) -> Self::Float;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Lift an `f64` literal, e.g. `T::lit(2.0)`.
    #[inline]
    fn lit(val: f64) -> Self {
        Self::from_f(<Self::Float as Float>::lit(val))
    }

    #[inline]
    fn sqr(self) -> Self {
        self * self
    }

    #[inline]
    fn abs(self) -> Self {
        self.copysign(Self::one())
    }

    /// Machine epsilon of the primal type, lifted.
    #[inline]
    fn epsilon() -> Self {
        Self::from_f(<Self::Float as num_traits::Float>::epsilon())
    }
}

impl Scalar for f32 {
    type Float = f32;

    #[inline]
    fn from_f(val: f32) -> Self {
        val
    }

    #[inline]
    fn detach(&self) -> f32 {
        *self
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        f32::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f32::cos(self)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        f32::copysign(self, sign)
    }
}

impl Scalar for f64 {
    type Float = f64;

    #[inline]
    fn from_f(val: f64) -> Self {
        val
    }

    #[inline]
    fn detach(&self) -> f64 {
        *self
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        f64::copysign(self, sign)
    }
}

impl<S: Scalar, const N: usize> Scalar for Dual<S, N> {
    type Float = S::Float;

    #[inline]
    fn from_f(val: S::Float) -> Self {
        Dual::constant(S::from_f(val))
    }

    #[inline]
    fn detach(&self) -> S::Float {
        self.re.detach()
    }

    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        Dual::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Dual::cos(self)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        Dual::copysign(self, sign)
    }
}

/// Free-function form of [`Scalar::detach`].
#[inline]
pub fn detach<T: Scalar>(v: T) -> T::Float {
    v.detach()
}
