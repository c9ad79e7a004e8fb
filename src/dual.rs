//! Forward-mode dual numbers with `N` gradient lanes.
//!
//! [`Dual<S, N>`] carries a value together with its partial derivatives with
//! respect to `N` caller-declared trace parameters (one lane per parameter),
//! e.g. one lane per sampled ray height when computing the sensitivity of
//! image position to aperture height.

use std::fmt::{self, Display};

use crate::Scalar;

/// Forward-mode dual number: a value with N gradient lanes.
///
/// `Dual { re, eps }` represents `re + Σ eps[k]·εₖ` with `εⱼ·εₖ = 0`. The
/// underlying scalar may itself be a dual number, so `Dual<Dual<f64, 1>, 1>`
/// yields second derivatives.
#[derive(Clone, Copy, Debug)]
pub struct Dual<S: Scalar, const N: usize> {
    /// Primal (real) value.
    pub re: S,
    /// Gradient values, one per lane.
    pub eps: [S; N],
}

impl<S: Scalar, const N: usize> Default for Dual<S, N> {
    fn default() -> Self {
        Dual {
            re: S::zero(),
            eps: [S::zero(); N],
        }
    }
}

impl<S: Scalar, const N: usize> Display for Dual<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.re)?;
        for (i, e) in self.eps.iter().enumerate() {
            write!(f, " + {}\u{03b5}{}", e, i)?;
        }
        Ok(())
    }
}

impl<S: Scalar, const N: usize> From<S> for Dual<S, N> {
    #[inline]
    fn from(val: S) -> Self {
        Dual::constant(val)
    }
}

impl<S: Scalar, const N: usize> Dual<S, N> {
    /// Create a new dual number from a value and its gradient.
    #[inline]
    pub fn new(re: S, eps: [S; N]) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero gradient in all lanes).
    #[inline]
    pub fn constant(re: S) -> Self {
        Dual {
            re,
            eps: [S::zero(); N],
        }
    }

    /// Create a trace parameter: unit derivative in `lane`, zero elsewhere.
    #[inline]
    pub fn variable(re: S, lane: usize) -> Self {
        Dual {
            re,
            eps: std::array::from_fn(|k| if k == lane { S::one() } else { S::zero() }),
        }
    }

    /// Partial derivative in `lane`.
    #[inline]
    pub fn derivative(&self, lane: usize) -> S {
        self.eps[lane]
    }

    /// Apply the chain rule: given `f(self.re)` and `f'(self.re)`, produce the dual result.
    #[inline(always)]
    fn chain(self, f_val: S, f_deriv: S) -> Self {
        Dual {
            re: f_val,
            eps: std::array::from_fn(|k| self.eps[k] * f_deriv),
        }
    }

    #[inline]
    pub fn recip(self) -> Self {
        let inv = S::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = S::one() + S::one();
        self.chain(s, S::one() / (two * s))
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let s = self.re.sin();
        let c = self.re.cos();
        (
            Dual {
                re: s,
                eps: std::array::from_fn(|k| self.eps[k] * c),
            },
            Dual {
                re: c,
                eps: std::array::from_fn(|k| self.eps[k] * (-s)),
            },
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.re < S::zero() {
            -self
        } else {
            self
        }
    }

    /// Magnitude of `self` with the sign of `sign`.
    ///
    /// The gradient follows `self` and flips with the sign; `sign` contributes
    /// nothing away from zero.
    #[inline]
    pub fn copysign(self, sign: Self) -> Self {
        let re = self.re.copysign(sign.re);
        let flipped = (re < S::zero()) != (self.re < S::zero());
        Dual {
            re,
            eps: std::array::from_fn(|k| if flipped { -self.eps[k] } else { self.eps[k] }),
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.re >= other.re {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.re <= other.re {
            self
        } else {
            other
        }
    }
}
