use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual::Dual;
use crate::Scalar;

impl<S: Scalar, const N: usize> Add for Dual<S, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] + rhs.eps[k]),
        }
    }
}

impl<S: Scalar, const N: usize> Sub for Dual<S, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] - rhs.eps[k]),
        }
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<S: Scalar, const N: usize> Mul for Dual<S, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] * rhs.re + rhs.eps[k] * self.re),
        }
    }
}

impl<S: Scalar, const N: usize> Div for Dual<S, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = S::one() / rhs.re;
        Dual {
            re: self.re * inv,
            eps: std::array::from_fn(|k| (self.eps[k] * rhs.re - rhs.eps[k] * self.re) * inv * inv),
        }
    }
}

impl<S: Scalar, const N: usize> Neg for Dual<S, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: std::array::from_fn(|k| -self.eps[k]),
        }
    }
}

impl<S: Scalar, const N: usize> AddAssign for Dual<S, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar, const N: usize> SubAssign for Dual<S, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar, const N: usize> MulAssign for Dual<S, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar, const N: usize> DivAssign for Dual<S, N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Comparisons see the primal value only.
impl<S: Scalar, const N: usize> PartialEq for Dual<S, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re
    }
}

impl<S: Scalar, const N: usize> PartialOrd for Dual<S, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

// Mixed ops: Dual<F, N> with primitive floats.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl<const N: usize> Add<$f> for Dual<$f, N> {
            type Output = Dual<$f, N>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f, N> {
                Dual {
                    re: self.re + rhs,
                    eps: self.eps,
                }
            }
        }

        impl<const N: usize> Add<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn add(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                Dual {
                    re: self + rhs.re,
                    eps: rhs.eps,
                }
            }
        }

        impl<const N: usize> Sub<$f> for Dual<$f, N> {
            type Output = Dual<$f, N>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f, N> {
                Dual {
                    re: self.re - rhs,
                    eps: self.eps,
                }
            }
        }

        impl<const N: usize> Sub<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn sub(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                Dual {
                    re: self - rhs.re,
                    eps: std::array::from_fn(|k| -rhs.eps[k]),
                }
            }
        }

        impl<const N: usize> Mul<$f> for Dual<$f, N> {
            type Output = Dual<$f, N>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f, N> {
                Dual {
                    re: self.re * rhs,
                    eps: std::array::from_fn(|k| self.eps[k] * rhs),
                }
            }
        }

        impl<const N: usize> Mul<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn mul(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                Dual {
                    re: self * rhs.re,
                    eps: std::array::from_fn(|k| self * rhs.eps[k]),
                }
            }
        }

        impl<const N: usize> Div<$f> for Dual<$f, N> {
            type Output = Dual<$f, N>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f, N> {
                let inv = 1.0 / rhs;
                Dual {
                    re: self.re * inv,
                    eps: std::array::from_fn(|k| self.eps[k] * inv),
                }
            }
        }

        impl<const N: usize> Div<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn div(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                let inv = 1.0 / rhs.re;
                Dual {
                    re: self * inv,
                    eps: std::array::from_fn(|k| -self * rhs.eps[k] * inv * inv),
                }
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);
