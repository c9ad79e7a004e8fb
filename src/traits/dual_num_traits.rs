use num_traits::{One, Zero};

use crate::dual::Dual;
use crate::Scalar;

impl<S: Scalar, const N: usize> Zero for Dual<S, N> {
    #[inline(always)]
    fn zero() -> Self {
        Dual::constant(S::zero())
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.re.is_zero()
    }
}

impl<S: Scalar, const N: usize> One for Dual<S, N> {
    #[inline(always)]
    fn one() -> Self {
        Dual::constant(S::one())
    }
}

impl<S: Scalar, const N: usize> std::iter::Sum for Dual<S, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
