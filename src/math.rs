//! Fixed-size vectors and matrices generic over [`Scalar`].
//!
//! Sizes are const generics, so mismatched matrix products are rejected at
//! compile time and nothing here allocates.

use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::dual::Dual;
use crate::Scalar;

/// An `N`-component column vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<F, const N: usize> {
    pub el: [F; N],
}

pub type Vector3<F> = Vector<F, 3>;

impl<F: Scalar, const N: usize> Default for Vector<F, N> {
    fn default() -> Self {
        Vector {
            el: [F::zero(); N],
        }
    }
}

impl<F: Scalar, const N: usize> From<[F; N]> for Vector<F, N> {
    #[inline]
    fn from(el: [F; N]) -> Self {
        Vector { el }
    }
}

impl<F: Scalar, const N: usize> Vector<F, N> {
    #[inline]
    pub fn new(el: [F; N]) -> Self {
        Vector { el }
    }

    /// Every component set to `v`.
    #[inline]
    pub fn splat(v: F) -> Self {
        Vector { el: [v; N] }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        let mut sum = F::zero();
        for i in 0..N {
            sum += self.el[i] * other.el[i];
        }
        sum
    }

    #[inline]
    pub fn length_squared(&self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> F {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector yields non-finite components rather than a panic.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Vector {
            el: std::array::from_fn(|i| self.el[i] * other.el[i]),
        }
    }

    /// Apply `f` to every component, possibly changing the scalar type.
    #[inline]
    pub fn map<G, M: FnMut(F) -> G>(self, mut f: M) -> Vector<G, N> {
        Vector {
            el: self.el.map(&mut f),
        }
    }
}

impl<F: Scalar> Vector<F, 3> {
    #[inline]
    pub fn xyz(x: F, y: F, z: F) -> Self {
        Vector { el: [x, y, z] }
    }

    #[inline]
    pub fn x(&self) -> F {
        self.el[0]
    }

    #[inline]
    pub fn y(&self) -> F {
        self.el[1]
    }

    #[inline]
    pub fn z(&self) -> F {
        self.el[2]
    }
}

impl<F, const N: usize> Index<usize> for Vector<F, N> {
    type Output = F;
    #[inline]
    fn index(&self, i: usize) -> &F {
        &self.el[i]
    }
}

impl<F, const N: usize> IndexMut<usize> for Vector<F, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut F {
        &mut self.el[i]
    }
}

impl<F: Scalar, const N: usize> Add for Vector<F, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector {
            el: std::array::from_fn(|i| self.el[i] + rhs.el[i]),
        }
    }
}

impl<F: Scalar, const N: usize> Sub for Vector<F, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector {
            el: std::array::from_fn(|i| self.el[i] - rhs.el[i]),
        }
    }
}

impl<F: Scalar, const N: usize> Neg for Vector<F, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vector {
            el: std::array::from_fn(|i| -self.el[i]),
        }
    }
}

impl<F: Scalar, const N: usize> Mul<F> for Vector<F, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: F) -> Self {
        Vector {
            el: std::array::from_fn(|i| self.el[i] * rhs),
        }
    }
}

impl<F: Scalar, const N: usize> Div<F> for Vector<F, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: F) -> Self {
        self * (F::one() / rhs)
    }
}

impl<F: Scalar, const N: usize> AddAssign for Vector<F, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Scalar, const N: usize> SubAssign for Vector<F, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Scalar, const N: usize> MulAssign<F> for Vector<F, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: F) {
        *self = *self * rhs;
    }
}

impl<F: Scalar, const N: usize> DivAssign<F> for Vector<F, N> {
    #[inline]
    fn div_assign(&mut self, rhs: F) {
        *self = *self / rhs;
    }
}

// Scalar on the left: `2.0 * v`.
macro_rules! impl_scalar_lhs_mul {
    ($f:ty) => {
        impl<const N: usize> Mul<Vector<$f, N>> for $f {
            type Output = Vector<$f, N>;
            #[inline]
            fn mul(self, rhs: Vector<$f, N>) -> Vector<$f, N> {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<S: Scalar, const M: usize, const N: usize> Mul<Vector<Dual<S, M>, N>> for Dual<S, M> {
    type Output = Vector<Dual<S, M>, N>;
    #[inline]
    fn mul(self, rhs: Vector<Dual<S, M>, N>) -> Vector<Dual<S, M>, N> {
        rhs * self
    }
}

impl<F: Display, const N: usize> Display for Vector<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{}>{{ ", N)?;
        for (i, e) in self.el.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, " }}")
    }
}

/// A `R`×`C` matrix stored row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<F, const R: usize, const C: usize> {
    pub el: [[F; C]; R],
}

pub type Matrix2x2<F> = Matrix<F, 2, 2>;

impl<F: Scalar, const R: usize, const C: usize> Default for Matrix<F, R, C> {
    fn default() -> Self {
        Matrix {
            el: [[F::zero(); C]; R],
        }
    }
}

impl<F: Scalar, const R: usize, const C: usize> Matrix<F, R, C> {
    #[inline]
    pub fn from_rows(el: [[F; C]; R]) -> Self {
        Matrix { el }
    }

    /// Ones on the main diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        Matrix {
            el: std::array::from_fn(|row| {
                std::array::from_fn(|col| if row == col { F::one() } else { F::zero() })
            }),
        }
    }

    pub fn transpose(&self) -> Matrix<F, C, R> {
        Matrix {
            el: std::array::from_fn(|row| std::array::from_fn(|col| self.el[col][row])),
        }
    }

    pub fn map<G, M: FnMut(F) -> G>(self, mut f: M) -> Matrix<G, R, C> {
        Matrix {
            el: self.el.map(|row| row.map(&mut f)),
        }
    }
}

impl<F: Scalar> Matrix<F, 2, 2> {
    /// `[[a, b], [c, d]]`, the usual ray-transfer layout.
    #[inline]
    pub fn abcd(a: F, b: F, c: F, d: F) -> Self {
        Matrix { el: [[a, b], [c, d]] }
    }
}

impl<F, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<F, R, C> {
    type Output = F;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &F {
        &self.el[row][col]
    }
}

impl<F, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<F, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut F {
        &mut self.el[row][col]
    }
}

impl<F: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<F, C, K>>
    for Matrix<F, R, C>
{
    type Output = Matrix<F, R, K>;

    fn mul(self, rhs: Matrix<F, C, K>) -> Matrix<F, R, K> {
        Matrix {
            el: std::array::from_fn(|row| {
                std::array::from_fn(|col| {
                    let mut sum = F::zero();
                    for t in 0..C {
                        sum += self.el[row][t] * rhs.el[t][col];
                    }
                    sum
                })
            }),
        }
    }
}

impl<F: Scalar, const R: usize, const C: usize> Mul<Vector<F, C>> for Matrix<F, R, C> {
    type Output = Vector<F, R>;

    fn mul(self, rhs: Vector<F, C>) -> Vector<F, R> {
        Vector {
            el: std::array::from_fn(|row| {
                let mut sum = F::zero();
                for t in 0..C {
                    sum += self.el[row][t] * rhs.el[t];
                }
                sum
            }),
        }
    }
}

impl<F: Display, const R: usize, const C: usize> Display for Matrix<F, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{}x{}>{{", R, C)?;
        for row in &self.el {
            write!(f, "  ")?;
            for e in row {
                write!(f, "{}, ", e)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
