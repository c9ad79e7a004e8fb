//! Conversions between this crate's fixed-size containers and nalgebra's
//! statically sized types.
//!
//! Works for every [`Scalar`], so dual-valued vectors convert too.

use nalgebra::{SMatrix, SVector};

use crate::math::{Matrix, Vector};
use crate::Scalar;

impl<F: Scalar, const N: usize> From<Vector<F, N>> for SVector<F, N> {
    fn from(v: Vector<F, N>) -> Self {
        SVector::from_fn(|i, _| v.el[i])
    }
}

impl<F: Scalar, const N: usize> From<SVector<F, N>> for Vector<F, N> {
    fn from(v: SVector<F, N>) -> Self {
        Vector {
            el: std::array::from_fn(|i| v[i]),
        }
    }
}

impl<F: Scalar, const R: usize, const C: usize> From<Matrix<F, R, C>> for SMatrix<F, R, C> {
    fn from(m: Matrix<F, R, C>) -> Self {
        SMatrix::from_fn(|r, c| m.el[r][c])
    }
}

impl<F: Scalar, const R: usize, const C: usize> From<SMatrix<F, R, C>> for Matrix<F, R, C> {
    fn from(m: SMatrix<F, R, C>) -> Self {
        Matrix {
            el: std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)])),
        }
    }
}
