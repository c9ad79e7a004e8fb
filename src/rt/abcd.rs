//! Paraxial ray-transfer (ABCD) matrices acting on `(height, angle)`.

use crate::lens::Lens;
use crate::math::Matrix2x2;
use crate::Scalar;

/// Refraction at a surface of curvature `curvature` from index `n1` to `n2`.
pub fn refraction<F: Scalar>(n1: F, n2: F, curvature: F) -> Matrix2x2<F> {
    Matrix2x2::abcd(
        F::one(),
        F::zero(),
        curvature * (n1 - n2) / n2,
        n1 / n2,
    )
}

/// Free-space propagation over axial distance `t`.
pub fn propagation<F: Scalar>(t: F) -> Matrix2x2<F> {
    Matrix2x2::abcd(F::one(), t, F::zero(), F::one())
}

/// System matrix of the whole lens.
///
/// Every surface contributes a refraction followed by propagation over its
/// thickness, starting from index 1 in front of surface 0.
pub fn system<F: Scalar>(lens: &Lens<F>, wavelength: F) -> Matrix2x2<F> {
    let (m, _) = lens
        .iter()
        .fold((Matrix2x2::identity(), F::one()), |(m, n1), surface| {
            let n2 = surface.ior(wavelength);
            let m = refraction(n1, n2, surface.curvature()) * m;
            (propagation(surface.thickness) * m, n2)
        });
    m
}
