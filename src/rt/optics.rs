//! Vector forms of the refraction law.

use crate::math::Vector3;
use crate::Scalar;

/// Refract unit `incident` at a surface with unit `normal` facing against it.
///
/// `eta` is the ratio `n₁/n₂`. Returns `None` on total internal reflection.
#[inline]
pub fn refract<F: Scalar>(incident: Vector3<F>, normal: Vector3<F>, eta: F) -> Option<Vector3<F>> {
    let n_dot_i = normal.dot(&incident);
    let k = F::one() - eta.sqr() * (F::one() - n_dot_i.sqr());
    if k < F::zero() {
        return None;
    }
    Some(incident * eta - normal * (eta * n_dot_i + k.sqrt()))
}

/// `n` if it points the same way as `d`, `-n` otherwise.
#[inline]
pub fn face_forward<F: Scalar>(n: Vector3<F>, d: Vector3<F>) -> Vector3<F> {
    if n.dot(&d) > F::zero() {
        n
    } else {
        -n
    }
}
