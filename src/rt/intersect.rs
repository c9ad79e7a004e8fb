use crate::lens::Surface;
use crate::math::Vector3;
use crate::rt::Ray;
use crate::Scalar;

/// Finds where a ray meets a surface.
///
/// Both are given in the surface's local frame: vertex at the origin,
/// optical axis along z. Returns the ray parameter of the hit, or `None` if
/// the ray misses.
///
/// For curved surfaces this is the first hit with `t >= 0`, and an origin
/// lying on the surface gives `t = 0`. A plane yields its closed-form
/// parameter as is, which is negative when the plane lies behind the origin.
pub trait Intersector<F: Scalar> {
    fn intersect(&self, ray: &Ray<F>, surface: &Surface<F>) -> Option<F>;
}

/// Closed-form intersection with planes and spheres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometrical;

impl<F: Scalar> Intersector<F> for Geometrical {
    fn intersect(&self, ray: &Ray<F>, surface: &Surface<F>) -> Option<F> {
        let o = ray.origin;
        let d = ray.direction;

        if surface.is_flat() {
            if d.z() == F::zero() {
                return None;
            }
            return Some(-o.z() / d.z());
        }

        // t² - 2a·t + b = 0, where b = |o - c|² - R² for the center c
        let r = surface.radius;
        let a = d.z() * r - o.dot(&d);
        let b = o.length_squared() - F::lit(2.0) * o.z() * r;

        // Origin on the sphere up to the rounding of a frame shift, as when
        // an inverse trace starts at the stored hit of a forward trace.
        let center = Vector3::xyz(F::zero(), F::zero(), r);
        let distance = b / ((o - center).length() + r.abs());
        let tolerance = F::lit(64.0) * F::epsilon() * (o.length() + r.abs());
        if distance.abs() <= tolerance {
            return Some(F::zero());
        }

        let disc = a.sqr() - b;
        if disc < F::zero() {
            return None;
        }

        let root = disc.sqrt();
        let mut t = b / (a + root);
        if t < F::zero() {
            t = b / (a - root);
        }
        if t < F::zero() {
            return None;
        }
        Some(t)
    }
}
