use crate::math::Vector3;
use crate::Scalar;

/// A ray in some surface's local frame.
///
/// The direction is not normalized here; intersection and refraction expect
/// a unit direction, so normalize before tracing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<F> {
    pub origin: Vector3<F>,
    pub direction: Vector3<F>,
}

impl<F: Scalar> Default for Ray<F> {
    /// At the origin, heading along +z.
    fn default() -> Self {
        Ray {
            origin: Vector3::default(),
            direction: Vector3::xyz(F::zero(), F::zero(), F::one()),
        }
    }
}

impl<F: Scalar> Ray<F> {
    #[inline]
    pub fn new(origin: Vector3<F>, direction: Vector3<F>) -> Self {
        Ray { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: F) -> Vector3<F> {
        self.origin + self.direction * t
    }

    /// Same origin, reversed direction.
    pub fn reversed(&self) -> Self {
        Ray {
            origin: self.origin,
            direction: -self.direction,
        }
    }

    /// Translate the origin along the optical axis, i.e. re-express the ray in
    /// a frame whose vertex sits `dz` further along z.
    #[inline]
    pub(crate) fn shifted(mut self, dz: F) -> Self {
        self.origin[2] -= dz;
        self
    }
}
