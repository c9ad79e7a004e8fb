//! Sequential surface-by-surface tracing.
//!
//! A trace is a fold over surface indices. Each step takes the ray in the
//! current surface's local frame, intersects, clips against the aperture,
//! refracts, and hands the ray on in the next frame. The first failure ends
//! the fold.

use crate::lens::{Lens, Surface};
use crate::math::Vector3;
use crate::rt::error::{Result, TraceError};
use crate::rt::intersect::{Geometrical, Intersector};
use crate::rt::optics::{face_forward, refract};
use crate::rt::Ray;
use crate::Scalar;

/// Traces single rays through a [`Lens`] at one wavelength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialTrace<F, I = Geometrical> {
    /// Wavelength in micrometers.
    pub wavelength: F,
    pub intersector: I,
}

impl<F: Scalar> SequentialTrace<F> {
    pub fn new(wavelength: F) -> Self {
        SequentialTrace {
            wavelength,
            intersector: Geometrical,
        }
    }
}

impl<F: Scalar, I: Intersector<F>> SequentialTrace<F, I> {
    /// Swap in a different surface solver.
    pub fn with_intersector<J: Intersector<F>>(self, intersector: J) -> SequentialTrace<F, J> {
        SequentialTrace {
            wavelength: self.wavelength,
            intersector,
        }
    }

    /// Trace a ray given in object space through every surface.
    ///
    /// The ray is expressed in surface 0's frame. On success the returned ray
    /// sits in the frame that follows the last surface.
    pub fn trace(&self, ray: Ray<F>, lens: &Lens<F>) -> Result<Ray<F>> {
        let object = lens.surfaces.first().ok_or(TraceError::EmptyLens)?;
        let ray = ray.shifted(object.thickness);
        if lens.len() == 1 {
            return Ok(ray);
        }
        self.forward(ray, lens, 1, lens.len() - 1)
    }

    /// Trace from the image side back to object space.
    ///
    /// The ray is given in the frame that follows the last surface, travelling
    /// towards -z. On success it is in surface 1's frame.
    pub fn trace_inverse(&self, ray: Ray<F>, lens: &Lens<F>) -> Result<Ray<F>> {
        if lens.is_empty() {
            return Err(TraceError::EmptyLens);
        }
        if lens.len() == 1 {
            return Ok(ray);
        }
        self.inverse(ray, lens, lens.len() - 1, 1)
    }

    /// Trace through surfaces `first..=last`.
    ///
    /// `first <= last` traces forward with the ray in surface `first`'s
    /// frame. `first > last` traces backwards with the ray in the frame
    /// following surface `first`. Surface 0 is never crossed: both ends must
    /// lie in `1..lens.len()`.
    pub fn trace_range(
        &self,
        ray: Ray<F>,
        lens: &Lens<F>,
        first: usize,
        last: usize,
    ) -> Result<Ray<F>> {
        if lens.is_empty() {
            return Err(TraceError::EmptyLens);
        }
        let len = lens.len();
        if first == 0 || last == 0 || first >= len || last >= len {
            return Err(TraceError::InvalidRange { first, last, len });
        }

        if first <= last {
            self.forward(ray, lens, first, last)
        } else {
            self.inverse(ray, lens, first, last)
        }
    }

    fn forward(&self, ray: Ray<F>, lens: &Lens<F>, first: usize, last: usize) -> Result<Ray<F>> {
        let n_first = lens[first - 1].ior(self.wavelength);

        let (ray, _) = (first..=last).try_fold((ray, n_first), |(ray, n1), i| {
            let surface = &lens[i];
            let n2 = surface.ior(self.wavelength);
            let ray = self.cross(ray, surface, i, n1 / n2)?;
            Ok::<_, TraceError>((ray.shifted(surface.thickness), n2))
        })?;

        Ok(ray)
    }

    fn inverse(&self, ray: Ray<F>, lens: &Lens<F>, first: usize, last: usize) -> Result<Ray<F>> {
        let n_first = lens[first].ior(self.wavelength);

        let (ray, _) = (last..=first).rev().try_fold((ray, n_first), |(ray, n2), i| {
            let surface = &lens[i];
            let n1 = lens[i - 1].ior(self.wavelength);
            let ray = ray.shifted(-surface.thickness);
            let ray = self.cross(ray, surface, i, n2 / n1)?;
            Ok::<_, TraceError>((ray, n1))
        })?;

        Ok(ray)
    }

    /// Intersect, clip and refract at one surface. The ray stays in the
    /// surface's frame.
    fn cross(&self, ray: Ray<F>, surface: &Surface<F>, index: usize, eta: F) -> Result<Ray<F>> {
        let t = self
            .intersector
            .intersect(&ray, surface)
            .ok_or(TraceError::Miss { surface: index })?;
        let hit = ray.at(t);

        if surface.check_aperture && hit.x().sqr() + hit.y().sqr() > surface.aperture.sqr() {
            return Err(TraceError::Vignetted { surface: index });
        }

        let d = ray.direction;
        let normal = if surface.is_flat() {
            Vector3::xyz(F::zero(), F::zero(), -F::one().copysign(d.z()))
        } else {
            let center = Vector3::xyz(F::zero(), F::zero(), surface.radius);
            -face_forward((hit - center).normalized(), d)
        };

        let direction = refract(d, normal, eta)
            .ok_or(TraceError::TotalInternalReflection { surface: index })?;

        Ok(Ray::new(hit, direction))
    }
}
