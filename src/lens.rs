//! Lens prescriptions: an ordered list of refracting surfaces.

use std::ops::Index;

use crate::glass::Glass;
use crate::Scalar;

/// One refracting surface, described in its own local frame with the vertex
/// at the origin and the optical axis along +z.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface<F> {
    /// Radius of curvature, exactly zero for a flat surface.
    pub radius: F,
    /// Axial distance to the next surface.
    pub thickness: F,
    /// Clear aperture radius. Zero means the aperture is still to be solved for.
    pub aperture: F,
    /// Whether rays outside `aperture` are vignetted.
    pub check_aperture: bool,
    /// Material on the image side of the surface.
    pub glass: Glass<F>,
}

impl<F: Scalar> Default for Surface<F> {
    fn default() -> Self {
        Surface {
            radius: F::zero(),
            thickness: F::zero(),
            aperture: F::zero(),
            check_aperture: false,
            glass: Glass::air(),
        }
    }
}

impl<F: Scalar> Surface<F> {
    pub fn new(radius: F, thickness: F, aperture: F, check_aperture: bool, glass: Glass<F>) -> Self {
        Surface {
            radius,
            thickness,
            aperture,
            check_aperture,
            glass,
        }
    }

    #[inline]
    pub fn ior(&self, wavelength: F) -> F {
        self.glass.ior(wavelength)
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.radius == F::zero()
    }

    pub fn needs_aperture_solve(&self) -> bool {
        self.aperture == F::zero()
    }

    #[inline]
    pub fn curvature(&self) -> F {
        if self.is_flat() {
            F::zero()
        } else {
            F::one() / self.radius
        }
    }

    /// Convert to another scalar with the same primal type; see [`Glass::lift`].
    pub fn lift<T: Scalar<Float = F::Float>>(&self) -> Surface<T> {
        Surface {
            radius: T::from_f(self.radius.detach()),
            thickness: T::from_f(self.thickness.detach()),
            aperture: T::from_f(self.aperture.detach()),
            check_aperture: self.check_aperture,
            glass: self.glass.lift(),
        }
    }
}

/// A sequential lens. Surface 0 is the object-space reference: its thickness
/// is the object distance and its glass the medium in front of surface 1.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lens<F> {
    pub surfaces: Vec<Surface<F>>,
}

impl<F: Scalar> Lens<F> {
    pub fn new(surfaces: Vec<Surface<F>>) -> Self {
        Lens { surfaces }
    }

    pub fn push(&mut self, surface: Surface<F>) {
        self.surfaces.push(surface);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Surface<F>> {
        self.surfaces.iter()
    }

    /// Index of the object-space medium, or 1 for an empty lens.
    pub fn entry_ior(&self, wavelength: F) -> F {
        self.surfaces
            .first()
            .map_or_else(F::one, |s| s.ior(wavelength))
    }

    /// Sum of all thicknesses after the object surface.
    pub fn track_length(&self) -> F {
        self.surfaces
            .iter()
            .skip(1)
            .fold(F::zero(), |acc, s| acc + s.thickness)
    }

    pub fn lift<T: Scalar<Float = F::Float>>(&self) -> Lens<T> {
        Lens {
            surfaces: self.surfaces.iter().map(|s| s.lift()).collect(),
        }
    }
}

impl<F> Index<usize> for Lens<F> {
    type Output = Surface<F>;

    fn index(&self, i: usize) -> &Surface<F> {
        &self.surfaces[i]
    }
}

impl<F: Scalar> FromIterator<Surface<F>> for Lens<F> {
    fn from_iter<I: IntoIterator<Item = Surface<F>>>(iter: I) -> Self {
        Lens {
            surfaces: iter.into_iter().collect(),
        }
    }
}

impl<'a, F> IntoIterator for &'a Lens<F> {
    type Item = &'a Surface<F>;
    type IntoIter = std::slice::Iter<'a, Surface<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces.iter()
    }
}
