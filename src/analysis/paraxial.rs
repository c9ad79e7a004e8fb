use crate::lens::Lens;
use crate::math::Matrix2x2;
use crate::rt::abcd;
use crate::Scalar;

/// First-order properties derived from the system ABCD matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParaxialAnalysis<F> {
    /// Effective focal length, `-1/C`.
    pub efl: F,
    /// Distance from the last surface's reference plane to the paraxial
    /// focus, `A/-C`.
    pub focal_shift: F,
    /// The system matrix the values were read from.
    pub matrix: Matrix2x2<F>,
}

impl<F: Scalar> ParaxialAnalysis<F> {
    pub fn new(lens: &Lens<F>, wavelength: F) -> Self {
        let matrix = abcd::system(lens, wavelength);
        let c = matrix[(1, 0)];
        ParaxialAnalysis {
            efl: F::one() / -c,
            focal_shift: matrix[(0, 0)] / -c,
            matrix,
        }
    }

    /// Back focal distance measured from the last surface vertex.
    pub fn back_focal_distance(&self, lens: &Lens<F>) -> F {
        lens.surfaces
            .last()
            .map_or(self.focal_shift, |s| s.thickness + self.focal_shift)
    }
}
