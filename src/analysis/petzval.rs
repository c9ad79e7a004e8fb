use crate::lens::Lens;
use crate::Scalar;

/// Petzval sum `Σ κᵢ(n₁ − n₂)/(n₁·n₂)` over all surfaces, with index 1 in
/// front of surface 0.
pub fn petzval_curvature<F: Scalar>(lens: &Lens<F>, wavelength: F) -> F {
    let (sum, _) = lens
        .iter()
        .fold((F::zero(), F::one()), |(sum, n1), surface| {
            let n2 = surface.ior(wavelength);
            (sum + surface.curvature() * (n1 - n2) / (n1 * n2), n2)
        });
    sum
}

/// Radius of the Petzval surface, or `None` for a flat field.
pub fn petzval_radius<F: Scalar>(lens: &Lens<F>, wavelength: F) -> Option<F> {
    let curvature = petzval_curvature(lens, wavelength);
    if curvature == F::zero() {
        None
    } else {
        Some(F::one() / curvature)
    }
}
