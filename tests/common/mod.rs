#![allow(dead_code)]

use lore::{Glass, Lens, Scalar, Surface};

// ─── Singlet ───────────────────────────────────────────────────────────────

/// Biconvex singlet, n = 1.7, both apertures checked at 20.
pub fn singlet<F: Scalar>() -> Lens<F> {
    Lens::new(vec![
        Surface::new(
            F::lit(60.0),
            F::lit(5.0),
            F::lit(20.0),
            true,
            Glass::constant(F::lit(1.7)),
        ),
        Surface::new(
            F::lit(-500.0),
            F::lit(70.0),
            F::lit(20.0),
            true,
            Glass::air(),
        ),
    ])
}

/// The singlet behind a flat object surface 10 units in front of it.
pub fn singlet_with_object<F: Scalar>() -> Lens<F> {
    let mut lens = Lens::new(vec![Surface::new(
        F::zero(),
        F::lit(10.0),
        F::zero(),
        false,
        Glass::air(),
    )]);
    lens.surfaces.extend(singlet::<F>().surfaces);
    lens
}

// ─── N-BK7 ─────────────────────────────────────────────────────────────────

pub const BK7_SELLMEIER_B: [f64; 3] = [1.03961212, 0.231792344, 1.01046945];
pub const BK7_SELLMEIER_C: [f64; 3] = [0.00600069867, 0.0200179144, 103.560653];
pub const BK7_LAURENT: [f64; 6] = [
    2.2718929,
    -1.0108077e-2,
    1.0592509e-2,
    2.0816965e-4,
    -7.6472538e-6,
    4.9240991e-7,
];
