#![allow(dead_code)]

use lore::{Glass, Lens, Ray, Scalar, Surface, Vector3};

/// Cooke triplet behind a flat object surface.
pub fn triplet<F: Scalar>() -> Lens<F> {
    let s = |r: f64, t: f64, ap: f64, n: Option<f64>| {
        Surface::new(
            F::lit(r),
            F::lit(t),
            F::lit(ap),
            ap > 0.0,
            n.map_or_else(Glass::air, |n| Glass::constant(F::lit(n))),
        )
    };
    Lens::new(vec![
        s(0.0, 10.0, 0.0, None),
        s(22.0, 3.3, 10.0, Some(1.62)),
        s(-435.0, 4.8, 10.0, None),
        s(-22.2, 1.0, 8.0, Some(1.62)),
        s(20.3, 4.8, 8.0, None),
        s(79.7, 2.9, 9.0, Some(1.62)),
        s(-18.4, 42.0, 9.0, None),
    ])
}

/// `n` axis-parallel rays spread evenly over `[-half_height, half_height]` in y.
pub fn fan<F: Scalar>(n: usize, half_height: f64) -> Vec<Ray<F>> {
    (0..n)
        .map(|i| {
            let y = -half_height + 2.0 * half_height * i as f64 / (n - 1) as f64;
            Ray::new(
                Vector3::xyz(F::zero(), F::lit(y), F::zero()),
                Vector3::xyz(F::zero(), F::zero(), F::one()),
            )
        })
        .collect()
}
