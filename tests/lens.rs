mod common;

use approx::assert_relative_eq;
use common::{singlet, singlet_with_object};
use lore::{Dual, Glass, Lens, Surface};

#[test]
fn surface_defaults() {
    let s = Surface::<f64>::default();
    assert!(s.is_flat());
    assert!(s.needs_aperture_solve());
    assert!(!s.check_aperture);
    assert!(s.glass.is_air());
    assert_eq!(s.curvature(), 0.0);
}

#[test]
fn curvature_and_index() {
    let s = Surface::new(-40.0_f64, 3.0, 12.0, true, Glass::constant(1.6));
    assert!(!s.is_flat());
    assert!(!s.needs_aperture_solve());
    assert_eq!(s.curvature(), -0.025);
    assert_relative_eq!(s.ior(0.55), 1.6, max_relative = 1e-14);
}

#[test]
fn lens_container() {
    let mut lens = singlet::<f64>();
    assert_eq!(lens.len(), 2);
    assert!(!lens.is_empty());
    assert_eq!(lens[0].radius, 60.0);
    assert_relative_eq!(lens.entry_ior(0.58), 1.7, max_relative = 1e-14);
    assert_eq!(lens.track_length(), 70.0);

    lens.push(Surface::default());
    assert_eq!(lens.len(), 3);

    assert_eq!(Lens::<f64>::default().entry_ior(0.58), 1.0);
}

#[test]
fn collect_into_lens() {
    let lens: Lens<f64> = singlet_with_object::<f64>().iter().copied().rev().collect();
    assert_eq!(lens[0].radius, -500.0);
    assert_eq!(lens[2].thickness, 10.0);
    assert_eq!((&lens).into_iter().count(), 3);
}

#[test]
fn lift_to_dual() {
    let lens = singlet_with_object::<f64>();
    let lifted = lens.lift::<Dual<f64, 3>>();
    assert_eq!(lifted.len(), lens.len());
    for (l, s) in lifted.iter().zip(lens.iter()) {
        assert_eq!(l.radius.re, s.radius);
        assert_eq!(l.thickness.re, s.thickness);
        assert_eq!(l.aperture.re, s.aperture);
        assert_eq!(l.check_aperture, s.check_aperture);
        assert_eq!(l.radius.eps, [0.0; 3]);
    }
    assert_relative_eq!(
        lifted[1].ior(Dual::constant(0.58)).re,
        lens[1].ior(0.58),
        max_relative = 1e-14
    );
}
