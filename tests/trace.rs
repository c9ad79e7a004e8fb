mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use common::{singlet, singlet_with_object};
use lore::rt::abcd;
use lore::{
    Dual, Geometrical, Glass, Intersector, Lens, Ray, Scalar, SequentialTrace, Surface,
    TraceError, Vector3,
};

const WAVELENGTH: f64 = 0.58;

fn axial_ray<F: Scalar>(height: F) -> Ray<F> {
    Ray::new(
        Vector3::xyz(F::zero(), height, F::lit(-10.0)),
        Vector3::xyz(F::zero(), F::zero(), F::one()),
    )
}

/// Height where `ray` crosses the z = 0 plane of its frame.
fn height_at_plane<F: Scalar>(ray: &Ray<F>) -> F {
    let t = -ray.origin.z() / ray.direction.z();
    ray.at(t).y()
}

/// The outgoing ray moved to the image plane and pointed back into the lens.
fn returning<F: Scalar>(ray: &Ray<F>) -> Ray<F> {
    let t = -ray.origin.z() / ray.direction.z();
    Ray::new(ray.at(t), -ray.direction)
}

#[test]
fn forward_trace_through_singlet() {
    let lens = singlet_with_object::<f64>();
    let out = SequentialTrace::new(WAVELENGTH)
        .trace(axial_ray(0.01), &lens)
        .unwrap();

    assert_eq!(out.origin.x(), 0.0);
    assert_relative_eq!(out.origin.y(), 0.0096568628, max_relative = 1e-7);
    assert_relative_eq!(out.origin.z(), -70.0000000933, max_relative = 1e-10);
    assert_relative_eq!(out.direction.y(), -0.000130186276, max_relative = 1e-6);
    assert_relative_eq!(out.direction.length(), 1.0, max_relative = 1e-12);
}

#[test]
fn paraxial_height_matches_abcd() {
    let lens = singlet_with_object::<f64>();
    let m = abcd::system(&lens, WAVELENGTH);
    let seq = SequentialTrace::new(WAVELENGTH);

    for &h in &[0.001, 0.01, 0.05] {
        let out = seq.trace(axial_ray(h), &lens).unwrap();
        assert_relative_eq!(height_at_plane(&out), m[(0, 0)] * h, max_relative = 1e-4);
        assert_relative_eq!(out.direction.y(), m[(1, 0)] * h, max_relative = 1e-4);
    }
}

#[test]
fn image_height_sensitivity_is_abcd_a() {
    let lens = singlet_with_object::<f64>().lift::<Dual<f64, 1>>();
    let seq = SequentialTrace::new(Dual::constant(WAVELENGTH));

    let out = seq.trace(axial_ray(Dual::variable(0.01, 0)), &lens).unwrap();
    let y = height_at_plane(&out);

    let a = abcd::system(&singlet::<f64>(), WAVELENGTH)[(0, 0)];
    assert_relative_eq!(y.re, 0.000543823, max_relative = 1e-4);
    assert_relative_eq!(y.derivative(0), a, max_relative = 1e-4);
}

#[test]
fn radius_sensitivity_matches_finite_difference() {
    let image_height = |r: f64| {
        let mut lens = singlet_with_object::<f64>();
        lens.surfaces[1].radius = r;
        let out = SequentialTrace::new(WAVELENGTH)
            .trace(axial_ray(1.0), &lens)
            .unwrap();
        height_at_plane(&out)
    };

    let mut lens = singlet_with_object::<f64>().lift::<Dual<f64, 1>>();
    lens.surfaces[1].radius = Dual::variable(60.0, 0);
    let out = SequentialTrace::new(Dual::constant(WAVELENGTH))
        .trace(axial_ray(Dual::constant(1.0)), &lens)
        .unwrap();
    let y = height_at_plane(&out);

    let h = 1e-5;
    let fd = (image_height(60.0 + h) - image_height(60.0 - h)) / (2.0 * h);
    assert_relative_eq!(y.re, image_height(60.0), max_relative = 1e-12);
    assert_relative_eq!(y.derivative(0), fd, max_relative = 1e-5);
}

#[test]
fn round_trip_through_whole_lens() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);

    for i in -19..=19 {
        let h = 0.5 * i as f64;
        let out = seq.trace(axial_ray(h), &lens).unwrap();
        let back = seq.trace_inverse(out.reversed(), &lens).unwrap();

        // back on surface 1, where the incoming ray first struck the lens
        let sag = 60.0 - (3600.0 - h * h).sqrt();
        assert_abs_diff_eq!(back.origin.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.origin.y(), h, epsilon = 1e-9);
        assert_abs_diff_eq!(back.origin.z(), sag, epsilon = 1e-9);

        assert_abs_diff_eq!(back.direction.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.direction.y(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.direction.z(), -1.0, epsilon = 1e-12);
    }
}

#[test]
fn round_trip_over_range_restores_ray() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);

    for &(h, slope) in &[(0.0, 0.0), (3.0, -0.05), (-7.5, 0.1), (12.0, 0.02)] {
        let sag = 60.0 - (3600.0_f64 - h * h).sqrt();
        let start = Ray::new(
            Vector3::xyz(0.0, h, sag),
            Vector3::xyz(0.0, slope, 1.0).normalized(),
        );

        let out = seq.trace_range(start, &lens, 1, 2).unwrap();
        let back = seq.trace_range(out.reversed(), &lens, 2, 1).unwrap();

        for k in 0..3 {
            assert_abs_diff_eq!(back.origin[k], start.origin[k], epsilon = 1e-9);
            assert_abs_diff_eq!(back.direction[k], -start.direction[k], epsilon = 1e-12);
        }
    }
}

#[test]
fn split_range_equals_full_trace() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);
    let ray = axial_ray(2.0);

    let full = seq.trace(ray, &lens).unwrap();

    let mut start = ray;
    start.origin[2] -= lens[0].thickness;
    let mid = seq.trace_range(start, &lens, 1, 1).unwrap();
    let split = seq.trace_range(mid, &lens, 2, 2).unwrap();
    assert_eq!(full, split);

    let whole = seq.trace_range(start, &lens, 1, 2).unwrap();
    assert_eq!(full, whole);
}

#[test]
fn inverse_range_equals_trace_inverse() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);
    let out = returning(&seq.trace(axial_ray(3.0), &lens).unwrap());

    let a = seq.trace_inverse(out, &lens).unwrap();
    let b = seq.trace_range(out, &lens, 2, 1).unwrap();
    assert_eq!(a, b);
}

#[test]
fn snell_at_flat_surface() {
    let lens = Lens::new(vec![
        Surface::new(0.0, 0.0, 0.0, false, Glass::air()),
        Surface::new(0.0, 10.0, 0.0, false, Glass::constant(1.5)),
    ]);
    let s = 30.0_f64.to_radians();
    let ray = Ray::new(Vector3::xyz(0.0, 0.0, -1.0), Vector3::xyz(0.0, s.sin(), s.cos()));

    let out = SequentialTrace::new(WAVELENGTH).trace(ray, &lens).unwrap();
    assert_relative_eq!(out.direction.y(), 0.5 / 1.5, max_relative = 1e-12);
    assert_relative_eq!(out.direction.length(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(out.origin.z(), -10.0, max_relative = 1e-12);
}

// ── Failures ──

#[test]
fn vignetted_by_checked_aperture() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);
    assert_eq!(
        seq.trace(axial_ray(22.0), &lens),
        Err(TraceError::Vignetted { surface: 1 })
    );

    let mut open = lens.clone();
    for s in &mut open.surfaces {
        s.check_aperture = false;
    }
    assert!(seq.trace(axial_ray(22.0), &open).is_ok());
}

#[test]
fn default_ray_runs_down_the_axis() {
    let ray = Ray::<f64>::default();
    assert_eq!(ray.origin, Vector3::xyz(0.0, 0.0, 0.0));
    assert_eq!(ray.direction, Vector3::xyz(0.0, 0.0, 1.0));

    let mut start = ray;
    start.origin[2] = -10.0;
    let out = SequentialTrace::new(WAVELENGTH)
        .trace(start, &singlet_with_object())
        .unwrap();
    assert_abs_diff_eq!(out.origin.y(), 0.0);
}

#[test]
fn total_internal_reflection() {
    let lens = Lens::new(vec![
        Surface::new(0.0, 10.0, 0.0, false, Glass::constant(1.7)),
        Surface::new(0.0, 5.0, 0.0, false, Glass::air()),
    ]);
    let a = 60.0_f64.to_radians();
    let ray = Ray::new(Vector3::xyz(0.0, 0.0, -10.0), Vector3::xyz(0.0, a.sin(), a.cos()));

    assert_eq!(
        SequentialTrace::new(WAVELENGTH).trace(ray, &lens),
        Err(TraceError::TotalInternalReflection { surface: 1 })
    );
}

#[test]
fn miss() {
    let lens = Lens::new(vec![
        Surface::new(0.0, 10.0, 0.0, false, Glass::air()),
        Surface::new(13.0, 5.0, 0.0, false, Glass::constant(1.5)),
    ]);
    let ray = Ray::new(Vector3::xyz(10.0, 10.0, 0.0), Vector3::xyz(0.0, 0.0, 1.0));

    assert_eq!(
        SequentialTrace::new(WAVELENGTH).trace(ray, &lens),
        Err(TraceError::Miss { surface: 1 })
    );
}

#[test]
fn invalid_ranges() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH);
    let ray = axial_ray(1.0);

    assert_eq!(
        seq.trace_range(ray, &lens, 0, 2),
        Err(TraceError::InvalidRange { first: 0, last: 2, len: 3 })
    );
    assert_eq!(
        seq.trace_range(ray, &lens, 1, 3),
        Err(TraceError::InvalidRange { first: 1, last: 3, len: 3 })
    );
    assert_eq!(
        seq.trace_range(ray, &lens, 2, 0),
        Err(TraceError::InvalidRange { first: 2, last: 0, len: 3 })
    );
}

#[test]
fn empty_lens() {
    let lens = Lens::<f64>::default();
    let seq = SequentialTrace::new(WAVELENGTH);
    assert_eq!(seq.trace(axial_ray(1.0), &lens), Err(TraceError::EmptyLens));
    assert_eq!(seq.trace_inverse(axial_ray(1.0), &lens), Err(TraceError::EmptyLens));
    assert_eq!(seq.trace_range(axial_ray(1.0), &lens, 1, 1), Err(TraceError::EmptyLens));
}

#[test]
fn object_surface_only() {
    let lens = Lens::new(vec![Surface::new(0.0, 10.0, 0.0, false, Glass::air())]);
    let out = SequentialTrace::new(WAVELENGTH).trace(axial_ray(1.0), &lens).unwrap();
    assert_eq!(out.origin, Vector3::xyz(0.0, 1.0, -20.0));
}

#[test]
fn error_messages_name_the_surface() {
    assert_eq!(
        TraceError::Vignetted { surface: 3 }.to_string(),
        "ray blocked by the aperture of surface 3"
    );
}

// ── Custom intersector ──

/// Treats every surface as its tangent plane.
struct Tangent;

impl Intersector<f64> for Tangent {
    fn intersect(&self, ray: &Ray<f64>, _surface: &Surface<f64>) -> Option<f64> {
        Geometrical.intersect(ray, &Surface::default())
    }
}

#[test]
fn with_intersector_swaps_the_solver() {
    let lens = singlet_with_object::<f64>();
    let seq = SequentialTrace::new(WAVELENGTH).with_intersector(Tangent);

    let out = seq.trace(axial_ray(1.0), &lens).unwrap();
    assert_abs_diff_eq!(out.origin.z(), -70.0, epsilon = 1e-12);

    let exact = SequentialTrace::new(WAVELENGTH)
        .trace(axial_ray(1.0), &lens)
        .unwrap();
    assert!((out.origin.z() - exact.origin.z()).abs() > 1e-6);
}
