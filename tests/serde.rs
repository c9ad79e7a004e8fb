#![cfg(feature = "serde")]

mod common;

use common::{singlet_with_object, BK7_SELLMEIER_B, BK7_SELLMEIER_C};
use lore::io::{LensSchema, SurfaceSchema, WeightedWavelength};
use lore::{Glass, Lens, Laurent, Sellmeier};

#[test]
fn roundtrip_lens_json() {
    let lens = singlet_with_object::<f64>();
    let json = serde_json::to_string(&lens).unwrap();
    let back: Lens<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(lens, back);
}

#[test]
fn roundtrip_glass_json() {
    let glasses = [
        Glass::from(Sellmeier::new(BK7_SELLMEIER_B, BK7_SELLMEIER_C)),
        Glass::from(Laurent::constant(1.5)),
        Glass::air(),
    ];
    for g in &glasses {
        let json = serde_json::to_string(g).unwrap();
        let back: Glass<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(*g, back);
    }
}

#[test]
fn roundtrip_schema_json() {
    let schema = LensSchema {
        name: "Singlet".into(),
        description: "test".into(),
        design_efl: 76.8,
        surfaces: vec![
            SurfaceSchema {
                thickness: 10.0,
                ..Default::default()
            },
            SurfaceSchema {
                radius: 60.0,
                thickness: 5.0,
                aperture: 20.0,
                check_aperture: true,
                glass_name: Some("N-BK7".into()),
            },
        ],
        wavelengths: vec![WeightedWavelength::new(0.58756, 1.0)],
        ..Default::default()
    };
    let json = serde_json::to_string(&schema).unwrap();
    let back: LensSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(schema, back);
}
