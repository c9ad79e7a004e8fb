//! Lens descriptions as read from a file, before glass names are resolved.

use crate::glass::Glass;
use crate::io::glass_catalog::GlassCatalog;
use crate::lens::{Lens, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedWavelength {
    /// Micrometers.
    pub wavelength: f64,
    pub weight: f64,
}

impl WeightedWavelength {
    pub fn new(wavelength: f64, weight: f64) -> Self {
        WeightedWavelength { wavelength, weight }
    }
}

/// A surface with its glass still referenced by name. `None` means air.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSchema {
    pub radius: f64,
    pub thickness: f64,
    pub aperture: f64,
    pub check_aperture: bool,
    pub glass_name: Option<String>,
}

impl SurfaceSchema {
    pub fn surface(&self, catalog: &GlassCatalog) -> Surface<f64> {
        let glass = self
            .glass_name
            .as_deref()
            .map_or_else(Glass::air, |name| catalog.glass(name));
        Surface::new(
            self.radius,
            self.thickness,
            self.aperture,
            self.check_aperture,
            glass,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LensSchema {
    pub name: String,
    pub description: String,
    pub design_efl: f64,
    pub entrance_beam_radius: f64,
    pub field_angle: f64,
    pub units: f64,
    pub surfaces: Vec<SurfaceSchema>,
    pub wavelengths: Vec<WeightedWavelength>,
}

impl LensSchema {
    /// Resolve glass names against `catalog`. Unknown names become air.
    pub fn lens(&self, catalog: &GlassCatalog) -> Lens<f64> {
        self.surfaces.iter().map(|s| s.surface(catalog)).collect()
    }

    /// The first wavelength listed, which lens files use as the primary one.
    pub fn primary_wavelength(&self) -> Option<f64> {
        self.wavelengths.first().map(|w| w.wavelength)
    }
}
