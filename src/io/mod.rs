//! Readers for lens description files and glass catalogs.

mod cursor;
mod error;
pub mod glass_catalog;
pub mod lens_reader;
pub mod lexer;
mod schema;

pub use error::{Position, ReadError, Result};
pub use glass_catalog::{CatalogEntry, GlassCatalog};
pub use lens_reader::LensReader;
pub use schema::{LensSchema, SurfaceSchema, WeightedWavelength};
