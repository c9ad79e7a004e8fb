//! First-order lens analysis.

mod paraxial;
mod petzval;

pub use paraxial::ParaxialAnalysis;
pub use petzval::{petzval_curvature, petzval_radius};
