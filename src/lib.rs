//! Sequential lens ray tracing, written once against [`Scalar`] and usable
//! with plain floats or forward-mode [`Dual`] numbers for exact derivatives
//! of trace results with respect to lens or ray parameters.

pub mod analysis;
pub mod dual;
pub mod float;
pub mod glass;
pub mod io;
pub mod lens;
pub mod math;
pub mod rt;
pub mod scalar;
mod traits;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_support;

pub use analysis::{petzval_curvature, petzval_radius, ParaxialAnalysis};
pub use dual::Dual;
pub use float::Float;
pub use glass::{Glass, Laurent, Sellmeier};
pub use lens::{Lens, Surface};
pub use math::{Matrix, Matrix2x2, Vector, Vector3};
pub use rt::{Geometrical, Intersector, Ray, SequentialTrace, TraceError};
pub use scalar::{detach, Scalar};

/// Forward-mode dual numbers over `f64` with `N` gradient lanes.
pub type Dual64<const N: usize> = Dual<f64, N>;
/// Forward-mode dual numbers over `f32` with `N` gradient lanes.
pub type Dual32<const N: usize> = Dual<f32, N>;
