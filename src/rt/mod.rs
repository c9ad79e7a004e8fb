//! Ray tracing: rays, surface intersection, refraction and sequential traces.

pub mod abcd;
mod error;
mod intersect;
mod optics;
mod ray;
mod trace;

#[cfg(feature = "parallel")]
mod parallel;

pub use error::{Result, TraceError};
pub use intersect::{Geometrical, Intersector};
pub use optics::{face_forward, refract};
pub use ray::Ray;
pub use trace::SequentialTrace;
