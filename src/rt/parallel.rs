use rayon::prelude::*;

use crate::lens::Lens;
use crate::rt::error::Result;
use crate::rt::intersect::Intersector;
use crate::rt::{Ray, SequentialTrace};
use crate::Scalar;

impl<F: Scalar, I: Intersector<F> + Sync> SequentialTrace<F, I> {
    /// Trace a batch of object-space rays in parallel.
    ///
    /// Results are in the same order as `rays`.
    pub fn trace_par(&self, rays: &[Ray<F>], lens: &Lens<F>) -> Vec<Result<Ray<F>>> {
        rays.par_iter().map(|ray| self.trace(*ray, lens)).collect()
    }

    /// Parallel counterpart of [`trace_inverse`](SequentialTrace::trace_inverse).
    pub fn trace_inverse_par(&self, rays: &[Ray<F>], lens: &Lens<F>) -> Vec<Result<Ray<F>>> {
        rays.par_iter()
            .map(|ray| self.trace_inverse(*ray, lens))
            .collect()
    }
}
