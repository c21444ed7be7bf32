//! transforms over many independent polynomials
//!
//! Each call only touches its own polynomial, so with the `parallel` feature
//! the batch is split across the rayon thread pool without synchronization.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::ntt::NTT;
use crate::params::N;

/// Forward transformation of every polynomial in `polys`.
pub fn forward_batch<E: NTT + Sync>(engine: &E, polys: &mut [[i32; N]]) {
    tracing::debug!(engine = engine.name(), count = polys.len(), "forward batch");

    #[cfg(feature = "parallel")]
    polys.par_iter_mut().for_each(|p| engine.forward(p));

    #[cfg(not(feature = "parallel"))]
    polys.iter_mut().for_each(|p| engine.forward(p));
}

/// Inverse transformation of every polynomial in `polys`.
pub fn inverse_batch<E: NTT + Sync>(engine: &E, polys: &mut [[i32; N]]) {
    tracing::debug!(engine = engine.name(), count = polys.len(), "inverse batch");

    #[cfg(feature = "parallel")]
    polys.par_iter_mut().for_each(|p| engine.inverse(p));

    #[cfg(not(feature = "parallel"))]
    polys.iter_mut().for_each(|p| engine.inverse(p));
}
