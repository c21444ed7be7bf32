//! trait for different realizations of NTT

use crate::error::{NttError, Result};
use crate::params::N;

/// trait for ntt transformations
///
/// Every realization must produce the same values: forward output in `[0, Q)`
/// and bit-reversed order, inverse output centered in `(-Q/2, Q/2]`.
pub trait NTT {
    /// ntt forward transformation
    fn forward(&self, a: &mut [i32; N]);

    /// ntt inverse transformation
    ///
    /// Inputs must satisfy `|a[i]| < Q`.
    fn inverse(&self, a: &mut [i32; N]);

    /// realization name
    fn name(&self) -> &'static str;

    /// Forward transformation of a slice, rejected unless it holds exactly
    /// N coefficients.
    fn try_forward(&self, a: &mut [i32]) -> Result<()> {
        let a = as_poly(a, self.name())?;
        self.forward(a);
        Ok(())
    }

    /// Inverse transformation of a slice, rejected unless it holds exactly
    /// N coefficients.
    fn try_inverse(&self, a: &mut [i32]) -> Result<()> {
        let a = as_poly(a, self.name())?;
        self.inverse(a);
        Ok(())
    }
}

fn as_poly<'a>(a: &'a mut [i32], engine: &'static str) -> Result<&'a mut [i32; N]> {
    let actual = a.len();
    <&mut [i32; N]>::try_from(a).map_err(|_| {
        tracing::warn!(engine, expected = N, actual, "rejected polynomial");
        NttError::InvalidLength {
            expected: N,
            actual,
        }
    })
}
