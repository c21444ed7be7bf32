//! Number theoretic transform over Z_q, q = 8380417, for polynomials of
//! degree below 256, using plain signed reduction (no Montgomery form).

pub mod batch;
pub mod error;
pub mod modular;
pub mod ntt;
pub mod params;
pub mod poly;

pub use error::{NttError, Result};
pub use ntt::{BasicNTT, UnrolledNTT, NTT};
pub use params::{HALF_Q, N, N_INV, Q, ROOT, ZETAS};
