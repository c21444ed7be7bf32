//! number theoretic transform (ntt) realization

pub mod basic;
pub mod schedule;
pub mod trait_def;
pub mod unrolled;

pub use basic::BasicNTT;
pub use schedule::{forward_schedule, inverse_schedule, Block, ZetaCursor};
pub use trait_def::NTT;
pub use unrolled::UnrolledNTT;
