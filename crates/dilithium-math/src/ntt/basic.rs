//! Basic implementation of NTT (Dilithium-compatible, no Montgomery form)
use super::schedule::{forward_schedule, inverse_schedule};
use super::trait_def::NTT;
use crate::modular::{reduce, reduce_centered};
use crate::params::{N, N_INV, Q, ZETAS};

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicNTT;

impl BasicNTT {
    pub fn new() -> Self {
        Self
    }
}

impl NTT for BasicNTT {
    fn forward(&self, a: &mut [i32; N]) {
        tracing::trace!(engine = self.name(), "forward ntt");

        for block in forward_schedule() {
            let zeta = ZETAS[block.zeta] as i64;
            let len = block.len;

            for j in block.start..block.start + len {
                let t = reduce(zeta * a[j + len] as i64);
                a[j + len] = reduce(a[j] as i64 - t as i64);
                a[j] = reduce(a[j] as i64 + t as i64);
            }
        }
    }

    fn inverse(&self, a: &mut [i32; N]) {
        tracing::trace!(engine = self.name(), "inverse ntt");
        debug_assert!(a.iter().all(|&x| x > -Q && x < Q));

        for block in inverse_schedule() {
            let zeta = -(ZETAS[block.zeta] as i64);
            let len = block.len;

            for j in block.start..block.start + len {
                let t = a[j];
                // left unreduced, bounded by N * (Q - 1) after the last stage
                a[j] = t + a[j + len];
                a[j + len] = reduce(zeta * (t as i64 - a[j + len] as i64));
            }
        }

        for x in a.iter_mut() {
            *x = reduce_centered(N_INV as i64 * *x as i64);
        }
    }

    fn name(&self) -> &'static str {
        "BasicNTT"
    }
}
