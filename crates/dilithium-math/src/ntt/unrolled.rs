//! Manual loop unrolling implementation of NTT
//!
//! optimizations:
//! - manual loop unrolling (4x) for stages with len >= 4
//! - inline butterfly operations
//! - twiddle loaded once per block
//!
//! Output is bit-identical to `BasicNTT`.

use super::schedule::{forward_schedule, inverse_schedule};
use super::trait_def::NTT;
use crate::modular::{reduce, reduce_centered};
use crate::params::{N, N_INV, Q, ZETAS};

#[derive(Debug, Clone, Copy)]
pub struct UnrolledNTT {
    twiddles: &'static [i32; N],
}

impl Default for UnrolledNTT {
    fn default() -> Self {
        Self::new()
    }
}

impl UnrolledNTT {
    pub fn new() -> Self {
        Self { twiddles: &ZETAS }
    }

    #[inline(always)]
    fn butterfly(a: &mut [i32; N], j: usize, len: usize, zeta: i64) {
        let t = reduce(zeta * a[j + len] as i64) as i64;
        a[j + len] = reduce(a[j] as i64 - t);
        a[j] = reduce(a[j] as i64 + t);
    }

    #[inline(always)]
    fn inverse_butterfly(a: &mut [i32; N], j: usize, len: usize, zeta: i64) {
        let t = a[j];
        a[j] = t + a[j + len];
        a[j + len] = reduce(zeta * (t as i64 - a[j + len] as i64));
    }
}

impl NTT for UnrolledNTT {
    fn forward(&self, a: &mut [i32; N]) {
        tracing::trace!(engine = self.name(), "forward ntt");

        for block in forward_schedule() {
            let zeta = self.twiddles[block.zeta] as i64;
            let len = block.len;
            let end = block.start + len;
            let mut j = block.start;

            while j + 4 <= end {
                Self::butterfly(a, j, len, zeta);
                Self::butterfly(a, j + 1, len, zeta);
                Self::butterfly(a, j + 2, len, zeta);
                Self::butterfly(a, j + 3, len, zeta);
                j += 4;
            }

            // len < 4
            while j < end {
                Self::butterfly(a, j, len, zeta);
                j += 1;
            }
        }
    }

    fn inverse(&self, a: &mut [i32; N]) {
        tracing::trace!(engine = self.name(), "inverse ntt");
        debug_assert!(a.iter().all(|&x| x > -Q && x < Q));

        for block in inverse_schedule() {
            let zeta = -(self.twiddles[block.zeta] as i64);
            let len = block.len;
            let end = block.start + len;
            let mut j = block.start;

            while j + 4 <= end {
                Self::inverse_butterfly(a, j, len, zeta);
                Self::inverse_butterfly(a, j + 1, len, zeta);
                Self::inverse_butterfly(a, j + 2, len, zeta);
                Self::inverse_butterfly(a, j + 3, len, zeta);
                j += 4;
            }

            while j < end {
                Self::inverse_butterfly(a, j, len, zeta);
                j += 1;
            }
        }

        // Final normalization
        let f = N_INV as i64;
        for chunk in a.chunks_exact_mut(4) {
            chunk[0] = reduce_centered(f * chunk[0] as i64);
            chunk[1] = reduce_centered(f * chunk[1] as i64);
            chunk[2] = reduce_centered(f * chunk[2] as i64);
            chunk[3] = reduce_centered(f * chunk[3] as i64);
        }
    }

    fn name(&self) -> &'static str {
        "UnrolledNTT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrolled_roundtrip() {
        let ntt = UnrolledNTT::new();
        let mut poly = [0i32; N];

        for (i, x) in poly.iter_mut().enumerate().take(8) {
            *x = (i as i32) + 1;
        }

        let original = poly;
        ntt.forward(&mut poly);
        ntt.inverse(&mut poly);

        assert_eq!(poly, original, "Unrolled NTT roundtrip failed");
    }

    #[test]
    fn test_unrolled_full() {
        let ntt = UnrolledNTT::new();
        let mut poly = [0i32; N];

        for (i, x) in poly.iter_mut().enumerate() {
            *x = (i as i32 * 32_749) % Q - Q / 2;
        }

        let original = poly;
        ntt.forward(&mut poly);
        ntt.inverse(&mut poly);

        assert_eq!(poly, original, "Unrolled NTT full roundtrip failed");
    }

    #[test]
    fn compare_with_basic() {
        use crate::ntt::BasicNTT;

        let basic_ntt = BasicNTT::new();
        let unrolled_ntt = UnrolledNTT::new();

        let mut poly1 = [0i32; N];
        for (i, x) in poly1.iter_mut().enumerate() {
            *x = (i as i32 * 17) % 9 - 4;
        }
        let mut poly2 = poly1;

        basic_ntt.forward(&mut poly1);
        unrolled_ntt.forward(&mut poly2);

        assert_eq!(poly1, poly2, "forward transforms don't match");

        basic_ntt.inverse(&mut poly1);
        unrolled_ntt.inverse(&mut poly2);

        assert_eq!(poly1, poly2, "inverse transforms don't match");
    }
}
