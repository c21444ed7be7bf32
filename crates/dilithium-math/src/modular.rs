//! modular arithmetic in Z_q
//!
//! Plain signed reduction after every multiply and add. Products of two
//! values below Q are widened to i64 before they are reduced.

use crate::params::{HALF_Q, Q};

/// Reduces `x` to its representative in `[0, Q)`.
///
/// Accepts any `i64`, in particular the product of two Q-bounded values plus a
/// Q-bounded value.
#[inline]
pub fn reduce(x: i64) -> i32 {
    // not `%`: the truncating remainder of a negative `x` is negative
    x.rem_euclid(Q as i64) as i32
}

/// Reduces `x` to its centered representative in `[-(Q - 1) / 2, (Q - 1) / 2]`.
#[inline]
pub fn reduce_centered(x: i64) -> i32 {
    reduce(x + HALF_Q as i64) - HALF_Q
}

#[inline]
pub fn mod_add(a: i32, b: i32) -> i32 {
    reduce(a as i64 + b as i64)
}

#[inline]
pub fn mod_sub(a: i32, b: i32) -> i32 {
    reduce(a as i64 - b as i64)
}

#[inline]
pub fn mod_mul(a: i32, b: i32) -> i32 {
    reduce(a as i64 * b as i64)
}

/// `base^exp mod Q` by square and multiply
pub fn mod_pow(base: i32, mut exp: u64) -> i32 {
    let mut acc = 1i32;
    let mut base = reduce(base as i64);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mod_mul(acc, base);
        }
        base = mod_mul(base, base);
        exp >>= 1;
    }
    acc
}

/// Reverses the lowest `bits` bits of `k`.
#[inline]
pub fn bit_reverse(k: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    k.reverse_bits() >> (usize::BITS - bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_negative() {
        assert_eq!(reduce(-1), Q - 1);
        assert_eq!(reduce(-(Q as i64)), 0);
        assert_eq!(reduce(-(Q as i64) - 5), Q - 5);
    }

    #[test]
    fn reduce_wide_products() {
        let max = (Q as i64 - 1) * (Q as i64 - 1) + Q as i64 - 1;
        assert_eq!(reduce(max), reduce(1 + Q as i64 - 1));
        assert_eq!(reduce(-max), reduce(-(Q as i64)));
        assert_eq!(reduce(i64::MIN), ((i64::MIN % Q as i64) + Q as i64) as i32);
    }

    #[test]
    fn centered_bounds() {
        assert_eq!(reduce_centered(HALF_Q as i64), HALF_Q);
        assert_eq!(reduce_centered(HALF_Q as i64 + 1), -HALF_Q);
        assert_eq!(reduce_centered(Q as i64 - 1), -1);
        assert_eq!(reduce_centered(0), 0);
        assert_eq!(reduce_centered(-3), -3);
    }

    #[test]
    fn add_sub_mul() {
        assert_eq!(mod_add(Q - 1, 2), 1);
        assert_eq!(mod_sub(0, 1), Q - 1);
        assert_eq!(mod_mul(Q - 1, Q - 1), 1);
        assert_eq!(mod_mul(-1, 1), Q - 1);
    }

    #[test]
    fn pow_and_inverse() {
        assert_eq!(mod_pow(2, 0), 1);
        assert_eq!(mod_pow(2, 23), reduce(1 << 23));
        // fermat
        assert_eq!(mod_pow(256, (Q - 2) as u64), crate::params::N_INV);
    }

    #[test]
    fn bit_reverse_8() {
        assert_eq!(bit_reverse(1, 8), 128);
        assert_eq!(bit_reverse(0b0000_0110, 8), 0b0110_0000);
        assert_eq!(bit_reverse(255, 8), 255);
        assert_eq!(bit_reverse(5, 0), 0);
    }
}
