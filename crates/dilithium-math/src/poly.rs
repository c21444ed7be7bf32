//! products of polynomials in Z_q[X]/(X^n + 1)

use crate::modular::{mod_mul, reduce};
use crate::ntt::NTT;
use crate::params::{N, Q};

/// Pointwise product of two polynomials in evaluation order, in `[0, Q)`.
pub fn pointwise_mul(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    let mut c = [0i32; N];
    for ((c, &a), &b) in c.iter_mut().zip(a).zip(b) {
        *c = mod_mul(a, b);
    }
    c
}

/// Schoolbook negacyclic product, in `[0, Q)`.
///
/// Quadratic; serves as the coefficient-domain reference for `ntt_mul`.
pub fn negacyclic_mul(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    let mut acc = [0i64; N];
    for (i, &ai) in a.iter().enumerate() {
        let ai = reduce(ai as i64);
        for (j, &bj) in b.iter().enumerate() {
            let prod = mod_mul(ai, bj) as i64;
            // X^N = -1
            if i + j < N {
                acc[i + j] += prod;
            } else {
                acc[i + j - N] += Q as i64 - prod;
            }
        }
    }

    let mut c = [0i32; N];
    for (c, acc) in c.iter_mut().zip(acc) {
        *c = reduce(acc);
    }
    c
}

/// Negacyclic product through the transform; result is centered.
pub fn ntt_mul<E: NTT + ?Sized>(engine: &E, a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    let mut a_hat = *a;
    let mut b_hat = *b;
    engine.forward(&mut a_hat);
    engine.forward(&mut b_hat);

    let mut c = pointwise_mul(&a_hat, &b_hat);
    engine.inverse(&mut c);
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modular::reduce_centered;
    use crate::ntt::BasicNTT;

    fn monomial(degree: usize, coeff: i32) -> [i32; N] {
        let mut p = [0i32; N];
        p[degree] = coeff;
        p
    }

    #[test]
    fn wraps_with_negation() {
        let c = negacyclic_mul(&monomial(1, 1), &monomial(N - 1, 1));
        assert_eq!(c, monomial(0, Q - 1));

        let c = ntt_mul(&BasicNTT::new(), &monomial(1, 1), &monomial(N - 1, 1));
        assert_eq!(c, monomial(0, -1));
    }

    #[test]
    fn one_is_identity() {
        let a: [i32; N] = std::array::from_fn(|i| (i as i32 * 7) % 9 - 4);
        let c = ntt_mul(&BasicNTT::new(), &a, &monomial(0, 1));
        assert_eq!(c, a);
    }

    #[test]
    fn transform_matches_schoolbook() {
        let a: [i32; N] = std::array::from_fn(|i| (i as i32 * 5) % 9 - 4);
        let b: [i32; N] = std::array::from_fn(|i| (i as i32 * 11 + 3) % 9 - 4);

        let expected = negacyclic_mul(&a, &b).map(|x| reduce_centered(x as i64));
        assert_eq!(ntt_mul(&BasicNTT::new(), &a, &b), expected);
    }

    #[test]
    fn pointwise_is_reduced() {
        let a = [Q - 1; N];
        let b = [-(Q - 1); N];
        assert!(pointwise_mul(&a, &b).iter().all(|&x| x == Q - 1));
    }
}
