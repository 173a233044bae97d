//! Closed-form binomial probabilities over arbitrary-precision integers and decimals.
//!
//! When every event shares the same probability, the number of occurrences is binomially
//! distributed and the tail can be summed directly. This serves as an independent check on
//! [exact](crate::exact), which makes no such assumption.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// `n!` as an arbitrary-precision integer.
pub fn factorial(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |product, i| product * i)
}

/// Binomial coefficient: the number of combinations obtained when sampling `r` items from a
/// set of `n` without replacement.
pub fn combinations(n: u64, r: u64) -> BigInt {
    assert!(n >= r, "n ({n}) < r ({r})");
    let r = r.min(n - r);
    (0..r).fold(BigInt::one(), |product, i| product * (n - i) / (i + 1))
}

/// Probability of `r` successes in `n` independent Bernoulli trials, given `p` probability of success.
pub fn binomial(n: u64, r: u64, p: &BigDecimal) -> BigDecimal {
    assert!(n >= r, "n ({n}) < r ({r})");
    let q = BigDecimal::one() - p;
    BigDecimal::from(combinations(n, r)) * powi(p, r) * powi(&q, n - r)
}

/// Probability of at least `threshold` successes in `n` independent Bernoulli trials, given `p`
/// probability of success.
pub fn binomial_tail(n: u64, threshold: i64, p: &BigDecimal) -> BigDecimal {
    if threshold > n as i64 {
        return BigDecimal::zero();
    }
    if threshold <= 0 {
        return BigDecimal::one();
    }
    (threshold as u64..=n).map(|r| binomial(n, r, p)).sum()
}

fn powi(base: &BigDecimal, exp: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &square;
        }
        exp >>= 1;
        if exp > 0 {
            square = &square * &square;
        }
    }
    result
}
