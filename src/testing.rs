//! Testing helpers.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use tinyrand::Rand;

pub fn dec(literal: &str) -> BigDecimal {
    BigDecimal::from_str(literal).unwrap()
}

pub fn repeat(literal: &str, times: usize) -> Vec<BigDecimal> {
    vec![dec(literal); times]
}

/// Asserts that `actual`, rounded to `digits` significant digits, equals `expected`.
pub fn assert_significant_eq(expected: &str, actual: &BigDecimal, digits: u64) {
    let rounded = actual.with_prec(digits);
    assert_eq!(
        dec(expected),
        rounded,
        "expected {expected} to {digits} significant digits, got {actual}"
    );
}

/// A probability drawn uniformly from `0.0000..=1.0000`, in steps of `0.0001`.
pub fn random_prob(rand: &mut impl Rand) -> BigDecimal {
    BigDecimal::new(BigInt::from(rand.next_u64() % 10_001), 4)
}

pub fn random_probs(rand: &mut impl Rand, len: usize) -> Vec<BigDecimal> {
    (0..len).map(|_| random_prob(rand)).collect()
}

/// Fisher–Yates shuffle of `items`.
pub fn shuffle<T>(items: &mut [T], rand: &mut impl Rand) {
    for i in (1..items.len()).rev() {
        let j = (rand.next_u64() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}
