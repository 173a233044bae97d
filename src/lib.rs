//! Exact probability that at least _N_ out of _M_ independent events occur, given the probability
//! of each event. Probabilities are arbitrary-precision decimals, so results for rare events do not
//! underflow and results for many events do not drift.

pub mod binomial;
pub mod exact;
pub mod file;
pub mod parse;
pub mod precision;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
