//! Exact probability of at least _N_ out of _M_ independent events occurring.
//!
//! The computation builds a table of the probabilities of _exactly_ `k` events occurring, adding
//! one event at a time. After all events are added, the cells from `n` to the end of the table are
//! summed. The table is updated in place, from the highest index down, since each cell depends on
//! itself and on the cell before it:
//!
//! ```text
//!        table[5]             table[6]             table[7]
//! (i=5)  p55                  p56                  0
//! (i=6)  p55*(1-p6)+p54*p6    p56*(1-p6)+p55*p6    p56*p6
//! ```
//!
//! Cells below `i - (M - n)` cannot reach a cell at or above `n` with the remaining events, so
//! they are left alone. This prunes the inner loop to at most `M - n` cells per event.

use std::time::Instant;

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use thiserror::Error;
use tracing::{debug, trace};

use crate::precision::Precision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub precision: Precision,
    pub prune: bool,
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.precision == Precision::Digits(0) {
            return Err(InvalidConfig::ZeroDigits);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            prune: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("precision must retain at least one significant digit")]
    ZeroDigits,
}

/// Probability that exactly `k` events have occurred, for every `k` from 0 to the number of events
/// added so far.
#[derive(Debug, Clone)]
pub struct ExactTable {
    cells: Vec<BigDecimal>,
    events: usize,
    updates: u64,
}
impl ExactTable {
    /// Allocates a table for up to `capacity` events. With no events added, zero occurrences are
    /// certain.
    pub fn new(capacity: usize) -> Self {
        let mut cells = vec![BigDecimal::zero(); capacity + 1];
        cells[0] = BigDecimal::one();
        Self {
            cells,
            events: 0,
            updates: 0,
        }
    }

    /// Folds in the next event with probability `p`. Cells `1..=lower` are not updated; they are
    /// assumed to no longer contribute to the cells of interest.
    pub fn add_event(&mut self, p: &BigDecimal, lower: usize, precision: &Precision) {
        let i = self.events;
        assert!(
            i + 1 < self.cells.len(),
            "table capacity of {} events exceeded",
            self.cells.len() - 1
        );
        let q = BigDecimal::one() - p;

        self.cells[i + 1] = precision.apply(&self.cells[i] * p);
        for j in (lower + 1..=i).rev() {
            let without_event = &self.cells[j] * &q;
            let with_event = &self.cells[j - 1] * p;
            self.cells[j] = precision.apply(without_event + with_event);
        }
        self.cells[0] = precision.apply(&self.cells[0] * &q);

        self.events += 1;
        self.updates += (i - lower.min(i)) as u64 + 2;
    }

    /// Probability of at least `n` events occurring among those added. Only meaningful when the
    /// cells from `n` onward have been maintained.
    pub fn tail_sum(&self, n: usize) -> BigDecimal {
        self.cells[n.min(self.cells.len())..].iter().sum()
    }

    #[inline]
    pub fn events(&self) -> usize {
        self.events
    }

    /// Number of cell assignments performed so far.
    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    #[inline]
    pub fn cells(&self) -> &[BigDecimal] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<BigDecimal> {
        self.cells
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    config: Config,
}
impl Engine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Probability that at least `n` of the independent events with the given `probabilities`
    /// occur.
    pub fn at_least_n(&self, n: isize, probabilities: &[BigDecimal]) -> BigDecimal {
        let events = probabilities.len();
        if n > events as isize {
            return BigDecimal::zero();
        }
        if n <= 0 {
            return BigDecimal::one();
        }
        let n = n as usize;

        let start_time = Instant::now();
        let width = events - n;
        let mut table = ExactTable::new(events);
        for (i, p) in probabilities.iter().enumerate() {
            let lower = if self.config.prune { i.saturating_sub(width) } else { 0 };
            trace!("event {i}: p={p}, lower={lower}");
            table.add_event(p, lower, &self.config.precision);
        }
        let prob = self.config.precision.apply(table.tail_sum(n));
        debug!(
            "at least {n} of {events} events: width: {width}, updates: {}, took: {:.3}s",
            table.updates(),
            start_time.elapsed().as_millis() as f64 / 1_000.
        );
        prob
    }

    /// Probabilities of exactly `k` events occurring, for `k` in `0..=M`. The table is never pruned.
    pub fn distribution(&self, probabilities: &[BigDecimal]) -> Vec<BigDecimal> {
        let mut table = ExactTable::new(probabilities.len());
        for p in probabilities {
            table.add_event(p, 0, &self.config.precision);
        }
        table.into_cells()
    }
}

impl TryFrom<Config> for Engine {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Probability that at least `n` of the independent events with the given `probabilities` occur,
/// using the default [Config].
pub fn at_least_n(n: isize, probabilities: &[BigDecimal]) -> BigDecimal {
    Engine::default().at_least_n(n, probabilities)
}
