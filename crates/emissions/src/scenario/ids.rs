//! Injected identifier and time sources.
//!
//! Scenario creation never reads the wall clock or a global counter
//! directly, so tests can pin both.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Prefix of every generated scenario id.
pub const SCENARIO_ID_PREFIX: &str = "scenario";

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

// ---------------------------------------------------------------------------
// Id generators
// ---------------------------------------------------------------------------

/// `scenario-1`, `scenario-2`, ...
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(SCENARIO_ID_PREFIX)
    }
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Continue numbering after `last` ids already issued.
    pub fn starting_after(mut self, last: u64) -> Self {
        self.next = last.saturating_add(1);
        self
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random 64-bit hex ids from a seeded ChaCha8 stream. The same seed always
/// yields the same sequence.
#[derive(Clone, Debug)]
pub struct SeededIds {
    rng: ChaCha8Rng,
}

impl SeededIds {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> String {
        let value: u64 = self.rng.gen();
        format!("{SCENARIO_ID_PREFIX}-{value:016x}")
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, movable by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn advance(&mut self, by: Duration) {
        self.0 += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
