//! Core identifier generator
//!
//! Split into modules for testability:
//! - `time` - Clock seam
//! - `random` - Randomness seam for the sequence field
//! - `state` - Combined atomic state for counter mode
//! - `wait` - Pacing while a counter millisecond is exhausted
//! - `generate` - ID generation logic

mod generate;
mod random;
mod state;
mod time;
mod wait;

use std::sync::atomic::AtomicU64;

use tracing::debug;

use crate::config::IdConfig;
use crate::error::IdError;
use crate::extractor::IdExtractor;
use crate::id::FlakeId;

pub use random::{RandSource, ThreadRandom};
pub use time::{SystemClock, TimeSource};

use state::State;

/// Snowflake identifier generator
///
/// Holds no per-caller state: the machine ID is supplied on every call, and in the
/// default random sequence mode nothing is mutated at all. Share one instance
/// between threads by reference or `Arc`.
#[derive(Debug)]
#[repr(align(64))]
pub struct IdGenerator<T = SystemClock, R = ThreadRandom> {
    // === Hot path fields ===
    pub(crate) state: AtomicU64,
    epoch: u64,
    clock: T,
    rng: R,

    // === Cold path fields ===
    pub config: IdConfig,
    pub extract: IdExtractor,
}

impl IdGenerator {
    /// Create with default configuration, the system clock and the thread RNG
    pub fn new() -> Self {
        Self::with_config(IdConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: IdConfig) -> Self {
        Self::with_sources(config, SystemClock, ThreadRandom)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource, R: RandSource> IdGenerator<T, R> {
    /// Create with custom configuration, clock and random source
    pub fn with_sources(config: IdConfig, clock: T, rng: R) -> Self {
        debug!(
            epoch = config.epoch(),
            sequence_mode = ?config.sequence_mode(),
            "created identifier generator"
        );
        Self {
            state: AtomicU64::new(State::UNCLAIMED.raw()),
            epoch: config.epoch(),
            clock,
            rng,
            config,
            extract: IdExtractor::new(config.epoch()),
        }
    }

    /// Read the clock and compute the offset from the epoch
    ///
    /// Fails when the offset is negative or exceeds the 41-bit field
    #[inline]
    pub(crate) fn timestamp(&self) -> Result<u64, IdError> {
        let now_ms = self.clock.unix_millis();
        match now_ms.checked_sub(self.epoch) {
            Some(timestamp) if timestamp <= FlakeId::MAX_TIMESTAMP => Ok(timestamp),
            _ => Err(IdError::TimestampOverflow {
                now_ms,
                epoch: self.epoch,
            }),
        }
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, machine_id: u16, sequence: u16) -> FlakeId {
        FlakeId::pack(timestamp, machine_id, sequence & FlakeId::MAX_SEQUENCE)
    }
}
