//! IdConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{IdConfig, SequenceMode};
use crate::error::IdConfigError;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: u64 = 1_293_840_000_000; // January 1, 2011 UTC
pub(super) const DEFAULT_SEQUENCE_MODE: SequenceMode = SequenceMode::Random;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for IdConfig
#[derive(Debug)]
pub struct IdConfigBuilder {
    pub(super) epoch: u64,
    pub(super) sequence_mode: SequenceMode,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl IdConfigBuilder {
    /// Create a new IdConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            sequence_mode: DEFAULT_SEQUENCE_MODE,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch timestamp in milliseconds
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the epoch from a point in time, which must not precede 1970-01-01
    pub fn epoch_datetime(mut self, epoch: DateTime<Utc>) -> Result<Self, IdConfigError> {
        let millis = epoch.timestamp_millis();
        self.epoch =
            u64::try_from(millis).map_err(|_| IdConfigError::EpochBeforeUnix { millis })?;
        Ok(self)
    }

    /// Choose how the sequence field is filled
    pub const fn sequence_mode(mut self, mode: SequenceMode) -> Self {
        self.sequence_mode = mode;
        self
    }

    /// Enable or disable micro spin before sleep on counter exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final IdConfig
    pub fn build(self) -> IdConfig {
        IdConfig::from_builder(self)
    }
}

impl Default for IdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
