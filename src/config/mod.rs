//! Configuration for the identifier generator

mod builder;

pub use builder::IdConfigBuilder;
use builder::{
    DEFAULT_EPOCH, DEFAULT_SEQUENCE_MODE, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

/// How the 12-bit sequence field is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceMode {
    /// Uniform random draw per call. Stateless, but two calls in the same
    /// millisecond for the same machine may collide.
    #[default]
    Random,
    /// Per-generator counter reset every millisecond. Waits for the next
    /// millisecond once 4096 identifiers have been handed out.
    Counter,
}

/// Configuration for the identifier generator
/// Copy-optimized with const-evaluable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdConfig {
    epoch: u64,
    sequence_mode: SequenceMode,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl IdConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: IdConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            sequence_mode: b.sequence_mode,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> IdConfigBuilder {
        IdConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn sequence_mode(&self) -> SequenceMode {
        self.sequence_mode
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            sequence_mode: DEFAULT_SEQUENCE_MODE,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
