//! Shared test utilities for identifier tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{FlakeId, RandSource, SystemClock, TimeSource};

/// Epoch used by the fixed-clock scenarios (2011-01-01 UTC)
pub const TEST_EPOCH: u64 = 1_293_840_000_000;

/// Clock pinned to one reading
pub struct FixedClock(pub u64);

impl TimeSource for FixedClock {
    fn unix_millis(&self) -> u64 {
        self.0
    }
}

/// Clock the test moves by hand
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn new(millis: u64) -> Self {
        Self(AtomicU64::new(millis))
    }

    pub fn set(&self, millis: u64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn unix_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Clock that advances one millisecond every `reads_per_ms` readings
pub struct SteppingClock {
    start: u64,
    reads_per_ms: u64,
    reads: AtomicU64,
}

impl SteppingClock {
    pub fn new(start: u64, reads_per_ms: u64) -> Self {
        Self {
            start,
            reads_per_ms,
            reads: AtomicU64::new(0),
        }
    }
}

impl TimeSource for SteppingClock {
    fn unix_millis(&self) -> u64 {
        self.start + self.reads.fetch_add(1, Ordering::SeqCst) / self.reads_per_ms
    }
}

/// Random source forced to one value
pub struct FixedRand(pub u16);

impl RandSource for FixedRand {
    fn sequence(&self) -> u16 {
        self.0
    }
}

/// Current wall-clock offset from `epoch`
pub fn wall_clock_ms(epoch: u64) -> u64 {
    SystemClock.unix_millis() - epoch
}

/// Assert a decoded timestamp lies within `tolerance_ms` of the wall clock
pub fn assert_timestamp_accurate(timestamp: u64, epoch: u64, tolerance_ms: u64) {
    let now = wall_clock_ms(epoch);
    assert!(
        timestamp <= now && now - timestamp <= tolerance_ms,
        "Timestamp {} is not within {}ms of wall clock {}",
        timestamp,
        tolerance_ms,
        now
    );
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[FlakeId], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert IDs are strictly increasing in generation order
pub fn assert_ids_monotonic(ids: &[FlakeId]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}
