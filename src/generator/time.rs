//! Clock seam for identifier generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time.
///
/// Lets tests pin or step the clock. The unit is **milliseconds since the Unix
/// epoch**, the generator subtracts its own epoch.
///
/// # Example
///
/// ```
/// use flakeid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_millis(&self) -> u64 {
///         1_293_840_005_000
///     }
/// }
///
/// assert_eq!(FixedTime.unix_millis(), 1_293_840_005_000);
/// ```
pub trait TimeSource {
    /// Current time in milliseconds since 1970-01-01T00:00:00Z
    fn unix_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn unix_millis(&self) -> u64 {
        (**self).unix_millis()
    }
}

/// The system wall clock, truncated to milliseconds
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    /// A clock set before 1970 reads as 0, which the generator then rejects
    /// against any later epoch
    #[inline(always)]
    fn unix_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
