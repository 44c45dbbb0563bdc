use chrono::{DateTime, Utc};

use crate::id::FlakeId;

/// Identifier component extractor bound to a generator's epoch
#[derive(Debug, Copy, Clone)]
pub struct IdExtractor {
    epoch: u64,
}

impl IdExtractor {
    /// Create a new extractor for identifiers produced against `epoch`
    pub(crate) fn new(epoch: u64) -> Self {
        Self { epoch }
    }

    /// Extract timestamp component (milliseconds since the epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: FlakeId) -> u64 {
        id.timestamp()
    }

    /// Extract machine ID component
    #[inline(always)]
    pub fn machine_id(&self, id: FlakeId) -> u16 {
        id.machine_id()
    }

    /// Extract sequence component
    #[inline(always)]
    pub fn sequence(&self, id: FlakeId) -> u16 {
        id.sequence()
    }

    /// Decompose an identifier into its components: timestamp, machine ID, and sequence
    #[inline]
    pub fn decompose(&self, id: FlakeId) -> (u64, u16, u16) {
        id.parts()
    }

    /// Milliseconds since the Unix epoch at which the identifier was generated
    ///
    /// `None` when the epoch plus the timestamp offset does not fit a `u64`
    #[inline]
    pub fn unix_millis(&self, id: FlakeId) -> Option<u64> {
        id.timestamp().checked_add(self.epoch)
    }

    /// Wall-clock creation time of the identifier
    pub fn datetime(&self, id: FlakeId) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.unix_millis(id)?).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}
