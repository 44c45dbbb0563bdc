//! Packed identifier value and its bit layout
//!
//! Layout, most significant bit first:
//! 1 reserved bit (always 0) | 41-bit timestamp | 10-bit machine ID | 12-bit sequence

use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, ParseIdError};

/// A packed Snowflake identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlakeId(u64);

impl FlakeId {
    pub const TIMESTAMP_BITS: u32 = 41;
    pub const MACHINE_ID_BITS: u32 = 10;
    pub const SEQUENCE_BITS: u32 = 12;

    pub const MACHINE_ID_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub const TIMESTAMP_SHIFT: u32 = Self::MACHINE_ID_BITS + Self::SEQUENCE_BITS;

    /// Largest offset from the epoch the timestamp field can hold (2^41 - 1)
    pub const MAX_TIMESTAMP: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const MIN_MACHINE_ID: u16 = 1;
    pub const MAX_MACHINE_ID: u16 = (1 << Self::MACHINE_ID_BITS) - 1;
    pub const MAX_SEQUENCE: u16 = (1 << Self::SEQUENCE_BITS) - 1;

    pub(crate) const MACHINE_ID_MASK: u64 = Self::MAX_MACHINE_ID as u64;
    pub(crate) const SEQUENCE_MASK: u64 = Self::MAX_SEQUENCE as u64;
    const RESERVED_BIT: u64 = 1 << 63;

    /// Pack already validated fields. Callers guarantee each field fits its width.
    #[inline(always)]
    pub(crate) const fn pack(timestamp: u64, machine_id: u16, sequence: u16) -> Self {
        Self(
            (timestamp << Self::TIMESTAMP_SHIFT)
                | ((machine_id as u64) << Self::MACHINE_ID_SHIFT)
                | (sequence as u64),
        )
    }

    /// Pack a timestamp offset, machine ID and sequence into an identifier
    ///
    /// # Arguments
    /// * `timestamp` - Milliseconds since the epoch, at most [`FlakeId::MAX_TIMESTAMP`]
    /// * `machine_id` - Machine ID in `1..=1023`
    /// * `sequence` - Sequence in `0..=4095`
    ///
    /// # Returns
    /// * `Result<FlakeId, IdError>` - The packed identifier or the first field found out of range.
    ///   A timestamp overflow is reported against an epoch of 0.
    pub fn from_parts(timestamp: u64, machine_id: u16, sequence: u16) -> Result<Self, IdError> {
        if timestamp > Self::MAX_TIMESTAMP {
            return Err(IdError::TimestampOverflow {
                now_ms: timestamp,
                epoch: 0,
            });
        }
        validate_machine_id(machine_id)?;
        if sequence > Self::MAX_SEQUENCE {
            return Err(IdError::SequenceOutOfRange {
                sequence,
                max: Self::MAX_SEQUENCE,
            });
        }
        Ok(Self::pack(timestamp, machine_id, sequence))
    }

    /// Timestamp offset from the epoch in milliseconds
    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        self.0 >> Self::TIMESTAMP_SHIFT
    }

    #[inline(always)]
    pub const fn machine_id(self) -> u16 {
        ((self.0 >> Self::MACHINE_ID_SHIFT) & Self::MACHINE_ID_MASK) as u16
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        (self.0 & Self::SEQUENCE_MASK) as u16
    }

    /// Decompose into `(timestamp, machine_id, sequence)`
    #[inline]
    pub const fn parts(self) -> (u64, u16, u16) {
        (self.timestamp(), self.machine_id(), self.sequence())
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Reject machine IDs outside `1..=1023`
#[inline]
pub(crate) fn validate_machine_id(machine_id: u16) -> Result<(), IdError> {
    if !(FlakeId::MIN_MACHINE_ID..=FlakeId::MAX_MACHINE_ID).contains(&machine_id) {
        return Err(IdError::MachineIdOutOfRange {
            machine_id,
            min: FlakeId::MIN_MACHINE_ID,
            max: FlakeId::MAX_MACHINE_ID,
        });
    }
    Ok(())
}

impl fmt::Display for FlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for FlakeId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIdError::Empty);
        }

        let mut result: u64 = 0;
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(ParseIdError::InvalidDigit(c))?;
            result = result
                .checked_mul(10)
                .and_then(|r| r.checked_add(digit as u64))
                .ok_or(ParseIdError::Overflow)?;
        }

        Self::try_from(result)
    }
}

impl TryFrom<u64> for FlakeId {
    type Error = ParseIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value & Self::RESERVED_BIT != 0 {
            return Err(ParseIdError::ReservedBitSet);
        }
        Ok(Self(value))
    }
}

impl From<FlakeId> for u64 {
    fn from(id: FlakeId) -> Self {
        id.0
    }
}
