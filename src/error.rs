use thiserror::Error;

/// Represents errors that can occur while producing or packing an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The current time is outside the range the 41-bit timestamp field can hold
    /// relative to the epoch. The generator cannot recover from this by retrying.
    #[error("Timestamp overflow: {now_ms} ms cannot be encoded against epoch {epoch} ms. Unable to generate any more IDs")]
    TimestampOverflow { now_ms: u64, epoch: u64 },
    /// Machine ID is outside the assignable range
    #[error("Machine ID {machine_id} is out of range. Allowed values are {min}..={max}")]
    MachineIdOutOfRange { machine_id: u16, min: u16, max: u16 },
    /// Sequence does not fit the 12-bit field. Only produced by explicit packing
    #[error("Sequence {sequence} is out of range. Maximum allowed value is {max}")]
    SequenceOutOfRange { sequence: u16, max: u16 },
}

/// Errors that can occur while parsing a decimal identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// The input string is empty
    #[error("Cannot parse an empty string")]
    Empty,

    /// The input string contains a non-decimal character
    #[error("Invalid decimal digit: {0}")]
    InvalidDigit(char),

    /// The parsed value would overflow a u64
    #[error("Parsed value would overflow u64")]
    Overflow,

    /// The reserved high bit is set, so the value was not produced by a generator
    #[error("Reserved bit is set, value exceeds 63 bits")]
    ReservedBitSet,
}

/// Errors related to `IdConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdConfigError {
    /// Epoch lies before 1970-01-01T00:00:00Z
    #[error("Epoch {millis} ms lies before the Unix epoch")]
    EpochBeforeUnix { millis: i64 },
}
