//! Counter-mode state: the millisecond a generator has claimed and the last
//! sequence handed out in it, kept in one word so a single compare-and-swap
//! moves both.
//!
//! The upper bits store the claimed offset plus one, the low 16 bits the
//! sequence. A word of zero therefore means no millisecond has been claimed
//! yet, which keeps offset 0 (a clock reading exactly at the epoch) claimable
//! with sequence 0 like any other millisecond.

use crate::id::FlakeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State(u64);

impl State {
    const SEQ_BITS: u32 = 16;
    const SEQ_MASK: u64 = (1 << Self::SEQ_BITS) - 1;

    /// Nothing claimed; every offset is ahead of it
    pub(crate) const UNCLAIMED: State = State(0);

    /// `sequence` handed out within millisecond `timestamp`
    #[inline(always)]
    pub(crate) const fn claimed(timestamp: u64, sequence: u16) -> Self {
        Self(((timestamp + 1) << Self::SEQ_BITS) | (sequence as u64))
    }

    /// Claimed offset, `None` before the first claim
    #[inline(always)]
    pub(crate) const fn timestamp(self) -> Option<u64> {
        (self.0 >> Self::SEQ_BITS).checked_sub(1)
    }

    #[inline(always)]
    pub(crate) const fn sequence(self) -> u16 {
        (self.0 & Self::SEQ_MASK) as u16
    }

    /// True when `now` should start a fresh millisecond instead of continuing this one
    #[inline(always)]
    pub(crate) const fn is_behind(self, now: u64) -> bool {
        match self.timestamp() {
            Some(timestamp) => now > timestamp,
            None => true,
        }
    }

    /// The following slot in the same millisecond, `None` once the sequence is spent
    #[inline]
    pub(crate) fn next_in_millisecond(self) -> Option<Self> {
        let timestamp = self.timestamp()?;
        if self.sequence() >= FlakeId::MAX_SEQUENCE {
            return None;
        }
        Some(Self::claimed(timestamp, self.sequence() + 1))
    }

    /// True when the claimed millisecond has no sequence left
    #[inline(always)]
    pub(crate) const fn is_exhausted(self) -> bool {
        self.timestamp().is_some() && self.sequence() >= FlakeId::MAX_SEQUENCE
    }

    #[inline(always)]
    pub(crate) const fn raw(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}
