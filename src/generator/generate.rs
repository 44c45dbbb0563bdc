//! ID generation logic
//!
//! Validation, then either a random draw or the counter fast and slow paths

use std::sync::atomic::Ordering;

use tracing::{debug, trace, warn};

use super::state::State;
use super::wait::wait_past;
use super::{IdGenerator, RandSource, TimeSource};
use crate::config::SequenceMode;
use crate::error::IdError;
use crate::id::{validate_machine_id, FlakeId};

impl<T: TimeSource, R: RandSource> IdGenerator<T, R> {
    /// Generate a new identifier rendered as a decimal string
    ///
    /// # Arguments
    /// * `machine_id` - Machine ID in `1..=1023`, assigned to this producer externally
    ///
    /// # Returns
    /// * `Result<String, IdError>` - Decimal identifier, or the validation failure
    pub fn generate(&self, machine_id: u16) -> Result<String, IdError> {
        self.generate_id(machine_id).map(|id| id.to_string())
    }

    /// Generate a new identifier
    ///
    /// # Arguments
    /// * `machine_id` - Machine ID in `1..=1023`, assigned to this producer externally
    ///
    /// # Returns
    /// * `Result<FlakeId, IdError>` - New identifier, or the validation failure
    pub fn generate_id(&self, machine_id: u16) -> Result<FlakeId, IdError> {
        let timestamp = self.timestamp().inspect_err(|err| {
            warn!(machine_id, error = %err, "rejected identifier request");
        })?;
        validate_machine_id(machine_id).inspect_err(|err| {
            warn!(machine_id, error = %err, "rejected identifier request");
        })?;

        let id = match self.config.sequence_mode() {
            SequenceMode::Random => {
                self.assemble_id(timestamp, machine_id, self.rng.sequence())
            }
            SequenceMode::Counter => self.next_counted(timestamp, machine_id)?,
        };
        trace!(id = id.as_u64(), "generated identifier");
        Ok(id)
    }

    /// Counter mode: claim the next sequence slot for `now`
    #[inline]
    fn next_counted(&self, now: u64, machine_id: u16) -> Result<FlakeId, IdError> {
        let current = State::from_raw(self.state.load(Ordering::Acquire));

        // Fast path 1: time advanced, or nothing claimed yet
        if current.is_behind(now) {
            if let Some(id) = self.try_claim_millisecond(current, now, machine_id) {
                return Ok(id);
            }
            return self.counted_slow_path(now, machine_id);
        }

        // Fast path 2: same millisecond, sequence available
        if let Some(id) = self.try_increment_sequence(current, machine_id) {
            return Ok(id);
        }

        self.counted_slow_path(now, machine_id)
    }

    /// Try to claim new millisecond with sequence 0
    #[inline]
    fn try_claim_millisecond(&self, current: State, new_ts: u64, machine_id: u16) -> Option<FlakeId> {
        self.cas_state(current, State::claimed(new_ts, 0))
            .then(|| self.assemble_id(new_ts, machine_id, 0))
    }

    /// Try to take the next sequence within the claimed millisecond
    #[inline]
    fn try_increment_sequence(&self, current: State, machine_id: u16) -> Option<FlakeId> {
        let next = current.next_in_millisecond()?;
        let timestamp = next.timestamp()?;
        self.cas_state(current, next)
            .then(|| self.assemble_id(timestamp, machine_id, next.sequence()))
    }

    #[inline(always)]
    fn cas_state(&self, expected: State, new: State) -> bool {
        self.state
            .compare_exchange_weak(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Slow path for contended or exhausted counter generation
    ///
    /// `now` is only replaced by a fresh validated offset once the claimed
    /// millisecond has been used up.
    #[cold]
    #[inline(never)]
    fn counted_slow_path(&self, mut now: u64, machine_id: u16) -> Result<FlakeId, IdError> {
        loop {
            let current = State::from_raw(self.state.load(Ordering::Acquire));

            if current.is_behind(now) {
                if let Some(id) = self.try_claim_millisecond(current, now, machine_id) {
                    return Ok(id);
                }
                continue;
            }

            if let Some(id) = self.try_increment_sequence(current, machine_id) {
                return Ok(id);
            }

            if let Some(exhausted) = current.timestamp().filter(|_| current.is_exhausted()) {
                debug!(timestamp = exhausted, "sequence exhausted, waiting for next millisecond");
                now = wait_past(exhausted, &self.config, || self.timestamp())?;
            }
        }
    }
}
