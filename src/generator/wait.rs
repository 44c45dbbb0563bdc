//! Waiting out an exhausted counter millisecond
//!
//! The clock is re-read through the generator's own validated offset, so a wait
//! that ends with the clock past the 41-bit range surfaces as `TimestampOverflow`
//! instead of an identifier.

use std::thread;
use std::time::Duration;

use crate::config::IdConfig;
use crate::error::IdError;

/// Upper bound on a single sleep between clock readings
pub(crate) const MAX_SLEEP_MS: u64 = 100;

/// What one pause between clock readings did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Spin,
    Yield,
    Sleep(u64),
}

/// Pacing between clock readings: the configured spin budget first, then sleeps
/// doubling from 1 ms up to [`MAX_SLEEP_MS`]
#[derive(Debug)]
pub(crate) struct Pause {
    spins_left: u32,
    yield_every: u32,
    spun: u32,
    sleep_ms: u64,
}

impl Pause {
    pub(crate) fn new(config: &IdConfig) -> Self {
        Self {
            spins_left: if config.spin_enabled() {
                config.spin_loops()
            } else {
                0
            },
            yield_every: config.spin_yield_every(),
            spun: 0,
            sleep_ms: 1,
        }
    }

    /// Decide the next pause without performing it
    fn next(&mut self) -> Step {
        if self.spins_left > 0 {
            self.spins_left -= 1;
            self.spun += 1;
            if self.yield_every != 0 && self.spun % self.yield_every == 0 {
                return Step::Yield;
            }
            return Step::Spin;
        }

        let ms = self.sleep_ms;
        self.sleep_ms = (ms * 2).min(MAX_SLEEP_MS);
        Step::Sleep(ms)
    }

    /// Pause once
    pub(crate) fn step(&mut self) {
        match self.next() {
            Step::Spin => std::hint::spin_loop(),
            Step::Yield => thread::yield_now(),
            Step::Sleep(ms) => thread::sleep(Duration::from_millis(ms)),
        }
    }
}

/// Poll `offset` until it reads past `exhausted`, returning that reading
///
/// Errors from `offset` end the wait and are returned as is.
pub(crate) fn wait_past<F>(exhausted: u64, config: &IdConfig, offset: F) -> Result<u64, IdError>
where
    F: Fn() -> Result<u64, IdError>,
{
    let mut pause = Pause::new(config);
    loop {
        let now = offset()?;
        if now > exhausted {
            return Ok(now);
        }
        pause.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_spin_budget_then_sleep() {
        let config = IdConfig::builder().spin_loops(4).spin_yield_every(2).build();
        let mut pause = Pause::new(&config);

        let steps: Vec<Step> = (0..5).map(|_| pause.next()).collect();
        assert_eq!(
            steps,
            vec![Step::Spin, Step::Yield, Step::Spin, Step::Yield, Step::Sleep(1)]
        );
    }

    #[test]
    fn test_sleep_doubles_up_to_cap() {
        let config = IdConfig::builder().enable_spin(false).build();
        let mut pause = Pause::new(&config);

        let sleeps: Vec<Step> = (0..9).map(|_| pause.next()).collect();
        assert_eq!(
            sleeps,
            [1, 2, 4, 8, 16, 32, 64, 100, 100].map(Step::Sleep).to_vec()
        );
    }

    #[test]
    fn test_spin_without_yield() {
        let config = IdConfig::builder().spin_loops(3).spin_yield_every(0).build();
        let mut pause = Pause::new(&config);

        let steps: Vec<Step> = (0..4).map(|_| pause.next()).collect();
        assert_eq!(steps, vec![Step::Spin, Step::Spin, Step::Spin, Step::Sleep(1)]);
    }

    #[test]
    fn test_wait_past_returns_first_later_reading() {
        let config = IdConfig::builder().spin_loops(16).build();
        let reads = Cell::new(0u64);
        let offset = || {
            reads.set(reads.get() + 1);
            Ok(98 + reads.get())
        };

        assert_eq!(wait_past(100, &config, offset), Ok(101));
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn test_wait_past_propagates_overflow() {
        let config = IdConfig::builder().spin_loops(16).build();
        let reads = Cell::new(0u32);
        let offset = || {
            reads.set(reads.get() + 1);
            if reads.get() < 3 {
                Ok(100)
            } else {
                Err(IdError::TimestampOverflow {
                    now_ms: 1,
                    epoch: 2,
                })
            }
        };

        assert_eq!(
            wait_past(100, &config, offset),
            Err(IdError::TimestampOverflow {
                now_ms: 1,
                epoch: 2
            })
        );
        assert_eq!(reads.get(), 3);
    }
}
