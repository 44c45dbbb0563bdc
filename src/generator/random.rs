//! Randomness seam for the sequence field

use rand::{rng, Rng};

use crate::id::FlakeId;

/// A source of sequence values.
///
/// The generator masks the returned value to the 12-bit sequence field, so an
/// implementation may return any `u16`.
///
/// # Example
///
/// ```
/// use flakeid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn sequence(&self) -> u16 {
///         100
///     }
/// }
///
/// assert_eq!(FixedRand.sequence(), 100);
/// ```
pub trait RandSource {
    /// Returns a random sequence value
    fn sequence(&self) -> u16;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn sequence(&self) -> u16 {
        (**self).sequence()
    }
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own cryptographically secure generator, so calls from
/// many threads never contend. This type stores nothing and is freely `Send` and
/// `Sync`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    #[inline]
    fn sequence(&self) -> u16 {
        rng().random_range(0..=FlakeId::MAX_SEQUENCE)
    }
}
