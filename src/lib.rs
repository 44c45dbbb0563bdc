//! # flakeid
//!
//! Snowflake identifiers: 63-bit integers packing a millisecond timestamp, a
//! machine ID and a sequence, handed out as decimal strings.
//!
//! Identifiers are:
//! - 📈 Roughly time-sorted
//! - 🌐 Collision-free across machines with distinct machine IDs
//! - 🔒 Thread-safe without locks
//! - 🧮 Safe to carry through systems with narrow integers (decimal text)
//!
//! ```
//! use flakeid::{FlakeId, IdGenerator};
//!
//! let generator = IdGenerator::new();
//! let id = generator.generate(42).unwrap();
//!
//! let (_timestamp, machine_id, _sequence) = id.parse::<FlakeId>().unwrap().parts();
//! assert_eq!(machine_id, 42);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod global;
mod id;
pub mod limbs;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{IdConfig, IdConfigBuilder, SequenceMode};
pub use error::{IdConfigError, IdError, ParseIdError};
pub use extractor::IdExtractor;
pub use generator::{IdGenerator, RandSource, SystemClock, ThreadRandom, TimeSource};
pub use global::{default_generator, generate};
pub use id::FlakeId;
