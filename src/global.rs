//! Process-wide default generator

use once_cell::sync::Lazy;

use crate::error::IdError;
use crate::generator::IdGenerator;

static DEFAULT_GENERATOR: Lazy<IdGenerator> = Lazy::new(IdGenerator::new);

/// Generate an identifier with the default generator, rendered as a decimal string
///
/// Uses the default epoch (2011-01-01 UTC), the system clock and random sequences.
///
/// # Example
///
/// ```
/// let id = flakeid::generate(7).unwrap();
/// let parsed: flakeid::FlakeId = id.parse().unwrap();
/// assert_eq!(parsed.machine_id(), 7);
/// ```
pub fn generate(machine_id: u16) -> Result<String, IdError> {
    DEFAULT_GENERATOR.generate(machine_id)
}

/// The default generator behind [`generate`]
pub fn default_generator() -> &'static IdGenerator {
    &DEFAULT_GENERATOR
}
