//! Chemical system errors.

use tc_core::TcError;
use tc_species::SpeciesError;
use thiserror::Error;

/// Result type for chemical system operations.
pub type SystemResult<T> = Result<T, SystemError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    /// Phase index outside the partition.
    #[error("Phase index {index} out of range (num phases = {len})")]
    PhaseIndexOob { index: usize, len: usize },

    /// A phase model returned an array whose length is not the phase size.
    #[error("Phase {phase}: {what} has {actual} entries, expected {expected}")]
    ModelShape {
        phase: String,
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Composition vector does not have one entry per species.
    #[error("Composition has {actual} entries, expected {expected}")]
    CompositionLength { expected: usize, actual: usize },

    /// A species name appears more than once in the system.
    #[error("Duplicate species {name} in chemical system")]
    DuplicateSpecies { name: String },

    /// A phase was built without a thermo model.
    #[error("Phase {phase} has no thermo model")]
    MissingThermoModel { phase: String },

    /// A species name is not known to the species database.
    #[error("Unknown species {name}")]
    UnknownSpecies { name: String },

    /// Failure reported by a phase model.
    #[error("Model error in {what}: {message}")]
    Model { what: &'static str, message: String },

    #[error(transparent)]
    Species(#[from] SpeciesError),
}

impl From<SystemError> for TcError {
    fn from(err: SystemError) -> Self {
        match err {
            SystemError::PhaseIndexOob { index, len } => TcError::IndexOob {
                what: "phase",
                index,
                len,
            },
            other => TcError::Config {
                what: other.to_string(),
            },
        }
    }
}
