//! Property evaluation errors.

use tc_core::TcError;
use tc_system::SystemError;
use thiserror::Error;

/// Result type for property evaluation.
pub type PropertiesResult<T> = Result<T, PropertiesError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertiesError {
    /// The composition vector does not have one entry per species of the system.
    #[error("Composition has {actual} entries but the system has {expected} species")]
    CompositionLength { expected: usize, actual: usize },

    #[error(transparent)]
    System(#[from] SystemError),
}

impl From<PropertiesError> for TcError {
    fn from(err: PropertiesError) -> Self {
        match err {
            PropertiesError::System(inner) => inner.into(),
            PropertiesError::CompositionLength { expected, actual } => TcError::IndexOob {
                what: "composition",
                index: actual,
                len: expected,
            },
        }
    }
}
