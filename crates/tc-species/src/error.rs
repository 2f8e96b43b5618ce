//! Species and formation-reaction errors.

use tc_core::{SpeciesId, TcError};
use thiserror::Error;

/// Result type for species operations.
pub type SpeciesResult<T> = Result<T, SpeciesError>;

/// Configuration errors in species definitions and reaction graphs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeciesError {
    /// Standard properties were requested through a reaction the species does not have.
    #[error("Species {species} has no formation reaction")]
    NoFormationReaction { species: String },

    /// A species is, directly or indirectly, one of its own reactants.
    #[error("Cyclic formation reaction at {species}: {}", .path.join(" -> "))]
    CyclicReaction { species: String, path: Vec<String> },

    /// A reaction names a reactant that is not in the database.
    #[error("Species {species} references unknown reactant {reactant}")]
    UnknownReactant { species: String, reactant: String },

    /// Two species share a name.
    #[error("Duplicate species name {name}")]
    DuplicateSpecies { name: String },

    /// A reaction declares a product other than the species that owns it.
    #[error("Formation reaction of {species} declares product {product}")]
    ProductMismatch { species: String, product: String },

    /// Species ID not present in the database.
    #[error("Species {id} not found")]
    UnknownSpecies { id: SpeciesId },
}

impl From<SpeciesError> for TcError {
    fn from(err: SpeciesError) -> Self {
        TcError::Config {
            what: err.to_string(),
        }
    }
}
