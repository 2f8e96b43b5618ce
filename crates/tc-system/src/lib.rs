//! tc-system: phases, the phase partition, and per-phase model seams.
//!
//! Provides:
//! - `PhasePartition` (offset/size addressing of flat per-species arrays)
//! - `Phase` and `ChemicalSystem` (ordered phases, each with an ordered species list)
//! - `PhaseThermoModel` / `PhaseChemicalModel` traits and their result records
//! - Composition helpers (`composition`, `molar_fractions`)
//! - Reference ideal models

pub mod composition;
pub mod error;
pub mod ideal;
pub mod model;
pub mod partition;
pub mod phase;
pub mod system;

// Re-exports for ergonomics
pub use composition::{composition, molar_fractions};
pub use error::{SystemError, SystemResult};
pub use ideal::{IdealGasModel, IdealSolutionModel, StandardThermoPhaseModel};
pub use model::{
    ChemicalModelResult, PhaseChemicalModel, PhaseChemicalModelResult, PhaseThermoModel,
    PhaseThermoModelResult, ThermoModelResult,
};
pub use partition::PhasePartition;
pub use phase::Phase;
pub use system::ChemicalSystem;
