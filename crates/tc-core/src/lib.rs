//! tc-core: stable foundation for thermochem.
//!
//! Contains:
//! - dual (differentiable scalars and vectors carrying T, P and composition partials)
//! - units (uom SI types, constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact IDs for species database entries)
//! - error (shared error types)

pub mod dual;
pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use dual::{
    ChemicalScalar, ChemicalVector, CompositionGradient, Dual, DualVector, Gradient,
    ThermoScalar, ThermoVector, TpGradient,
};
pub use error::{TcError, TcResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
