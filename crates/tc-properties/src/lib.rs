//! tc-properties: thermodynamic and chemical properties of a chemical system.
//!
//! [`ChemicalProperties`] evaluates the phase models of a
//! [`ChemicalSystem`](tc_system::ChemicalSystem) at (T, P) or (T, P, n) and
//! derives species-, phase- and system-level properties from the results.
//! Every derived property carries exact partials in temperature and pressure,
//! and composition-level ones also in the species amounts.

pub mod error;
pub mod properties;

pub use error::{PropertiesError, PropertiesResult};
pub use properties::ChemicalProperties;
