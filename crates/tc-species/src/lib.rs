//! tc-species: species records and formation-reaction resolution for thermochem.
//!
//! Provides:
//! - `Species` with literal standard data or a `FormationReaction`
//! - `SpeciesDatabase`, an immutable arena of species with reactant edges
//! - Recursive evaluation of standard properties through chains of formation reactions
//!
//! # Example
//!
//! ```
//! use tc_core::units::{k, pa};
//! use tc_species::{DatabaseBuilder, FormationReaction, Species};
//!
//! let mut builder = DatabaseBuilder::new();
//! builder.add(Species::new("A").with_standard_gibbs_energy(-100.0));
//! let c = builder.add(
//!     Species::new("C").with_formation_reaction(
//!         FormationReaction::new()
//!             .with_reactants([("A", 2.0)])
//!             .with_equilibrium_constant(0.0),
//!     ),
//! );
//! let db = builder.build().unwrap();
//!
//! let model = db.standard_thermo_model(c).unwrap();
//! let props = model.evaluate(k(298.15), pa(1.0e5)).unwrap();
//! assert_eq!(props.g0.val, -200.0);
//! ```

pub mod database;
pub mod error;
pub mod reaction;
pub mod resolver;
pub mod species;
pub mod thermo;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use database::{DatabaseBuilder, SpeciesDatabase};
pub use error::{SpeciesError, SpeciesResult};
pub use reaction::{FormationReaction, Reactant, ReactionCorrection};
pub use resolver::StandardThermoModel;
pub use species::Species;
pub use thermo::{ReactionThermoModel, ReactionThermoProps, StandardThermoData, StandardThermoProps};
