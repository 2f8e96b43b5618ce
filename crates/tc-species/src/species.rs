//! Species definitions.

use tc_core::units::MolarMass;
use tc_core::{Real, units::kg_per_mol};

use crate::reaction::FormationReaction;
use crate::thermo::StandardThermoData;

/// A chemical species.
///
/// Standard-state properties come either from literal data or, when a
/// formation reaction is attached, from the reactants of that reaction.
#[derive(Clone, Debug)]
pub struct Species {
    name: String,
    molar_mass: MolarMass,
    standard: StandardThermoData,
    reaction: FormationReaction,
}

impl Species {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            molar_mass: kg_per_mol(0.0),
            standard: StandardThermoData::default(),
            reaction: FormationReaction::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_molar_mass(mut self, molar_mass: MolarMass) -> Self {
        self.molar_mass = molar_mass;
        self
    }

    pub fn with_standard_thermo_data(mut self, data: StandardThermoData) -> Self {
        self.standard = data;
        self
    }

    pub fn with_standard_gibbs_energy(mut self, g0: Real) -> Self {
        self.standard.g0 = g0;
        self
    }

    pub fn with_standard_enthalpy(mut self, h0: Real) -> Self {
        self.standard.h0 = h0;
        self
    }

    pub fn with_standard_volume(mut self, v0: Real) -> Self {
        self.standard.v0 = v0;
        self
    }

    pub fn with_standard_heat_capacity_cp(mut self, cp0: Real) -> Self {
        self.standard.cp0 = cp0;
        self
    }

    pub fn with_standard_heat_capacity_cv(mut self, cv0: Real) -> Self {
        self.standard.cv0 = cv0;
        self
    }

    pub fn with_formation_reaction(mut self, reaction: FormationReaction) -> Self {
        self.reaction = reaction;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    /// Literal standard data (ignored when a formation reaction is attached).
    pub fn standard_thermo_data(&self) -> &StandardThermoData {
        &self.standard
    }

    /// The formation reaction; empty for species defined by literal data.
    pub fn reaction(&self) -> &FormationReaction {
        &self.reaction
    }

    pub fn has_formation_reaction(&self) -> bool {
        !self.reaction.is_empty()
    }

    pub(crate) fn reaction_mut(&mut self) -> &mut FormationReaction {
        &mut self.reaction
    }
}
