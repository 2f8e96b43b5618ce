//! Reference phase models: ideal solution, ideal gas, and standard
//! properties taken from a species database.

use std::sync::Arc;

use tc_core::constants::{STANDARD_PRESSURE_PA, UNIVERSAL_GAS_CONSTANT};
use tc_core::units::{Pressure, Temperature};
use tc_core::{ChemicalScalar, ChemicalVector, Real, SpeciesId, ThermoScalar, ThermoVector};
use tc_species::{Species, SpeciesDatabase};

use crate::composition::molar_fractions;
use crate::error::{SystemError, SystemResult};
use crate::model::{
    PhaseChemicalModel, PhaseChemicalModelResult, PhaseThermoModel, PhaseThermoModelResult,
};
use crate::phase::Phase;

/// Ideal solution: `ln γ = 0`, `ln a = ln x`, no molar volume of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdealSolutionModel;

impl PhaseChemicalModel for IdealSolutionModel {
    fn evaluate(
        &self,
        _t: Temperature,
        _p: Pressure,
        n: &[Real],
    ) -> SystemResult<PhaseChemicalModelResult> {
        let x = molar_fractions(n);
        Ok(PhaseChemicalModelResult {
            ln_activity_coefficients: ChemicalVector::zeros(n.len()),
            ln_activity_constants: ThermoVector::zeros(n.len()),
            ln_activities: x.map(|xi| xi.ln()),
            molar_volume: None,
        })
    }
}

/// Ideal gas mixture: `ln a = ln x + ln(P / P°)` and `V = R·T / P`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdealGasModel;

impl PhaseChemicalModel for IdealGasModel {
    fn evaluate(
        &self,
        t: Temperature,
        p: Pressure,
        n: &[Real],
    ) -> SystemResult<PhaseChemicalModelResult> {
        let t = ThermoScalar::temperature(t.value);
        let p = ThermoScalar::pressure(p.value);
        let ln_pbar = (p / STANDARD_PRESSURE_PA).ln();

        let x = molar_fractions(n);
        let ln_x = x.map(|xi| xi.ln());

        Ok(PhaseChemicalModelResult {
            ln_activity_coefficients: ChemicalVector::zeros(n.len()),
            ln_activity_constants: ThermoVector::new(vec![ln_pbar; n.len()]),
            ln_activities: &ln_x + &ChemicalScalar::from(ln_pbar),
            molar_volume: Some(ChemicalScalar::from(UNIVERSAL_GAS_CONSTANT * t / p)),
        })
    }
}

/// Thermo model of a phase whose species live in a [`SpeciesDatabase`].
///
/// Each species contributes its literal standard data or, if it is defined by
/// a formation reaction, the resolved properties of that reaction.
#[derive(Clone, Debug)]
pub struct StandardThermoPhaseModel {
    db: Arc<SpeciesDatabase>,
    species: Vec<SpeciesId>,
}

impl StandardThermoPhaseModel {
    /// Model for the named species, in the given order.
    pub fn new<I, S>(db: Arc<SpeciesDatabase>, names: I) -> SystemResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let species = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                db.id_of(name).ok_or_else(|| SystemError::UnknownSpecies {
                    name: name.to_string(),
                })
            })
            .collect::<SystemResult<Vec<_>>>()?;
        Ok(Self { db, species })
    }

    pub fn species_ids(&self) -> &[SpeciesId] {
        &self.species
    }

    /// The species records this model covers.
    pub fn species(&self) -> Vec<Species> {
        self.species
            .iter()
            .filter_map(|&id| self.db.get(id).cloned())
            .collect()
    }

    /// A phase holding this model's species, with this model as its thermo model.
    pub fn into_phase(self, name: impl Into<String>) -> Phase {
        Phase::new(name)
            .with_species(self.species())
            .with_thermo_model(self)
    }
}

impl PhaseThermoModel for StandardThermoPhaseModel {
    fn evaluate(&self, t: Temperature, p: Pressure) -> SystemResult<PhaseThermoModelResult> {
        let mut res = PhaseThermoModelResult::default();
        for &id in &self.species {
            let props = self.db.standard_thermo_props(id, t, p)?;
            res.standard_partial_molar_gibbs_energies.push(props.g0);
            res.standard_partial_molar_enthalpies.push(props.h0);
            res.standard_partial_molar_volumes.push(props.v0);
            res.standard_partial_molar_heat_capacities_cp.push(props.cp0);
            res.standard_partial_molar_heat_capacities_cv.push(props.cv0);
        }
        Ok(res)
    }
}
