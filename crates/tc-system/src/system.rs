//! The chemical system: ordered phases over one flat species index.

use std::collections::HashMap;

use nalgebra::DVector;
use tc_core::units::{Pressure, Temperature};
use tc_core::Real;
use tc_species::Species;
use tracing::debug;

use crate::error::{SystemError, SystemResult};
use crate::model::{ChemicalModelResult, ThermoModelResult};
use crate::partition::PhasePartition;
use crate::phase::Phase;

/// Immutable description of a multiphase system.
///
/// Species are numbered phase by phase: the species of phase 0 come first,
/// then those of phase 1, and so on. The partition maps phases to index
/// ranges of that numbering.
#[derive(Clone, Debug)]
pub struct ChemicalSystem {
    phases: Vec<Phase>,
    partition: PhasePartition,
    by_name: HashMap<String, usize>,
    molar_masses: DVector<Real>,
}

impl Default for ChemicalSystem {
    /// A system without phases.
    fn default() -> Self {
        Self {
            phases: Vec::new(),
            partition: PhasePartition::default(),
            by_name: HashMap::new(),
            molar_masses: DVector::zeros(0),
        }
    }
}

impl ChemicalSystem {
    /// Build a system from its phases, in order.
    ///
    /// Fails if a species name is used twice or a phase has no thermo model.
    pub fn new(phases: Vec<Phase>) -> SystemResult<Self> {
        let mut by_name = HashMap::new();
        let mut masses = Vec::new();
        for phase in &phases {
            if phase.thermo_model().is_none() {
                return Err(SystemError::MissingThermoModel {
                    phase: phase.name().to_string(),
                });
            }
            for species in phase.species() {
                let index = masses.len();
                if by_name.insert(species.name().to_string(), index).is_some() {
                    return Err(SystemError::DuplicateSpecies {
                        name: species.name().to_string(),
                    });
                }
                masses.push(species.molar_mass().value);
            }
        }

        let partition = PhasePartition::new(phases.iter().map(Phase::num_species));
        Ok(Self {
            phases,
            partition,
            by_name,
            molar_masses: DVector::from_vec(masses),
        })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// # Panics
    /// If `i >= num_phases()`.
    pub fn phase(&self, i: usize) -> &Phase {
        &self.phases[i]
    }

    pub fn partition(&self) -> &PhasePartition {
        &self.partition
    }

    pub fn num_phases(&self) -> usize {
        self.partition.num_phases()
    }

    pub fn num_species(&self) -> usize {
        self.partition.num_species()
    }

    /// # Panics
    /// If `i >= num_phases()`.
    pub fn num_species_in_phase(&self, i: usize) -> usize {
        self.partition.num_species_in_phase(i)
    }

    /// All species in system order.
    pub fn species(&self) -> impl Iterator<Item = &Species> + '_ {
        self.phases.iter().flat_map(|p| p.species().iter())
    }

    /// Flat index of the named species.
    pub fn index_species(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn index_phase(&self, name: &str) -> Option<usize> {
        self.phases.iter().position(|p| p.name() == name)
    }

    /// Molar masses of all species in system order [kg/mol].
    pub fn molar_masses(&self) -> &DVector<Real> {
        &self.molar_masses
    }

    /// Evaluate the thermo model of every phase at (T, P).
    pub fn thermo_model_result(
        &self,
        t: Temperature,
        p: Pressure,
    ) -> SystemResult<ThermoModelResult> {
        let mut phases = Vec::with_capacity(self.phases.len());
        for phase in &self.phases {
            let model = phase
                .thermo_model()
                .ok_or_else(|| SystemError::MissingThermoModel {
                    phase: phase.name().to_string(),
                })?;
            let res = model.evaluate(t, p)?;
            res.check_shape(phase.name(), phase.num_species())?;
            phases.push(res);
        }
        Ok(ThermoModelResult { phases })
    }

    /// Evaluate the chemical model of every phase at (T, P, n).
    ///
    /// `n` holds one amount per species in system order; each phase model
    /// receives its own slice.
    pub fn chemical_model_result(
        &self,
        t: Temperature,
        p: Pressure,
        n: &[Real],
    ) -> SystemResult<ChemicalModelResult> {
        if n.len() != self.num_species() {
            return Err(SystemError::CompositionLength {
                expected: self.num_species(),
                actual: n.len(),
            });
        }
        let mut phases = Vec::with_capacity(self.phases.len());
        for (phase, range) in self.phases.iter().zip(self.partition.ranges()) {
            debug!(
                phase = phase.name(),
                species = range.len(),
                "evaluating chemical model"
            );
            let res = phase.chemical_model().evaluate(t, p, &n[range])?;
            res.check_shape(phase.name(), phase.num_species())?;
            phases.push(res);
        }
        Ok(ChemicalModelResult { phases })
    }
}
