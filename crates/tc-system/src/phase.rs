//! Phases: an ordered species list with its thermo and chemical models.

use std::fmt;
use std::sync::Arc;

use tc_species::Species;

use crate::ideal::IdealSolutionModel;
use crate::model::{PhaseChemicalModel, PhaseThermoModel};

/// A phase of the chemical system.
///
/// Species order defines the order of every per-species array the phase
/// models produce. The chemical model defaults to an ideal solution; the
/// thermo model has no default and must be set before the phase joins a
/// [`ChemicalSystem`](crate::ChemicalSystem).
#[derive(Clone)]
pub struct Phase {
    name: String,
    species: Vec<Species>,
    thermo_model: Option<Arc<dyn PhaseThermoModel>>,
    chemical_model: Arc<dyn PhaseChemicalModel>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: Vec::new(),
            thermo_model: None,
            chemical_model: Arc::new(IdealSolutionModel),
        }
    }

    pub fn with_species<I>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = Species>,
    {
        self.species = species.into_iter().collect();
        self
    }

    pub fn with_thermo_model<M>(mut self, model: M) -> Self
    where
        M: PhaseThermoModel + 'static,
    {
        self.thermo_model = Some(Arc::new(model));
        self
    }

    pub fn with_chemical_model<M>(mut self, model: M) -> Self
    where
        M: PhaseChemicalModel + 'static,
    {
        self.chemical_model = Arc::new(model);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn num_species(&self) -> usize {
        self.species.len()
    }

    pub fn thermo_model(&self) -> Option<&dyn PhaseThermoModel> {
        self.thermo_model.as_deref()
    }

    pub fn chemical_model(&self) -> &dyn PhaseChemicalModel {
        self.chemical_model.as_ref()
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phase")
            .field("name", &self.name)
            .field(
                "species",
                &self.species.iter().map(Species::name).collect::<Vec<_>>(),
            )
            .field("thermo_model", &self.thermo_model.is_some())
            .finish()
    }
}
