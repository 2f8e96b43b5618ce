//! Species database: an immutable arena of species and their reactant edges.

use std::collections::HashMap;

use tc_core::units::{Pressure, Temperature};
use tc_core::{Real, SpeciesId};

use crate::error::{SpeciesError, SpeciesResult};
use crate::resolver::{self, StandardThermoModel};
use crate::species::Species;
use crate::thermo::StandardThermoProps;
use crate::validate;

/// Builder for a species database.
///
/// Species may be added in any order; reactants are looked up by name when
/// `build()` freezes the database.
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    species: Vec<Species>,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a species and return its ID.
    pub fn add(&mut self, species: Species) -> SpeciesId {
        let id = SpeciesId::from_index(self.species.len() as u32);
        self.species.push(species);
        id
    }

    /// Validate names and reactant references and return an immutable database.
    pub fn build(mut self) -> SpeciesResult<SpeciesDatabase> {
        let by_name = validate::index_names(&self.species)?;

        for species in &mut self.species {
            if species.reaction().is_empty() {
                continue;
            }
            if species.reaction().product().is_empty() {
                let name = species.name().to_string();
                species.reaction_mut().set_product(&name);
            }
        }
        validate::validate_products(&self.species)?;

        let (reactant_offsets, reactant_edges) = Self::build_edges(&self.species, &by_name)?;

        Ok(SpeciesDatabase {
            species: self.species,
            by_name,
            reactant_offsets,
            reactant_edges,
        })
    }

    /// Compact adjacency: species i's reactants are
    /// `edges[offsets[i]..offsets[i + 1]]`, in reaction order.
    fn build_edges(
        species: &[Species],
        by_name: &HashMap<String, SpeciesId>,
    ) -> SpeciesResult<(Vec<usize>, Vec<(SpeciesId, Real)>)> {
        let mut offsets = Vec::with_capacity(species.len() + 1);
        let mut edges = Vec::new();
        offsets.push(0);

        for s in species {
            for reactant in s.reaction().reactants() {
                let id = by_name.get(&reactant.name).copied().ok_or_else(|| {
                    SpeciesError::UnknownReactant {
                        species: s.name().to_string(),
                        reactant: reactant.name.clone(),
                    }
                })?;
                edges.push((id, reactant.coefficient));
            }
            offsets.push(edges.len());
        }

        Ok((offsets, edges))
    }
}

/// Immutable collection of species with resolved reactant edges.
///
/// Reactant species are shared: any number of reactions may reference the
/// same species by ID. The edges form a DAG by contract; cycles are reported
/// as configuration errors when standard properties are resolved.
#[derive(Debug, Clone)]
pub struct SpeciesDatabase {
    species: Vec<Species>,
    by_name: HashMap<String, SpeciesId>,
    reactant_offsets: Vec<usize>,
    reactant_edges: Vec<(SpeciesId, Real)>,
}

impl SpeciesDatabase {
    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// All species, indexed by their IDs.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Get a species by ID (returns None if ID out of bounds).
    pub fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(id.idx())
    }

    pub fn id_of(&self, name: &str) -> Option<SpeciesId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Species> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Resolved reactants of a species: `(reactant id, coefficient)` in reaction order.
    pub fn reactants_of(&self, id: SpeciesId) -> &[(SpeciesId, Real)] {
        let idx = id.idx();
        if idx >= self.species.len() {
            return &[];
        }
        &self.reactant_edges[self.reactant_offsets[idx]..self.reactant_offsets[idx + 1]]
    }

    pub(crate) fn require(&self, id: SpeciesId) -> SpeciesResult<&Species> {
        self.get(id).ok_or(SpeciesError::UnknownSpecies { id })
    }

    /// The evaluator of standard properties through the formation reaction of `id`.
    ///
    /// Fails if the species has no formation reaction, or if its reactant graph
    /// loops back on itself.
    pub fn standard_thermo_model(&self, id: SpeciesId) -> SpeciesResult<StandardThermoModel<'_>> {
        let species = self.require(id)?;
        if !species.has_formation_reaction() {
            return Err(SpeciesError::NoFormationReaction {
                species: species.name().to_string(),
            });
        }
        validate::ensure_acyclic(self, id)?;
        Ok(StandardThermoModel::new(self, id))
    }

    /// Standard properties of any species at (T, P): literal data for plain
    /// species, resolved values for reaction-defined ones.
    pub fn standard_thermo_props(
        &self,
        id: SpeciesId,
        t: Temperature,
        p: Pressure,
    ) -> SpeciesResult<StandardThermoProps> {
        resolver::resolve(self, id, t, p)
    }
}
