//! Recursive evaluation of standard properties through formation reactions.
//!
//! For a product P of `Σ νᵢ·Rᵢ = P` every property X resolves as
//! `X(P) = Σ νᵢ·X(Rᵢ) + ΔX`, where each `X(Rᵢ)` is itself either literal data
//! or another resolution. The reactant graph is walked depth-first with an
//! on-path stack, so a species reached again while it is still being resolved
//! is reported as a cycle instead of recursing forever.

use std::collections::HashMap;

use tc_core::units::{Pressure, Temperature};
use tc_core::{SpeciesId, ThermoScalar};
use tracing::{debug, trace};

use crate::database::SpeciesDatabase;
use crate::error::SpeciesResult;
use crate::species::Species;
use crate::thermo::StandardThermoProps;
use crate::validate;

/// Evaluator of the standard properties of one reaction-defined species.
///
/// Obtained from [`SpeciesDatabase::standard_thermo_model`]. Holds no state
/// between calls; independent evaluations may run concurrently.
#[derive(Clone, Copy, Debug)]
pub struct StandardThermoModel<'a> {
    db: &'a SpeciesDatabase,
    id: SpeciesId,
}

impl<'a> StandardThermoModel<'a> {
    pub(crate) fn new(db: &'a SpeciesDatabase, id: SpeciesId) -> Self {
        Self { db, id }
    }

    pub fn id(&self) -> SpeciesId {
        self.id
    }

    /// The species this model resolves.
    pub fn species(&self) -> &'a Species {
        &self.db.species()[self.id.idx()]
    }

    /// Standard properties at (T, P) with exact temperature and pressure partials.
    pub fn evaluate(&self, t: Temperature, p: Pressure) -> SpeciesResult<StandardThermoProps> {
        resolve(self.db, self.id, t, p)
    }
}

/// Resolve the standard properties of `id` at (T, P).
pub(crate) fn resolve(
    db: &SpeciesDatabase,
    id: SpeciesId,
    t: Temperature,
    p: Pressure,
) -> SpeciesResult<StandardThermoProps> {
    let mut resolution = Resolution {
        db,
        t: ThermoScalar::temperature(t.value),
        p: ThermoScalar::pressure(p.value),
        path: Vec::new(),
        memo: HashMap::new(),
    };
    resolution.props(id)
}

/// State of one evaluation at a fixed (T, P).
struct Resolution<'a> {
    db: &'a SpeciesDatabase,
    t: ThermoScalar,
    p: ThermoScalar,
    /// Species currently being resolved, outermost first.
    path: Vec<SpeciesId>,
    /// Shared reactants are resolved once per evaluation.
    memo: HashMap<SpeciesId, StandardThermoProps>,
}

impl<'a> Resolution<'a> {
    fn props(&mut self, id: SpeciesId) -> SpeciesResult<StandardThermoProps> {
        if let Some(props) = self.memo.get(&id) {
            return Ok(*props);
        }
        if self.path.contains(&id) {
            return Err(validate::cycle_error(self.db, &self.path, id));
        }

        let db = self.db;
        let species = db.require(id)?;
        let props = if species.has_formation_reaction() {
            self.path.push(id);
            let combined = self.combine(id, species);
            self.path.pop();
            combined?
        } else {
            species.standard_thermo_data().to_props()
        };

        self.memo.insert(id, props);
        Ok(props)
    }

    fn combine(&mut self, id: SpeciesId, species: &Species) -> SpeciesResult<StandardThermoProps> {
        debug!(
            species = species.name(),
            depth = self.path.len(),
            "resolving formation reaction"
        );

        let db = self.db;
        let mut sum = StandardThermoProps::default();
        for &(reactant, nu) in db.reactants_of(id) {
            let x = self.props(reactant)?;
            trace!(product = species.name(), reactant = %reactant, nu, g0 = x.g0.val, "reactant contribution");
            sum.g0 += x.g0 * nu;
            sum.h0 += x.h0 * nu;
            sum.v0 += x.v0 * nu;
            sum.cp0 += x.cp0 * nu;
            sum.cv0 += x.cv0 * nu;
        }

        let reaction = species.reaction();
        let delta = reaction.corrections(self.t, self.p);
        sum.g0 += delta.dg0;
        sum.h0 += delta.dh0;
        sum.cp0 += delta.dcp0;
        sum.cv0 += delta.dcv0;
        sum.v0 = match reaction.product_standard_volume() {
            Some(v0) => ThermoScalar::constant(v0),
            None => sum.v0 + delta.dv0,
        };

        Ok(sum)
    }
}
