//! Property aggregation over the phases of a chemical system.
//!
//! `update` stores the raw per-phase model results; every accessor derives its
//! property from them on demand using the identities
//!
//! - `μ = G° + R·T·ln a`
//! - `S = (H − G) / T`, `U = H − P·V`, `A = G − P·V`
//! - phase molar property = `Σ x_i · (standard partial molar property)_i`
//! - specific property = molar property · (phase amount / phase mass)
//!
//! Composition partials are system-wide: entry `j` of `dn` is the partial
//! with respect to the amount of species `j` in system order.

use std::ops::Range;
use std::sync::Arc;

use tc_core::constants::UNIVERSAL_GAS_CONSTANT;
use tc_core::units::{Pressure, Temperature, k, pa};
use tc_core::{ChemicalScalar, ChemicalVector, Real, ThermoScalar, ThermoVector};
use tc_system::{
    ChemicalModelResult, ChemicalSystem, PhaseChemicalModelResult, PhaseThermoModelResult,
    ThermoModelResult, composition, molar_fractions,
};
use tracing::debug;

use crate::error::{PropertiesError, PropertiesResult};

/// Thermodynamic and chemical properties of a chemical system at (T, P, n).
///
/// Before the first update every accessor returns an empty vector or a zero
/// scalar, and temperature and pressure read as zero. After [`update`] only the
/// T/P-dependent properties are refreshed; composition-dependent ones still
/// reflect the last [`update_with_composition`] (or are empty if there was none).
///
/// `update*` needs `&mut self`; accessors only read and may be called from
/// several threads at once.
///
/// [`update`]: ChemicalProperties::update
/// [`update_with_composition`]: ChemicalProperties::update_with_composition
#[derive(Clone, Debug)]
pub struct ChemicalProperties {
    system: Arc<ChemicalSystem>,
    t: Real,
    p: Real,
    n: Vec<Real>,
    thermo: ThermoModelResult,
    chemical: ChemicalModelResult,
}

impl Default for ChemicalProperties {
    fn default() -> Self {
        Self::new(Arc::new(ChemicalSystem::default()))
    }
}

impl ChemicalProperties {
    pub fn new(system: Arc<ChemicalSystem>) -> Self {
        Self {
            system,
            t: 0.0,
            p: 0.0,
            n: Vec::new(),
            thermo: ThermoModelResult::default(),
            chemical: ChemicalModelResult::default(),
        }
    }

    pub fn system(&self) -> &ChemicalSystem {
        &self.system
    }

    /// Evaluate the thermo models of all phases at (T, P).
    ///
    /// On error the previously stored state is left untouched.
    pub fn update(&mut self, t: Temperature, p: Pressure) -> PropertiesResult<()> {
        debug!(
            t = t.value,
            p = p.value,
            phases = self.system.num_phases(),
            "updating thermo properties"
        );
        self.thermo = self.system.thermo_model_result(t, p)?;
        self.t = t.value;
        self.p = p.value;
        Ok(())
    }

    /// Evaluate the thermo and chemical models of all phases at (T, P, n).
    ///
    /// `n` holds the amount [mol] of every species in system order. Amounts
    /// are not checked for sign. On error the previously stored state is left
    /// untouched.
    pub fn update_with_composition(
        &mut self,
        t: Temperature,
        p: Pressure,
        n: &[Real],
    ) -> PropertiesResult<()> {
        let expected = self.system.num_species();
        if n.len() != expected {
            return Err(PropertiesError::CompositionLength {
                expected,
                actual: n.len(),
            });
        }
        debug!(
            t = t.value,
            p = p.value,
            phases = self.system.num_phases(),
            species = expected,
            "updating chemical properties"
        );

        let thermo = self.system.thermo_model_result(t, p)?;
        let chemical = self.system.chemical_model_result(t, p, n)?;

        self.t = t.value;
        self.p = p.value;
        self.n = n.to_vec();
        self.thermo = thermo;
        self.chemical = chemical;
        Ok(())
    }

    pub fn temperature(&self) -> Temperature {
        k(self.t)
    }

    pub fn pressure(&self) -> Pressure {
        pa(self.p)
    }

    /// Species amounts of the last composition update [mol].
    pub fn composition(&self) -> &[Real] {
        &self.n
    }

    pub fn thermo_model_result(&self) -> &ThermoModelResult {
        &self.thermo
    }

    pub fn chemical_model_result(&self) -> &ChemicalModelResult {
        &self.chemical
    }

    // Species properties

    /// Mole fraction of each species within its own phase.
    pub fn molar_fractions(&self) -> ChemicalVector {
        let width = self.width();
        let mut out = ChemicalVector::default();
        for r in self.composition_ranges() {
            out.extend_from(&molar_fractions(&self.n[r.clone()]).embed(r.start, width));
        }
        out
    }

    pub fn ln_activity_coefficients(&self) -> ChemicalVector {
        self.gather_chemical(|res| &res.ln_activity_coefficients)
    }

    pub fn ln_activity_constants(&self) -> ThermoVector {
        let mut out = ThermoVector::default();
        if self.composition_ranges().is_empty() {
            return out;
        }
        for res in &self.chemical.phases {
            out.extend_from(&res.ln_activity_constants);
        }
        out
    }

    pub fn ln_activities(&self) -> ChemicalVector {
        self.gather_chemical(|res| &res.ln_activities)
    }

    /// `μ_i = G°_i + R·T·ln a_i` [J/mol].
    pub fn chemical_potentials(&self) -> ChemicalVector {
        let ln_a = self.ln_activities();
        if ln_a.is_empty() {
            return ln_a;
        }
        let g = ChemicalVector::from(self.standard_partial_molar_gibbs_energies());
        let rt = ChemicalScalar::from(UNIVERSAL_GAS_CONSTANT * self.t_dual());
        &g + &(&ln_a * &rt)
    }

    /// [J/mol]
    pub fn standard_partial_molar_gibbs_energies(&self) -> ThermoVector {
        self.thermo.gather(|res| &res.standard_partial_molar_gibbs_energies)
    }

    /// [J/mol]
    pub fn standard_partial_molar_enthalpies(&self) -> ThermoVector {
        self.thermo.gather(|res| &res.standard_partial_molar_enthalpies)
    }

    /// [m³/mol]
    pub fn standard_partial_molar_volumes(&self) -> ThermoVector {
        self.thermo.gather(|res| &res.standard_partial_molar_volumes)
    }

    /// `S° = (H° − G°) / T` [J/(mol·K)].
    pub fn standard_partial_molar_entropies(&self) -> ThermoVector {
        let g = self.standard_partial_molar_gibbs_energies();
        let h = self.standard_partial_molar_enthalpies();
        &(&h - &g) / &self.t_dual()
    }

    /// `U° = H° − P·V°` [J/mol].
    pub fn standard_partial_molar_internal_energies(&self) -> ThermoVector {
        let h = self.standard_partial_molar_enthalpies();
        let v = self.standard_partial_molar_volumes();
        &h - &(&v * &self.p_dual())
    }

    /// `A° = G° − P·V°` [J/mol].
    pub fn standard_partial_molar_helmholtz_energies(&self) -> ThermoVector {
        let g = self.standard_partial_molar_gibbs_energies();
        let v = self.standard_partial_molar_volumes();
        &g - &(&v * &self.p_dual())
    }

    /// [J/(mol·K)]
    pub fn standard_partial_molar_heat_capacities_cp(&self) -> ThermoVector {
        self.thermo.gather(|res| &res.standard_partial_molar_heat_capacities_cp)
    }

    /// [J/(mol·K)]
    pub fn standard_partial_molar_heat_capacities_cv(&self) -> ThermoVector {
        self.thermo.gather(|res| &res.standard_partial_molar_heat_capacities_cv)
    }

    // Phase molar properties

    /// [J/mol]
    pub fn phase_molar_gibbs_energies(&self) -> ChemicalVector {
        self.phase_molar(|res| &res.standard_partial_molar_gibbs_energies)
    }

    /// [J/mol]
    pub fn phase_molar_enthalpies(&self) -> ChemicalVector {
        self.phase_molar(|res| &res.standard_partial_molar_enthalpies)
    }

    /// Molar volume of each phase [m³/mol].
    ///
    /// A volume supplied by the phase's chemical model is taken as-is.
    /// Otherwise the mole-fraction-weighted standard partial molar volumes are used.
    pub fn phase_molar_volumes(&self) -> ChemicalVector {
        let width = self.width();
        self.composition_ranges()
            .into_iter()
            .zip(&self.thermo.phases)
            .zip(&self.chemical.phases)
            .map(|((r, tres), cres)| match &cres.molar_volume {
                Some(v) => v.embed(r.start, width),
                None => self.weighted_sum(r, &tres.standard_partial_molar_volumes),
            })
            .collect()
    }

    /// `S = (H − G) / T` [J/(mol·K)].
    pub fn phase_molar_entropies(&self) -> ChemicalVector {
        let g = self.phase_molar_gibbs_energies();
        let h = self.phase_molar_enthalpies();
        &(&h - &g) / &ChemicalScalar::from(self.t_dual())
    }

    /// `U = H − P·V` [J/mol].
    pub fn phase_molar_internal_energies(&self) -> ChemicalVector {
        let h = self.phase_molar_enthalpies();
        let v = self.phase_molar_volumes();
        &h - &(&v * &ChemicalScalar::from(self.p_dual()))
    }

    /// `A = G − P·V` [J/mol].
    pub fn phase_molar_helmholtz_energies(&self) -> ChemicalVector {
        let g = self.phase_molar_gibbs_energies();
        let v = self.phase_molar_volumes();
        &g - &(&v * &ChemicalScalar::from(self.p_dual()))
    }

    /// [J/(mol·K)]
    pub fn phase_molar_heat_capacities_cp(&self) -> ChemicalVector {
        self.phase_molar(|res| &res.standard_partial_molar_heat_capacities_cp)
    }

    /// [J/(mol·K)]
    pub fn phase_molar_heat_capacities_cv(&self) -> ChemicalVector {
        self.phase_molar(|res| &res.standard_partial_molar_heat_capacities_cv)
    }

    // Phase specific properties (per unit mass)

    /// [J/kg]
    pub fn phase_specific_gibbs_energies(&self) -> ChemicalVector {
        self.specific(self.phase_molar_gibbs_energies())
    }

    /// [J/kg]
    pub fn phase_specific_enthalpies(&self) -> ChemicalVector {
        self.specific(self.phase_molar_enthalpies())
    }

    /// [m³/kg]
    pub fn phase_specific_volumes(&self) -> ChemicalVector {
        self.specific(self.phase_molar_volumes())
    }

    /// [J/(kg·K)]
    pub fn phase_specific_entropies(&self) -> ChemicalVector {
        self.specific(self.phase_molar_entropies())
    }

    /// [J/kg]
    pub fn phase_specific_internal_energies(&self) -> ChemicalVector {
        self.specific(self.phase_molar_internal_energies())
    }

    /// [J/kg]
    pub fn phase_specific_helmholtz_energies(&self) -> ChemicalVector {
        self.specific(self.phase_molar_helmholtz_energies())
    }

    /// [J/(kg·K)]
    pub fn phase_specific_heat_capacities_cp(&self) -> ChemicalVector {
        self.specific(self.phase_molar_heat_capacities_cp())
    }

    /// [J/(kg·K)]
    pub fn phase_specific_heat_capacities_cv(&self) -> ChemicalVector {
        self.specific(self.phase_molar_heat_capacities_cv())
    }

    // Phase extensive properties

    /// [kg/m³]
    pub fn phase_densities(&self) -> ChemicalVector {
        &self.phase_masses() / &self.phase_volumes()
    }

    /// `Σ n_i·M_i` over each phase [kg].
    pub fn phase_masses(&self) -> ChemicalVector {
        let amounts = composition(&self.n);
        let molar_masses = self.system.molar_masses().as_slice();
        self.composition_ranges()
            .into_iter()
            .map(|r| {
                let m = ChemicalVector::constants(&molar_masses[r.clone()]);
                (&amounts.rows(r) * &m).sum()
            })
            .collect()
    }

    /// `Σ n_i` over each phase [mol].
    pub fn phase_amounts(&self) -> ChemicalVector {
        let amounts = composition(&self.n);
        self.composition_ranges()
            .into_iter()
            .map(|r| amounts.rows(r).sum())
            .collect()
    }

    /// Phase amount times phase molar volume [m³].
    pub fn phase_volumes(&self) -> ChemicalVector {
        &self.phase_amounts() * &self.phase_molar_volumes()
    }

    // System properties

    /// Total volume of all phases [m³].
    pub fn volume(&self) -> ChemicalScalar {
        self.phase_volumes().sum()
    }

    /// Total amount of all species [mol].
    pub fn amount(&self) -> ChemicalScalar {
        self.phase_amounts().sum()
    }

    /// Total mass of all species [kg].
    pub fn mass(&self) -> ChemicalScalar {
        self.phase_masses().sum()
    }

    fn t_dual(&self) -> ThermoScalar {
        ThermoScalar::temperature(self.t)
    }

    fn p_dual(&self) -> ThermoScalar {
        ThermoScalar::pressure(self.p)
    }

    fn width(&self) -> usize {
        self.system.num_species()
    }

    /// Species ranges of every phase, or none while no composition update has
    /// produced results for this system.
    fn composition_ranges(&self) -> Vec<Range<usize>> {
        let phases = self.system.num_phases();
        let ready = self.n.len() == self.system.num_species()
            && self.thermo.num_phases() == phases
            && self.chemical.num_phases() == phases;
        if ready {
            self.system.partition().ranges().collect()
        } else {
            Vec::new()
        }
    }

    fn gather_chemical<F>(&self, f: F) -> ChemicalVector
    where
        F: Fn(&PhaseChemicalModelResult) -> &ChemicalVector,
    {
        let width = self.width();
        let mut out = ChemicalVector::default();
        for (r, res) in self.composition_ranges().into_iter().zip(&self.chemical.phases) {
            out.extend_from(&f(res).embed(r.start, width));
        }
        out
    }

    fn phase_molar<F>(&self, f: F) -> ChemicalVector
    where
        F: Fn(&PhaseThermoModelResult) -> &ThermoVector,
    {
        self.composition_ranges()
            .into_iter()
            .zip(&self.thermo.phases)
            .map(|(r, res)| self.weighted_sum(r, f(res)))
            .collect()
    }

    /// `Σ x_i·prop_i` over the phase occupying `r`, with system-wide `dn`.
    fn weighted_sum(&self, r: Range<usize>, prop: &ThermoVector) -> ChemicalScalar {
        let x = molar_fractions(&self.n[r.clone()]);
        (&x * &ChemicalVector::from(prop))
            .sum()
            .embed(r.start, self.width())
    }

    fn specific(&self, molar: ChemicalVector) -> ChemicalVector {
        let per_mass = &self.phase_amounts() / &self.phase_masses();
        &per_mass * &molar
    }
}
