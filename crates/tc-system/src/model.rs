//! Phase model seams and the records they produce.
//!
//! A thermo model maps (T, P) to standard partial molar properties of the
//! species of one phase. A chemical model maps (T, P, n) to activity-related
//! quantities of the same species. Both are opaque to the aggregation engine,
//! which only relies on the array lengths matching the phase size.

use tc_core::units::{Pressure, Temperature};
use tc_core::{ChemicalScalar, ChemicalVector, Real, ThermoVector};

use crate::error::{SystemError, SystemResult};

/// Standard partial molar properties of the species of one phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseThermoModelResult {
    /// [J/mol]
    pub standard_partial_molar_gibbs_energies: ThermoVector,
    /// [J/mol]
    pub standard_partial_molar_enthalpies: ThermoVector,
    /// [m³/mol]
    pub standard_partial_molar_volumes: ThermoVector,
    /// [J/(mol·K)]
    pub standard_partial_molar_heat_capacities_cp: ThermoVector,
    /// [J/(mol·K)]
    pub standard_partial_molar_heat_capacities_cv: ThermoVector,
}

impl PhaseThermoModelResult {
    /// All properties zero for `len` species.
    pub fn zeros(len: usize) -> Self {
        Self {
            standard_partial_molar_gibbs_energies: ThermoVector::zeros(len),
            standard_partial_molar_enthalpies: ThermoVector::zeros(len),
            standard_partial_molar_volumes: ThermoVector::zeros(len),
            standard_partial_molar_heat_capacities_cp: ThermoVector::zeros(len),
            standard_partial_molar_heat_capacities_cv: ThermoVector::zeros(len),
        }
    }

    pub(crate) fn check_shape(&self, phase: &str, expected: usize) -> SystemResult<()> {
        let check = |what, actual| check_len(phase, what, expected, actual);
        check(
            "standard Gibbs energies",
            self.standard_partial_molar_gibbs_energies.len(),
        )?;
        check(
            "standard enthalpies",
            self.standard_partial_molar_enthalpies.len(),
        )?;
        check(
            "standard volumes",
            self.standard_partial_molar_volumes.len(),
        )?;
        check(
            "standard isobaric heat capacities",
            self.standard_partial_molar_heat_capacities_cp.len(),
        )?;
        check(
            "standard isochoric heat capacities",
            self.standard_partial_molar_heat_capacities_cv.len(),
        )
    }
}

/// Activity-related properties of the species of one phase.
///
/// Composition partials in `ln_activity_coefficients`, `ln_activities` and
/// `molar_volume` are with respect to the phase's own species amounts
/// (phase-local `dn`), or empty when the model does not track them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseChemicalModelResult {
    pub ln_activity_coefficients: ChemicalVector,
    /// Temperature/pressure-only part of the activities (e.g. ln(P/P°) for gases).
    pub ln_activity_constants: ThermoVector,
    pub ln_activities: ChemicalVector,
    /// Molar volume of the phase as computed by the model [m³/mol].
    ///
    /// `None` means the engine derives it from the standard partial molar volumes.
    pub molar_volume: Option<ChemicalScalar>,
}

impl PhaseChemicalModelResult {
    /// Ideal behaviour placeholders for `len` species: all logarithms zero,
    /// no molar volume.
    pub fn zeros(len: usize) -> Self {
        Self {
            ln_activity_coefficients: ChemicalVector::zeros(len),
            ln_activity_constants: ThermoVector::zeros(len),
            ln_activities: ChemicalVector::zeros(len),
            molar_volume: None,
        }
    }

    pub(crate) fn check_shape(&self, phase: &str, expected: usize) -> SystemResult<()> {
        let check = |what, actual| check_len(phase, what, expected, actual);
        check(
            "ln activity coefficients",
            self.ln_activity_coefficients.len(),
        )?;
        check("ln activity constants", self.ln_activity_constants.len())?;
        check("ln activities", self.ln_activities.len())?;

        // Composition partials must be absent or span exactly the phase species.
        let check_dn = |what, x: &ChemicalScalar| {
            let width = x.grad.dn.len();
            if width == 0 {
                Ok(())
            } else {
                check_len(phase, what, expected, width)
            }
        };
        for x in &self.ln_activity_coefficients {
            check_dn("ln activity coefficient composition partials", x)?;
        }
        for x in &self.ln_activities {
            check_dn("ln activity composition partials", x)?;
        }
        if let Some(v) = &self.molar_volume {
            check_dn("molar volume composition partials", v)?;
        }
        Ok(())
    }
}

fn check_len(phase: &str, what: &'static str, expected: usize, actual: usize) -> SystemResult<()> {
    if expected != actual {
        return Err(SystemError::ModelShape {
            phase: phase.to_string(),
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Thermo model results of every phase, in phase order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThermoModelResult {
    pub phases: Vec<PhaseThermoModelResult>,
}

/// Chemical model results of every phase, in phase order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChemicalModelResult {
    pub phases: Vec<PhaseChemicalModelResult>,
}

impl ThermoModelResult {
    pub fn num_phases(&self) -> usize {
        self.phases.len()
    }

    /// Concatenate one property of every phase into a system-wide vector.
    pub fn gather<F>(&self, f: F) -> ThermoVector
    where
        F: Fn(&PhaseThermoModelResult) -> &ThermoVector,
    {
        let mut out = ThermoVector::default();
        for phase in &self.phases {
            out.extend_from(f(phase));
        }
        out
    }
}

impl ChemicalModelResult {
    pub fn num_phases(&self) -> usize {
        self.phases.len()
    }
}

/// Standard thermodynamic model of a phase.
///
/// Implementations must be thread-safe; closures with the matching signature
/// implement this trait.
pub trait PhaseThermoModel: Send + Sync {
    fn evaluate(&self, t: Temperature, p: Pressure) -> SystemResult<PhaseThermoModelResult>;
}

/// Activity model of a phase, given the amounts of its species [mol].
pub trait PhaseChemicalModel: Send + Sync {
    fn evaluate(
        &self,
        t: Temperature,
        p: Pressure,
        n: &[Real],
    ) -> SystemResult<PhaseChemicalModelResult>;
}

impl<F> PhaseThermoModel for F
where
    F: Fn(Temperature, Pressure) -> SystemResult<PhaseThermoModelResult> + Send + Sync,
{
    fn evaluate(&self, t: Temperature, p: Pressure) -> SystemResult<PhaseThermoModelResult> {
        self(t, p)
    }
}

impl<F> PhaseChemicalModel for F
where
    F: Fn(Temperature, Pressure, &[Real]) -> SystemResult<PhaseChemicalModelResult> + Send + Sync,
{
    fn evaluate(
        &self,
        t: Temperature,
        p: Pressure,
        n: &[Real],
    ) -> SystemResult<PhaseChemicalModelResult> {
        self(t, p, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::{k, pa};
    use tc_core::ThermoScalar;

    #[test]
    fn shape_check_names_the_offending_array() {
        let mut res = PhaseThermoModelResult::zeros(3);
        assert!(res.check_shape("Aqueous", 3).is_ok());
        res.standard_partial_molar_volumes = ThermoVector::zeros(2);
        assert_eq!(
            res.check_shape("Aqueous", 3),
            Err(SystemError::ModelShape {
                phase: "Aqueous".into(),
                what: "standard volumes",
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn gather_concatenates_in_phase_order() {
        let mut a = PhaseThermoModelResult::zeros(1);
        a.standard_partial_molar_gibbs_energies = ThermoVector::constants(&[1.0]);
        let mut b = PhaseThermoModelResult::zeros(2);
        b.standard_partial_molar_gibbs_energies = ThermoVector::constants(&[2.0, 3.0]);
        let res = ThermoModelResult { phases: vec![a, b] };
        let g = res.gather(|p| &p.standard_partial_molar_gibbs_energies);
        assert_eq!(g.val().as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn closures_are_phase_models() {
        let thermo = |t: Temperature, _p: Pressure| -> SystemResult<PhaseThermoModelResult> {
            let mut res = PhaseThermoModelResult::zeros(1);
            res.standard_partial_molar_enthalpies =
                ThermoVector::new(vec![ThermoScalar::temperature(t.value) * 2.0]);
            Ok(res)
        };
        let res = thermo.evaluate(k(300.0), pa(1e5)).unwrap();
        assert_eq!(res.standard_partial_molar_enthalpies[0].ddt(), 2.0);

        let chemical =
            |_t: Temperature, _p: Pressure, n: &[Real]| -> SystemResult<PhaseChemicalModelResult> {
                Ok(PhaseChemicalModelResult::zeros(n.len()))
            };
        let res = chemical.evaluate(k(300.0), pa(1e5), &[1.0, 2.0]).unwrap();
        assert_eq!(res.ln_activities.len(), 2);
        assert!(res.molar_volume.is_none());
    }
}
