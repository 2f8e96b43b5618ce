//! Standard-state property records and reaction correction models.

use tc_core::constants::{LN_10, UNIVERSAL_GAS_CONSTANT};
use tc_core::{Real, ThermoScalar};

/// Literal standard-state data of a species, as tabulated in a database.
///
/// Units: J/mol for energies, m³/mol for volume, J/(mol·K) for heat capacities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardThermoData {
    pub g0: Real,
    pub h0: Real,
    pub v0: Real,
    pub cp0: Real,
    pub cv0: Real,
}

impl StandardThermoData {
    /// The same data as T/P-independent differentiable values.
    pub fn to_props(&self) -> StandardThermoProps {
        StandardThermoProps {
            g0: ThermoScalar::constant(self.g0),
            h0: ThermoScalar::constant(self.h0),
            v0: ThermoScalar::constant(self.v0),
            cp0: ThermoScalar::constant(self.cp0),
            cv0: ThermoScalar::constant(self.cv0),
        }
    }
}

/// Standard-state properties of a species at some (T, P), with exact T/P partials.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardThermoProps {
    /// Standard molar Gibbs energy [J/mol].
    pub g0: ThermoScalar,
    /// Standard molar enthalpy [J/mol].
    pub h0: ThermoScalar,
    /// Standard molar volume [m³/mol].
    pub v0: ThermoScalar,
    /// Standard molar isobaric heat capacity [J/(mol·K)].
    pub cp0: ThermoScalar,
    /// Standard molar isochoric heat capacity [J/(mol·K)].
    pub cv0: ThermoScalar,
}

impl StandardThermoProps {
    /// Standard molar entropy `S0 = (H0 - G0) / T` [J/(mol·K)].
    pub fn s0(&self, t: ThermoScalar) -> ThermoScalar {
        (self.h0 - self.g0) / t
    }
}

/// Property changes of a formation reaction at some (T, P).
///
/// Fields left at their default are zero corrections.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReactionThermoProps {
    pub dg0: ThermoScalar,
    pub dh0: ThermoScalar,
    pub dv0: ThermoScalar,
    pub dcp0: ThermoScalar,
    pub dcv0: ThermoScalar,
}

impl ReactionThermoProps {
    /// Corrections implied by an equilibrium constant: `ΔG0 = -R·T·ln(10)·log10 K`,
    /// every other change zero.
    pub fn from_equilibrium_constant(lgk: Real, t: ThermoScalar) -> Self {
        Self {
            dg0: -UNIVERSAL_GAS_CONSTANT * LN_10 * lgk * t,
            ..Self::default()
        }
    }
}

/// A reaction-specific correction model evaluated at (T, P).
///
/// `t` and `p` arrive seeded as independent variables, so any arithmetic the
/// model performs on them yields exact partials. Closures with the matching
/// signature implement this trait.
pub trait ReactionThermoModel: Send + Sync {
    fn evaluate(&self, t: ThermoScalar, p: ThermoScalar) -> ReactionThermoProps;
}

impl<F> ReactionThermoModel for F
where
    F: Fn(ThermoScalar, ThermoScalar) -> ReactionThermoProps + Send + Sync,
{
    fn evaluate(&self, t: ThermoScalar, p: ThermoScalar) -> ReactionThermoProps {
        self(t, p)
    }
}
