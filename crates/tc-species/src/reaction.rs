//! Formation reactions.

use std::fmt;
use std::sync::Arc;

use tc_core::{Real, ThermoScalar};

use crate::thermo::{ReactionThermoModel, ReactionThermoProps};

/// One reactant of a formation reaction.
///
/// A negative coefficient places the species on the product side of the
/// written equation; fractional coefficients are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct Reactant {
    pub name: String,
    pub coefficient: Real,
}

/// Source of the property changes of a formation reaction.
#[derive(Clone, Default)]
pub enum ReactionCorrection {
    /// No corrections: the product is the plain stoichiometric sum.
    #[default]
    None,
    /// `ΔG0 = -R·T·ln(10)·log10 K`, other changes zero.
    EquilibriumConstant { lgk: Real },
    /// Arbitrary model of (T, P).
    Model(Arc<dyn ReactionThermoModel>),
}

impl fmt::Debug for ReactionCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionCorrection::None => write!(f, "None"),
            ReactionCorrection::EquilibriumConstant { lgk } => {
                write!(f, "EquilibriumConstant {{ lgk: {} }}", lgk)
            }
            ReactionCorrection::Model(_) => write!(f, "Model(..)"),
        }
    }
}

/// The reaction that defines a species from other species:
/// `Σ νᵢ·Reactantᵢ = Product`, with the product coefficient implicitly 1.
///
/// A species without a formation reaction holds the empty reaction, for which
/// every query is well-defined (empty product name, no reactants, zero
/// stoichiometry).
#[derive(Clone, Debug, Default)]
pub struct FormationReaction {
    product: String,
    reactants: Vec<Reactant>,
    correction: ReactionCorrection,
    product_standard_volume: Option<Real>,
}

impl FormationReaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the product species.
    ///
    /// May be left empty; the database fills in the owning species' name.
    pub fn with_product(mut self, name: impl Into<String>) -> Self {
        self.product = name.into();
        self
    }

    /// Reactant names with their stoichiometric coefficients, in order.
    pub fn with_reactants<I, S>(mut self, reactants: I) -> Self
    where
        I: IntoIterator<Item = (S, Real)>,
        S: Into<String>,
    {
        self.reactants = reactants
            .into_iter()
            .map(|(name, coefficient)| Reactant {
                name: name.into(),
                coefficient,
            })
            .collect();
        self
    }

    /// Standard molar volume of the product [m³/mol], used as-is instead of the
    /// stoichiometric sum.
    pub fn with_product_standard_volume(mut self, v0: Real) -> Self {
        self.product_standard_volume = Some(v0);
        self
    }

    /// Derive the Gibbs energy change from `log10 K` of the reaction.
    pub fn with_equilibrium_constant(mut self, lgk: Real) -> Self {
        self.correction = ReactionCorrection::EquilibriumConstant { lgk };
        self
    }

    /// Use a custom correction model. Replaces any equilibrium constant.
    pub fn with_reaction_thermo_model<M>(mut self, model: M) -> Self
    where
        M: ReactionThermoModel + 'static,
    {
        self.correction = ReactionCorrection::Model(Arc::new(model));
        self
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn reactants(&self) -> &[Reactant] {
        &self.reactants
    }

    /// Stoichiometric coefficient of the named reactant (0.0 if absent).
    pub fn stoichiometry(&self, name: &str) -> Real {
        self.reactants
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.coefficient)
            .unwrap_or(0.0)
    }

    pub fn correction(&self) -> &ReactionCorrection {
        &self.correction
    }

    /// True if the reaction carries an equilibrium constant or a custom model.
    pub fn has_reaction_thermo_model(&self) -> bool {
        !matches!(self.correction, ReactionCorrection::None)
    }

    pub fn product_standard_volume(&self) -> Option<Real> {
        self.product_standard_volume
    }

    /// True for the placeholder reaction of a species defined by literal data.
    pub fn is_empty(&self) -> bool {
        self.product.is_empty()
            && self.reactants.is_empty()
            && !self.has_reaction_thermo_model()
            && self.product_standard_volume.is_none()
    }

    /// Evaluate the property changes of the reaction at (T, P).
    pub fn corrections(&self, t: ThermoScalar, p: ThermoScalar) -> ReactionThermoProps {
        match &self.correction {
            ReactionCorrection::None => ReactionThermoProps::default(),
            ReactionCorrection::EquilibriumConstant { lgk } => {
                ReactionThermoProps::from_equilibrium_constant(*lgk, t)
            }
            ReactionCorrection::Model(model) => model.evaluate(t, p),
        }
    }

    pub(crate) fn set_product(&mut self, name: &str) {
        self.product = name.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reaction_queries_are_defined() {
        let r = FormationReaction::new();
        assert!(r.is_empty());
        assert_eq!(r.product(), "");
        assert!(r.reactants().is_empty());
        assert_eq!(r.stoichiometry("A"), 0.0);
        assert!(!r.has_reaction_thermo_model());
        let c = r.corrections(ThermoScalar::temperature(300.0), ThermoScalar::pressure(1e5));
        assert_eq!(c, ReactionThermoProps::default());
    }

    #[test]
    fn stoichiometry_keeps_sign_and_order() {
        let r = FormationReaction::new()
            .with_product("E")
            .with_reactants([("C", 1.0), ("D", -2.0)]);
        assert_eq!(r.reactants()[0].name, "C");
        assert_eq!(r.reactants()[1].name, "D");
        assert_eq!(r.stoichiometry("C"), 1.0);
        assert_eq!(r.stoichiometry("D"), -2.0);
        assert_eq!(r.stoichiometry("Z"), 0.0);
        assert!(!r.is_empty());
    }

    #[test]
    fn custom_model_replaces_equilibrium_constant() {
        let r = FormationReaction::new()
            .with_equilibrium_constant(5.0)
            .with_reaction_thermo_model(|_t: ThermoScalar, _p: ThermoScalar| {
                ReactionThermoProps {
                    dh0: ThermoScalar::constant(42.0),
                    ..ReactionThermoProps::default()
                }
            });
        assert!(r.has_reaction_thermo_model());
        let c = r.corrections(ThermoScalar::temperature(300.0), ThermoScalar::pressure(1e5));
        assert_eq!(c.dg0.val, 0.0);
        assert_eq!(c.dh0.val, 42.0);
    }
}
