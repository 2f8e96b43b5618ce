//! Species amounts and mole fractions as differentiable vectors.

use tc_core::{ChemicalScalar, ChemicalVector, Real};
use tracing::debug;

/// Species amounts [mol] as independent variables: entry `i` has `dn = e_i`.
pub fn composition(n: &[Real]) -> ChemicalVector {
    let width = n.len();
    n.iter()
        .enumerate()
        .map(|(i, &ni)| ChemicalScalar::amount(ni, i, width))
        .collect()
}

/// Mole fractions `x_i = n_i / Σ n` with exact partials in T, P and n.
///
/// A single species has `x = 1` regardless of its amount. When the amounts sum
/// to zero every fraction is zero rather than `0 / 0`, so a depleted phase does
/// not poison downstream properties with NaN.
pub fn molar_fractions(n: &[Real]) -> ChemicalVector {
    if n.len() == 1 {
        return ChemicalVector::new(vec![ChemicalScalar::constant(1.0)]);
    }

    let total: Real = n.iter().sum();
    if total == 0.0 {
        if !n.is_empty() {
            debug!(species = n.len(), "zero total amount, mole fractions set to zero");
        }
        return ChemicalVector::zeros(n.len());
    }

    let amounts = composition(n);
    let total = amounts.sum();
    &amounts / &total
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn amounts_are_seeded() {
        let n = composition(&[1.0, 2.0]);
        assert_eq!(n.val().as_slice(), &[1.0, 2.0]);
        assert_eq!(n[1].ddn().as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn fractions_and_partials() {
        let x = molar_fractions(&[1.0, 3.0]);
        let tol = Tolerances::default();
        assert!(nearly_equal(x[0].val, 0.25, tol));
        assert!(nearly_equal(x[1].val, 0.75, tol));
        // dx0/dn0 = (N - n0)/N², dx0/dn1 = -n0/N²
        assert!(nearly_equal(x[0].ddn()[0], 3.0 / 16.0, tol));
        assert!(nearly_equal(x[0].ddn()[1], -1.0 / 16.0, tol));
        assert_eq!(x[0].ddt(), 0.0);
    }

    #[test]
    fn single_species_is_pure() {
        let x = molar_fractions(&[0.0]);
        assert_eq!(x.len(), 1);
        assert_eq!(x[0].val, 1.0);
        assert!(x[0].ddn().is_empty());
    }

    #[test]
    fn zero_total_gives_zero_fractions() {
        let x = molar_fractions(&[0.0, 0.0, 0.0]);
        assert_eq!(x.val().as_slice(), &[0.0, 0.0, 0.0]);
        assert!(x.iter().all(|xi| xi.is_finite()));
    }

    #[test]
    fn empty_phase() {
        assert!(molar_fractions(&[]).is_empty());
    }
}
