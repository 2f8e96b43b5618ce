//! Integration tests for formation-reaction resolution.

use tc_core::constants::{LN_10, UNIVERSAL_GAS_CONSTANT as R};
use tc_core::numeric::{Tolerances, nearly_equal};
use tc_core::units::{k, pa};
use tc_core::ThermoScalar;
use tc_species::{
    DatabaseBuilder, FormationReaction, ReactionThermoProps, Species, SpeciesDatabase,
    SpeciesError,
};

const LGK_C: f64 = 1.234;
const LGK_D: f64 = 2.345;
const LGK_E: f64 = 3.456;

const DH0_D: f64 = 234.5;
const DH0_E: f64 = 345.6;

const V0_C: f64 = 16.324;
const V0_D: f64 = 17.435;
const V0_E: f64 = 18.546;

fn tol() -> Tolerances {
    Tolerances::new(1e-9, 1e-10)
}

/// A + 2B = C, B + 3C = D, C - 2D = E (three levels of recursion).
fn chain() -> SpeciesDatabase {
    let mut b = DatabaseBuilder::new();
    b.add(Species::new("A").with_standard_gibbs_energy(0.0));
    b.add(Species::new("B").with_standard_gibbs_energy(0.0));
    b.add(Species::new("C").with_formation_reaction(
        FormationReaction::new()
            .with_product("C")
            .with_reactants([("A", 1.0), ("B", 2.0)])
            .with_product_standard_volume(V0_C)
            .with_equilibrium_constant(LGK_C),
    ));
    b.add(Species::new("D").with_formation_reaction(
        FormationReaction::new()
            .with_product("D")
            .with_reactants([("B", 1.0), ("C", 3.0)])
            .with_product_standard_volume(V0_D)
            .with_reaction_thermo_model(|t: ThermoScalar, _p: ThermoScalar| {
                ReactionThermoProps {
                    dh0: ThermoScalar::constant(DH0_D),
                    ..ReactionThermoProps::from_equilibrium_constant(LGK_D, t)
                }
            }),
    ));
    b.add(Species::new("E").with_formation_reaction(
        FormationReaction::new()
            .with_product("E")
            .with_reactants([("C", 1.0), ("D", -2.0)])
            .with_product_standard_volume(V0_E)
            .with_reaction_thermo_model(|t: ThermoScalar, _p: ThermoScalar| {
                ReactionThermoProps {
                    dh0: ThermoScalar::constant(DH0_E),
                    ..ReactionThermoProps::from_equilibrium_constant(LGK_E, t)
                }
            }),
    ));
    b.build().unwrap()
}

#[test]
fn reaction_queries() {
    let db = chain();

    for name in ["A", "B"] {
        let s = db.by_name(name).unwrap();
        assert_eq!(s.reaction().product(), "");
        assert!(s.reaction().reactants().is_empty());
        assert!(!s.reaction().has_reaction_thermo_model());
    }

    let e = db.by_name("E").unwrap().reaction();
    assert_eq!(e.product(), "E");
    assert_eq!(e.reactants().len(), 2);
    assert_eq!(e.reactants()[0].name, "C");
    assert_eq!(e.reactants()[1].name, "D");
    assert_eq!(e.stoichiometry("C"), 1.0);
    assert_eq!(e.stoichiometry("D"), -2.0);
    assert!(e.has_reaction_thermo_model());
}

#[test]
fn species_without_reaction_cannot_be_resolved() {
    let db = chain();
    for name in ["A", "B"] {
        let id = db.id_of(name).unwrap();
        assert!(matches!(
            db.standard_thermo_model(id),
            Err(SpeciesError::NoFormationReaction { .. })
        ));
    }
}

#[test]
fn three_level_chain_resolves_gibbs_and_enthalpy() {
    let db = chain();
    let (t, p) = (300.0, 1.0e5);

    let g0_c = -R * t * LN_10 * LGK_C;
    let g0_d = 3.0 * g0_c - R * t * LN_10 * LGK_D;
    let g0_e = g0_c - 2.0 * g0_d - R * t * LN_10 * LGK_E;

    let h0_c = 0.0;
    let h0_d = 3.0 * h0_c + DH0_D;
    let h0_e = h0_c - 2.0 * h0_d + DH0_E;

    let eval = |name: &str| {
        let id = db.id_of(name).unwrap();
        db.standard_thermo_model(id)
            .unwrap()
            .evaluate(k(t), pa(p))
            .unwrap()
    };

    let c = eval("C");
    let d = eval("D");
    let e = eval("E");

    assert!(nearly_equal(c.g0.val, g0_c, tol()));
    assert!(nearly_equal(d.g0.val, g0_d, tol()));
    assert!(nearly_equal(e.g0.val, g0_e, tol()));

    assert!(nearly_equal(c.h0.val, h0_c, tol()));
    assert!(nearly_equal(d.h0.val, h0_d, tol()));
    assert!(nearly_equal(e.h0.val, h0_e, tol()));

    assert_eq!(c.v0.val, V0_C);
    assert_eq!(d.v0.val, V0_D);
    assert_eq!(e.v0.val, V0_E);
}

#[test]
fn temperature_partials_follow_the_chain() {
    let db = chain();
    let e = db.id_of("E").unwrap();
    let props = db.standard_thermo_props(e, k(300.0), pa(1.0e5)).unwrap();

    // Every ΔG0 is linear in T, so G0(E) / T is its T derivative.
    assert!(nearly_equal(props.g0.ddt(), props.g0.val / 300.0, tol()));
    assert_eq!(props.h0.ddt(), 0.0);
}

#[test]
fn diamond_shares_reactants() {
    let mut b = DatabaseBuilder::new();
    b.add(Species::new("A").with_standard_gibbs_energy(-1.0));
    b.add(Species::new("B").with_formation_reaction(
        FormationReaction::new().with_reactants([("A", 2.0)]),
    ));
    b.add(Species::new("C").with_formation_reaction(
        FormationReaction::new().with_reactants([("A", 3.0)]),
    ));
    let d = b.add(Species::new("D").with_formation_reaction(
        FormationReaction::new().with_reactants([("B", 1.0), ("C", 0.5)]),
    ));
    let db = b.build().unwrap();

    let props = db.standard_thermo_props(d, k(298.15), pa(1.0e5)).unwrap();
    assert!(nearly_equal(props.g0.val, -2.0 - 1.5, tol()));
}

#[test]
fn cyclic_graph_fails_fast() {
    let mut b = DatabaseBuilder::new();
    b.add(Species::new("A"));
    let x = b.add(Species::new("X").with_formation_reaction(
        FormationReaction::new().with_reactants([("A", 1.0), ("Y", 1.0)]),
    ));
    let y = b.add(Species::new("Y").with_formation_reaction(
        FormationReaction::new().with_reactants([("X", 1.0)]),
    ));
    let db = b.build().unwrap();

    let err = db.standard_thermo_model(x).unwrap_err();
    assert_eq!(
        err,
        SpeciesError::CyclicReaction {
            species: "X".into(),
            path: vec!["X".into(), "Y".into(), "X".into()],
        }
    );
    assert!(matches!(
        db.standard_thermo_props(y, k(300.0), pa(1.0e5)),
        Err(SpeciesError::CyclicReaction { .. })
    ));
}

#[test]
fn deep_chain_resolves() {
    let mut b = DatabaseBuilder::new();
    b.add(Species::new("S0").with_standard_enthalpy(1.0));
    for i in 1..200 {
        b.add(Species::new(format!("S{i}")).with_formation_reaction(
            FormationReaction::new().with_reactants([(format!("S{}", i - 1), 1.0)]),
        ));
    }
    let db = b.build().unwrap();
    let last = db.id_of("S199").unwrap();
    let props = db.standard_thermo_model(last).unwrap().evaluate(k(300.0), pa(1.0e5)).unwrap();
    assert_eq!(props.h0.val, 1.0);
}
