//! Integration tests for tc-system.

use std::sync::Arc;

use tc_core::units::{Pressure, Temperature, g_per_mol, k, pa};
use tc_species::{DatabaseBuilder, FormationReaction, Species};
use tc_system::{
    ChemicalSystem, IdealGasModel, Phase, PhaseThermoModelResult, StandardThermoPhaseModel,
    SystemError, SystemResult,
};

fn database() -> Arc<tc_species::SpeciesDatabase> {
    let mut b = DatabaseBuilder::new();
    b.add(
        Species::new("H2O(aq)")
            .with_molar_mass(g_per_mol(18.015))
            .with_standard_gibbs_energy(-237.1e3),
    );
    b.add(Species::new("H+(aq)").with_molar_mass(g_per_mol(1.008)));
    b.add(
        Species::new("OH-(aq)")
            .with_molar_mass(g_per_mol(17.007))
            .with_formation_reaction(
                FormationReaction::new()
                    .with_reactants([("H2O(aq)", 1.0), ("H+(aq)", -1.0)])
                    .with_equilibrium_constant(-14.0),
            ),
    );
    b.add(
        Species::new("CO2(g)")
            .with_molar_mass(g_per_mol(44.01))
            .with_standard_gibbs_energy(-394.4e3),
    );
    b.add(
        Species::new("O2(g)")
            .with_molar_mass(g_per_mol(31.998))
            .with_standard_gibbs_energy(0.0),
    );
    Arc::new(b.build().unwrap())
}

fn system() -> ChemicalSystem {
    let db = database();
    let aqueous = StandardThermoPhaseModel::new(db.clone(), ["H2O(aq)", "H+(aq)", "OH-(aq)"])
        .unwrap()
        .into_phase("Aqueous");
    let gaseous = StandardThermoPhaseModel::new(db, ["CO2(g)", "O2(g)"])
        .unwrap()
        .into_phase("Gaseous")
        .with_chemical_model(IdealGasModel);
    ChemicalSystem::new(vec![aqueous, gaseous]).unwrap()
}

#[test]
fn database_phases_build_a_partitioned_system() {
    let sys = system();
    assert_eq!(sys.num_phases(), 2);
    assert_eq!(sys.num_species(), 5);
    assert_eq!(sys.partition().phase_range(1), 3..5);
    assert_eq!(sys.index_species("O2(g)"), Some(4));
    assert!((sys.molar_masses()[2] - 0.017007).abs() < 1e-12);
}

#[test]
fn phase_models_evaluate_in_phase_order() {
    let sys = system();
    let thermo = sys.thermo_model_result(k(298.15), pa(1.0e5)).unwrap();
    assert_eq!(thermo.num_phases(), 2);
    let g0 = thermo.gather(|res| &res.standard_partial_molar_gibbs_energies);
    assert_eq!(g0.len(), 5);
    assert!(g0[2].val > g0[0].val);
    assert_eq!(g0[3].val, -394.4e3);

    let chemical = sys
        .chemical_model_result(k(298.15), pa(2.0e5), &[55.5, 1e-7, 1e-7, 0.5, 0.5])
        .unwrap();
    assert!(chemical.phases[0].molar_volume.is_none());
    assert!(chemical.phases[1].molar_volume.is_some());
    // Phase-local composition partials: two gas species.
    assert_eq!(chemical.phases[1].ln_activities[0].ddn().len(), 2);
}

#[test]
fn out_of_range_phase_is_a_recoverable_error_on_the_checked_path() {
    let sys = system();
    assert_eq!(
        sys.partition().checked_phase_range(2),
        Err(SystemError::PhaseIndexOob { index: 2, len: 2 })
    );
}

#[test]
fn model_failures_propagate_from_evaluation() {
    let failing = |_t: Temperature, _p: Pressure| -> SystemResult<PhaseThermoModelResult> {
        Err(SystemError::Model {
            what: "solid thermo",
            message: "temperature outside fitted range".into(),
        })
    };
    let solid = Phase::new("Solid")
        .with_species([Species::new("Calcite").with_molar_mass(g_per_mol(100.087))])
        .with_thermo_model(failing);
    let sys = ChemicalSystem::new(vec![solid]).unwrap();
    let err = sys.thermo_model_result(k(5000.0), pa(1e5)).unwrap_err();
    assert!(matches!(err, SystemError::Model { what: "solid thermo", .. }));
}
