// tc-core/src/units.rs

use uom::si::f64::{
    MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

pub mod constants {
    /// Universal gas constant [J/(mol·K)].
    pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_462_618;

    /// Natural logarithm of 10, converts log10 K into ln K.
    pub const LN_10: f64 = core::f64::consts::LN_10;

    /// Standard-state reference pressure [Pa].
    pub const STANDARD_PRESSURE_PA: f64 = 1.0e5;
}
