// cal-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
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
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Standard conditions and the universal gas constant.
///
/// Shared by every model so that no state carries its own copy.
pub mod constants {
    /// Standard pressure [Pa]
    pub const P_STD_PA: f64 = 1.0e5;

    /// Standard temperature [K]
    pub const T_STD_K: f64 = 298.15;

    /// Universal gas constant [J/(kmol·K)]
    pub const RR: f64 = 8314.462618;
}
