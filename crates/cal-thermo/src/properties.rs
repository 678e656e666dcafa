//! Derived properties, temperature inversion and property packs.

use crate::eos::EquationOfState;
use crate::error::{ThermoError, ThermoResult};
use crate::thermo::{Thermo, ThermoState};
use cal_core::units::{Density, Pressure, Temperature, kgpm3};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Relative tolerance of the temperature inversion.
pub const T_TOL: f64 = 1.0e-4;

/// Iteration cap of the temperature inversion.
pub const T_MAX_ITER: usize = 100;

/// Properties of one state evaluated in a single pass.
#[derive(Clone, Debug)]
pub struct ThermoPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Density [kg/m³]
    pub rho: Density,

    /// Specific heat capacity at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,

    /// Specific heat capacity at constant volume [J/(kg·K)]
    pub cv: SpecHeatCapacity,

    /// Heat capacity ratio γ = cp/cv (dimensionless)
    pub gamma: f64,

    /// Absolute enthalpy [J/kg]
    pub ha: SpecEnthalpy,

    /// Sensible enthalpy [J/kg]
    pub hs: SpecEnthalpy,

    /// Chemical enthalpy [J/kg]
    pub hc: SpecEnthalpy,

    /// Entropy [J/(kg·K)]
    pub s: SpecEntropy,
}

impl ThermoPropertyPack {
    /// Return a summary string of all contained properties (for logs and the CLI).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.2}K,ρ={:.4}kg/m³,cp={:.2}J/kg·K,cv={:.2}J/kg·K,γ={:.4},ha={:.1}J/kg,hs={:.1}J/kg,hc={:.1}J/kg,s={:.3}J/kg·K)",
            self.p.value,
            self.t.value,
            self.rho.value,
            self.cp,
            self.cv,
            self.gamma,
            self.ha,
            self.hs,
            self.hc,
            self.s
        )
    }
}

/// Derived properties of a closure that also knows its density.
///
/// `cv`, `gamma`, internal energies, temperature inversion and property packs
/// are provided on top of the [`Thermo`] capability.
pub trait ThermoProperties: Thermo {
    /// Density [kg/m³].
    fn rho(&self, p: f64, t: f64) -> f64;

    /// `cp − cv` [J/(kg·K)].
    fn cp_m_cv(&self, p: f64, t: f64) -> f64;

    /// Specific heat at constant volume [J/(kg·K)].
    fn cv(&self, p: f64, t: f64) -> f64 {
        self.cp(p, t) - self.cp_m_cv(p, t)
    }

    /// Heat capacity ratio cp/cv.
    fn gamma(&self, p: f64, t: f64) -> f64 {
        let cp = self.cp(p, t);
        cp / (cp - self.cp_m_cv(p, t))
    }

    /// Sensible internal energy [J/kg].
    fn es(&self, p: f64, t: f64) -> f64 {
        self.hs(p, t) - p / self.rho(p, t)
    }

    /// Absolute internal energy [J/kg].
    fn ea(&self, p: f64, t: f64) -> f64 {
        self.ha(p, t) - p / self.rho(p, t)
    }

    /// Temperature from sensible enthalpy, starting at `t0`.
    fn t_hs(&self, hs: f64, p: f64, t0: f64) -> ThermoResult<f64> {
        invert_t(self, hs, p, t0, "temperature from sensible enthalpy", Self::hs)
    }

    /// Temperature from absolute enthalpy, starting at `t0`.
    fn t_ha(&self, ha: f64, p: f64, t0: f64) -> ThermoResult<f64> {
        invert_t(self, ha, p, t0, "temperature from absolute enthalpy", Self::ha)
    }

    /// Evaluate a complete property pack at a validated `(p, T)`.
    fn property_pack(&self, p: Pressure, t: Temperature) -> ThermoResult<ThermoPropertyPack> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;
        let (pv, tv) = (p.value, t.value);
        let rho = self.rho(pv, tv);
        validation::validate_density(rho)?;
        let cp = self.cp(pv, tv);
        let cv = self.cv(pv, tv);
        Ok(ThermoPropertyPack {
            p,
            t,
            rho: kgpm3(rho),
            cp,
            cv,
            gamma: cp / cv,
            ha: self.ha(pv, tv),
            hs: self.hs(pv, tv),
            hc: self.hc(),
            s: self.s(pv, tv),
        })
    }
}

impl<E: EquationOfState> ThermoProperties for ThermoState<E> {
    fn rho(&self, p: f64, t: f64) -> f64 {
        self.eos().rho(p, t)
    }

    fn cp_m_cv(&self, p: f64, t: f64) -> f64 {
        self.eos().cp_m_cv(p, t)
    }
}

/// Newton iteration on `F(p, T) = f` with `dF/dT = cp`, passing every
/// iterate through [`Thermo::limit`].
fn invert_t<T: Thermo + ?Sized>(
    thermo: &T,
    f: f64,
    p: f64,
    t0: f64,
    what: &'static str,
    func: fn(&T, f64, f64) -> f64,
) -> ThermoResult<f64> {
    if !t0.is_finite() || t0 <= 0.0 {
        return Err(ThermoError::TemperatureDomain { t: t0 });
    }
    let t_tol = t0 * T_TOL;
    let mut t_new = t0;
    for _ in 0..T_MAX_ITER {
        let t_est = t_new;
        t_new = thermo.limit(t_est - (func(thermo, p, t_est) - f) / thermo.cp(p, t_est));
        if !t_new.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "temperature iterate must be finite",
            });
        }
        if (t_new - t_est).abs() <= t_tol {
            return Ok(t_new);
        }
    }
    Err(ThermoError::ConvergenceFailed {
        what,
        iterations: T_MAX_ITER,
    })
}

/// Validation helpers for property inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> ThermoResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> ThermoResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(ThermoError::TemperatureDomain { t: t.value });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: f64) -> ThermoResult<()> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }
}
