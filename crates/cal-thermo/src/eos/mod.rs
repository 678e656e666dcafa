//! Equation-of-state capability.
//!
//! An equation of state supplies the pressure/temperature-dependent
//! contributions to specific heat, enthalpy and entropy, the amount of
//! substance it represents, and its own mixing operators. The constant-Cp
//! layer in [`crate::thermo`] is generic over this trait and only composes
//! with it.
//!
//! Implementations:
//! - [`PerfectGas`]: `rho = p/(R·T)`, entropy `−R·ln(p/p_std)`
//! - [`RhoConst`]: constant density liquid/solid
//! - [`IncompressiblePerfectGas`]: density from a fixed reference pressure

mod incompressible_perfect_gas;
mod perfect_gas;
mod rho_const;

pub use incompressible_perfect_gas::IncompressiblePerfectGas;
pub use perfect_gas::PerfectGas;
pub use rho_const::RhoConst;

use crate::error::{ThermoError, ThermoResult};
use crate::record::{EosKind, EosRecord};
use crate::specie::Specie;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Capability every equation of state offers to the thermodynamic layer.
///
/// Pressure is in Pa, temperature in K, specific quantities per kg.
///
/// Mixing operators:
/// - `a += &b` / `a + b`: absorb `b`'s amount of substance
/// - `a -= &b` / `a - b`: remove `b`'s amount of substance
/// - `a * s`: scale the amount of substance by `s`
pub trait EquationOfState:
    Clone
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    /// Record tag of this equation of state.
    const KIND: EosKind;

    fn specie(&self) -> &Specie;

    fn name(&self) -> &str {
        self.specie().name()
    }

    /// Amount of substance [kmol].
    fn n_moles(&self) -> f64 {
        self.specie().n_moles()
    }

    /// Molecular weight [kg/kmol].
    fn w(&self) -> f64 {
        self.specie().w()
    }

    /// Specific gas constant [J/(kg·K)].
    fn r(&self) -> f64 {
        self.specie().r()
    }

    /// Deep copy carrying a new name.
    fn renamed(&self, name: &str) -> Self;

    /// Density [kg/m³].
    fn rho(&self, p: f64, t: f64) -> f64;

    /// Enthalpy contribution [J/kg].
    fn h(&self, p: f64, t: f64) -> f64;

    /// Specific heat contribution [J/(kg·K)].
    fn cp(&self, p: f64, t: f64) -> f64;

    /// Entropy contribution [J/(kg·K)].
    fn s(&self, p: f64, t: f64) -> f64;

    /// Compressibility `d(rho)/dp` [s²/m²].
    fn psi(&self, p: f64, t: f64) -> f64;

    /// Compression factor [-].
    fn z(&self, p: f64, t: f64) -> f64;

    /// `cp − cv` [J/(kg·K)].
    fn cp_m_cv(&self, p: f64, t: f64) -> f64;

    /// Build from a specie and the equation-of-state section of a record.
    fn from_record(specie: Specie, record: &EosRecord) -> ThermoResult<Self>;

    /// Equation-of-state section of a record describing `self`.
    fn to_record(&self) -> EosRecord;
}

pub(crate) fn mismatch(expected: EosKind, record: &EosRecord) -> ThermoError {
    ThermoError::EosMismatch {
        expected: expected.key(),
        found: record.kind().key(),
    }
}
