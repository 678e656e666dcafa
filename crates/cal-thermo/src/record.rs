//! Serializable species records.
//!
//! A record mirrors the three sections of a species entry:
//!
//! ```yaml
//! name: N2
//! specie: { n_moles: 1.0, mol_weight: 28.014 }
//! equation_of_state: { type: perfect_gas }
//! thermodynamics: { Cp: 1040.0, Hf: 0.0, Tref: 298.15, Href: 0.0 }
//! ```

use crate::error::{ThermoError, ThermoResult};
use crate::specie::Specie;
use cal_core::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_n_moles() -> f64 {
    1.0
}

/// Amount of substance and molecular weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecieRecord {
    #[serde(default = "default_n_moles")]
    pub n_moles: f64,
    pub mol_weight: f64,
}

impl SpecieRecord {
    pub fn validate(&self) -> ThermoResult<()> {
        ensure_positive(self.n_moles, "n_moles")?;
        ensure_positive(self.mol_weight, "mol_weight")?;
        Ok(())
    }

    pub fn to_specie(&self, name: &str) -> Specie {
        Specie::new(name, self.n_moles, self.mol_weight)
    }
}

impl From<&Specie> for SpecieRecord {
    fn from(specie: &Specie) -> Self {
        Self {
            n_moles: specie.n_moles(),
            mol_weight: specie.w(),
        }
    }
}

/// Which equation of state a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EosKind {
    PerfectGas,
    RhoConst,
    IncompressiblePerfectGas,
}

impl EosKind {
    pub fn key(&self) -> &'static str {
        match self {
            EosKind::PerfectGas => "perfect_gas",
            EosKind::RhoConst => "rho_const",
            EosKind::IncompressiblePerfectGas => "incompressible_perfect_gas",
        }
    }
}

impl fmt::Display for EosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Equation-of-state section, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EosRecord {
    PerfectGas,
    RhoConst {
        /// Density [kg/m³]
        rho: f64,
    },
    IncompressiblePerfectGas {
        /// Reference pressure [Pa]
        p_ref: f64,
    },
}

impl EosRecord {
    pub fn kind(&self) -> EosKind {
        match self {
            EosRecord::PerfectGas => EosKind::PerfectGas,
            EosRecord::RhoConst { .. } => EosKind::RhoConst,
            EosRecord::IncompressiblePerfectGas { .. } => EosKind::IncompressiblePerfectGas,
        }
    }

    pub fn validate(&self) -> ThermoResult<()> {
        match *self {
            EosRecord::PerfectGas => {}
            EosRecord::RhoConst { rho } => {
                ensure_positive(rho, "rho")?;
            }
            EosRecord::IncompressiblePerfectGas { p_ref } => {
                ensure_positive(p_ref, "p_ref")?;
            }
        }
        Ok(())
    }
}

/// Constant-Cp coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermoCoeffsRecord {
    /// Specific heat at constant pressure [J/(kg·K)]
    #[serde(rename = "Cp")]
    pub cp: f64,
    /// Heat of formation [J/kg]
    #[serde(rename = "Hf")]
    pub hf: f64,
    /// Reference temperature [K]
    #[serde(rename = "Tref")]
    pub t_ref: f64,
    /// Reference enthalpy [J/kg]
    #[serde(rename = "Href")]
    pub h_ref: f64,
}

impl ThermoCoeffsRecord {
    /// Coefficients must be finite. A negative `Cp` is accepted with a warning.
    pub fn validate(&self, name: &str) -> ThermoResult<()> {
        ensure_finite(self.cp, "Cp")?;
        ensure_finite(self.hf, "Hf")?;
        ensure_finite(self.t_ref, "Tref")?;
        ensure_finite(self.h_ref, "Href")?;
        if self.cp < 0.0 {
            tracing::warn!(species = name, cp = self.cp, "negative Cp in species record");
        }
        Ok(())
    }
}

/// One species entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermoRecord {
    pub name: String,
    pub specie: SpecieRecord,
    pub equation_of_state: EosRecord,
    pub thermodynamics: ThermoCoeffsRecord,
}

impl ThermoRecord {
    pub fn validate(&self) -> ThermoResult<()> {
        if self.name.trim().is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "species name must not be empty",
            });
        }
        self.specie.validate()?;
        self.equation_of_state.validate()?;
        self.thermodynamics.validate(&self.name)?;
        Ok(())
    }
}
