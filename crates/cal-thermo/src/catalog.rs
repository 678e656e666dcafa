//! Built-in constant-Cp data for common gases.
//!
//! Specific heats are ideal-gas values near 298 K, heats of formation are the
//! standard molar values divided by molar mass. The datum is always
//! `Tref = 298.15 K`, `Href = 0`.

use crate::eos::PerfectGas;
use crate::error::ThermoResult;
use crate::record::{EosRecord, SpecieRecord, ThermoCoeffsRecord, ThermoRecord};
use crate::thermo::ThermoState;
use cal_core::constants::T_STD_K;

/// Chemical species with built-in constant-Cp data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Oxygen (O₂)
    O2,
    /// Nitrogen (N₂)
    N2,
    /// Hydrogen (H₂)
    H2,
    /// Helium (He)
    He,
    /// Argon (Ar)
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Water vapour (H₂O)
    H2O,
    /// Methane (CH₄)
    CH4,
    /// Air (pseudo-pure)
    Air,
}

impl Species {
    pub const ALL: [Species; 10] = [
        Species::O2,
        Species::N2,
        Species::H2,
        Species::He,
        Species::Ar,
        Species::CO2,
        Species::CO,
        Species::H2O,
        Species::CH4,
        Species::Air,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::O2 => "O2",
            Species::N2 => "N2",
            Species::H2 => "H2",
            Species::He => "He",
            Species::Ar => "Ar",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::H2O => "H2O",
            Species::CH4 => "CH4",
            Species::Air => "Air",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::O2 => "Oxygen",
            Species::N2 => "Nitrogen",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CO2 => "Carbon Dioxide",
            Species::CO => "Carbon Monoxide",
            Species::H2O => "Water Vapour",
            Species::CH4 => "Methane",
            Species::Air => "Air",
        }
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::O2 => 31.999,
            Species::N2 => 28.014,
            Species::H2 => 2.016,
            Species::He => 4.003,
            Species::Ar => 39.948,
            Species::CO2 => 44.010,
            Species::CO => 28.010,
            Species::H2O => 18.015,
            Species::CH4 => 16.043,
            Species::Air => 28.965,
        }
    }

    /// Specific heat at constant pressure near 298 K [J/(kg·K)].
    pub fn const_cp(&self) -> f64 {
        match self {
            Species::O2 => 918.0,
            Species::N2 => 1040.0,
            Species::H2 => 14_304.0,
            Species::He => 5193.0,
            Species::Ar => 520.3,
            Species::CO2 => 844.0,
            Species::CO => 1040.0,
            Species::H2O => 1864.0,
            Species::CH4 => 2226.0,
            Species::Air => 1005.0,
        }
    }

    /// Standard heat of formation [J/kg].
    pub fn heat_of_formation(&self) -> f64 {
        match self {
            Species::CO2 => -8.9414e6,
            Species::CO => -3.9461e6,
            Species::H2O => -1.3424e7,
            Species::CH4 => -4.6668e6,
            Species::O2 | Species::N2 | Species::H2 | Species::He | Species::Ar | Species::Air => {
                0.0
            }
        }
    }

    /// Perfect-gas species record for one kmol.
    pub fn record(&self) -> ThermoRecord {
        ThermoRecord {
            name: self.key().to_string(),
            specie: SpecieRecord {
                n_moles: 1.0,
                mol_weight: self.molar_mass(),
            },
            equation_of_state: EosRecord::PerfectGas,
            thermodynamics: ThermoCoeffsRecord {
                cp: self.const_cp(),
                hf: self.heat_of_formation(),
                t_ref: T_STD_K,
                h_ref: 0.0,
            },
        }
    }

    pub fn thermo(&self) -> ThermoResult<ThermoState<PerfectGas>> {
        ThermoState::from_record(&self.record())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O2" | "OXYGEN" => Ok(Species::O2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "HE" | "HELIUM" => Ok(Species::He),
            "AR" | "ARGON" => Ok(Species::Ar),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "H2O" | "WATER" | "STEAM" => Ok(Species::H2O),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "AIR" => Ok(Species::Air),
            _ => Err("unknown species"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eos::EquationOfState;
    use crate::thermo::Thermo;

    #[test]
    fn parse_aliases() {
        assert_eq!("steam".parse::<Species>().unwrap(), Species::H2O);
        assert_eq!("Carbon Dioxide".parse::<Species>().unwrap(), Species::CO2);
        assert!("RP-1".parse::<Species>().is_err());
    }

    #[test]
    fn canonical_keys_roundtrip() {
        for species in Species::ALL {
            assert_eq!(species.key().parse::<Species>().unwrap(), species);
        }
    }

    #[test]
    fn records_validate_and_build() {
        for species in Species::ALL {
            let st = species.thermo().unwrap();
            assert_eq!(st.name(), species.key());
            assert_eq!(st.eos().w(), species.molar_mass());
            assert_eq!(st.hs(1e5, T_STD_K), 0.0);
        }
    }

    #[test]
    fn only_compounds_carry_formation_enthalpy() {
        assert_eq!(Species::N2.heat_of_formation(), 0.0);
        assert!(Species::H2O.heat_of_formation() < 0.0);
        let h2o = Species::H2O.thermo().unwrap();
        assert_eq!(h2o.ha(1e5, T_STD_K), h2o.hc());
    }
}
