use super::{EquationOfState, mismatch};
use crate::error::ThermoResult;
use crate::record::{EosKind, EosRecord};
use crate::specie::Specie;
use cal_core::constants::P_STD_PA;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Perfect gas: `p = rho·R·T`.
///
/// Contributes nothing to enthalpy or specific heat; the entropy contribution
/// is the pressure term `−R·ln(p/p_std)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfectGas {
    specie: Specie,
}

impl PerfectGas {
    pub fn new(specie: Specie) -> Self {
        Self { specie }
    }
}

impl EquationOfState for PerfectGas {
    const KIND: EosKind = EosKind::PerfectGas;

    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn renamed(&self, name: &str) -> Self {
        Self::new(self.specie.with_name(name))
    }

    fn rho(&self, p: f64, t: f64) -> f64 {
        p / (self.r() * t)
    }

    fn h(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn cp(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn s(&self, p: f64, _t: f64) -> f64 {
        -self.r() * (p / P_STD_PA).ln()
    }

    fn psi(&self, _p: f64, t: f64) -> f64 {
        1.0 / (self.r() * t)
    }

    fn z(&self, _p: f64, _t: f64) -> f64 {
        1.0
    }

    fn cp_m_cv(&self, _p: f64, _t: f64) -> f64 {
        self.r()
    }

    fn from_record(specie: Specie, record: &EosRecord) -> ThermoResult<Self> {
        match record {
            EosRecord::PerfectGas => Ok(Self::new(specie)),
            other => Err(mismatch(Self::KIND, other)),
        }
    }

    fn to_record(&self) -> EosRecord {
        EosRecord::PerfectGas
    }
}

impl AddAssign<&PerfectGas> for PerfectGas {
    fn add_assign(&mut self, pg: &PerfectGas) {
        self.specie += &pg.specie;
    }
}

impl SubAssign<&PerfectGas> for PerfectGas {
    fn sub_assign(&mut self, pg: &PerfectGas) {
        self.specie -= &pg.specie;
    }
}

impl Add for PerfectGas {
    type Output = PerfectGas;

    fn add(self, rhs: PerfectGas) -> PerfectGas {
        Self::new(self.specie + rhs.specie)
    }
}

impl Sub for PerfectGas {
    type Output = PerfectGas;

    fn sub(self, rhs: PerfectGas) -> PerfectGas {
        Self::new(self.specie - rhs.specie)
    }
}

impl Mul<f64> for PerfectGas {
    type Output = PerfectGas;

    fn mul(self, s: f64) -> PerfectGas {
        Self::new(self.specie * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThermoError;
    use cal_core::{Tolerances, nearly_equal};

    fn air() -> PerfectGas {
        PerfectGas::new(Specie::new("air", 1.0, 28.965))
    }

    #[test]
    fn air_density_at_standard_conditions() {
        let rho = air().rho(101_325.0, 288.15);
        assert!(nearly_equal(rho, 1.225, Tolerances { abs: 1e-3, rel: 0.0 }));
    }

    #[test]
    fn entropy_vanishes_at_standard_pressure() {
        assert_eq!(air().s(P_STD_PA, 500.0), 0.0);
        assert!(air().s(2.0 * P_STD_PA, 500.0) < 0.0);
    }

    #[test]
    fn cp_minus_cv_is_gas_constant() {
        let gas = air();
        assert_eq!(gas.cp_m_cv(1e5, 300.0), gas.r());
        assert_eq!(gas.z(1e5, 300.0), 1.0);
        assert!(nearly_equal(
            gas.psi(1e5, 300.0) * 1e5,
            gas.rho(1e5, 300.0),
            Tolerances::MIXING
        ));
    }

    #[test]
    fn rejects_other_records() {
        let err = PerfectGas::from_record(Specie::new("x", 1.0, 18.0), &EosRecord::RhoConst {
            rho: 1000.0,
        })
        .unwrap_err();
        assert_eq!(err, ThermoError::EosMismatch {
            expected: "perfect_gas",
            found: "rho_const",
        });
    }
}
