use super::{EquationOfState, mismatch};
use crate::error::ThermoResult;
use crate::mixing::MolarWeights;
use crate::record::{EosKind, EosRecord};
use crate::specie::Specie;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Constant density.
#[derive(Debug, Clone, PartialEq)]
pub struct RhoConst {
    specie: Specie,
    /// Density [kg/m³]
    rho: f64,
}

impl RhoConst {
    pub fn new(specie: Specie, rho: f64) -> Self {
        Self { specie, rho }
    }
}

impl EquationOfState for RhoConst {
    const KIND: EosKind = EosKind::RhoConst;

    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn renamed(&self, name: &str) -> Self {
        Self::new(self.specie.with_name(name), self.rho)
    }

    fn rho(&self, _p: f64, _t: f64) -> f64 {
        self.rho
    }

    fn h(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn cp(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn s(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn psi(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn z(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn cp_m_cv(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn from_record(specie: Specie, record: &EosRecord) -> ThermoResult<Self> {
        match *record {
            EosRecord::RhoConst { rho } => Ok(Self::new(specie, rho)),
            ref other => Err(mismatch(Self::KIND, other)),
        }
    }

    fn to_record(&self) -> EosRecord {
        EosRecord::RhoConst { rho: self.rho }
    }
}

impl AddAssign<&RhoConst> for RhoConst {
    fn add_assign(&mut self, rc: &RhoConst) {
        let n1 = self.n_moles();
        self.specie += &rc.specie;
        let w = MolarWeights::new(n1, rc.n_moles(), self.n_moles());
        self.rho = w.add(self.rho, rc.rho);
    }
}

impl SubAssign<&RhoConst> for RhoConst {
    fn sub_assign(&mut self, rc: &RhoConst) {
        let n1 = self.n_moles();
        self.specie -= &rc.specie;
        let w = MolarWeights::new(n1, rc.n_moles(), self.n_moles());
        self.rho = w.sub(self.rho, rc.rho);
    }
}

impl Add for RhoConst {
    type Output = RhoConst;

    fn add(mut self, rhs: RhoConst) -> RhoConst {
        self += &rhs;
        self
    }
}

impl Sub for RhoConst {
    type Output = RhoConst;

    fn sub(mut self, rhs: RhoConst) -> RhoConst {
        self -= &rhs;
        self
    }
}

impl Mul<f64> for RhoConst {
    type Output = RhoConst;

    fn mul(self, s: f64) -> RhoConst {
        Self::new(self.specie * s, self.rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_independent_of_state() {
        let water = RhoConst::new(Specie::new("water", 1.0, 18.015), 997.0);
        assert_eq!(water.rho(1e5, 300.0), 997.0);
        assert_eq!(water.rho(5e6, 350.0), 997.0);
        assert_eq!(water.s(5e6, 350.0), 0.0);
    }

    #[test]
    fn mixing_weights_density_by_moles() {
        let a = RhoConst::new(Specie::new("a", 1.0, 18.0), 1000.0);
        let b = RhoConst::new(Specie::new("b", 3.0, 18.0), 800.0);
        let mix = a.clone() + b.clone();
        assert_eq!(mix.n_moles(), 4.0);
        assert_eq!(mix.rho(1e5, 300.0), 850.0);

        let back = mix - b;
        assert_eq!(back.rho(1e5, 300.0), a.rho(1e5, 300.0));
    }

    #[test]
    fn record_roundtrip() {
        let a = RhoConst::new(Specie::new("a", 1.0, 18.0), 1000.0);
        let rebuilt = RhoConst::from_record(a.specie().clone(), &a.to_record()).unwrap();
        assert_eq!(rebuilt, a);
    }
}
