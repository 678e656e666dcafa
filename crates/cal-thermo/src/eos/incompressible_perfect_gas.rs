use super::{EquationOfState, mismatch};
use crate::error::ThermoResult;
use crate::mixing::MolarWeights;
use crate::record::{EosKind, EosRecord};
use crate::specie::Specie;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Perfect gas evaluated at a fixed reference pressure: density follows
/// temperature only, `rho = p_ref/(R·T)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncompressiblePerfectGas {
    specie: Specie,
    /// Reference pressure [Pa]
    p_ref: f64,
}

impl IncompressiblePerfectGas {
    pub fn new(specie: Specie, p_ref: f64) -> Self {
        Self { specie, p_ref }
    }

    pub fn p_ref(&self) -> f64 {
        self.p_ref
    }
}

impl EquationOfState for IncompressiblePerfectGas {
    const KIND: EosKind = EosKind::IncompressiblePerfectGas;

    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn renamed(&self, name: &str) -> Self {
        Self::new(self.specie.with_name(name), self.p_ref)
    }

    fn rho(&self, _p: f64, t: f64) -> f64 {
        self.p_ref / (self.r() * t)
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
            EosRecord::IncompressiblePerfectGas { p_ref } => Ok(Self::new(specie, p_ref)),
            ref other => Err(mismatch(Self::KIND, other)),
        }
    }

    fn to_record(&self) -> EosRecord {
        EosRecord::IncompressiblePerfectGas { p_ref: self.p_ref }
    }
}

impl AddAssign<&IncompressiblePerfectGas> for IncompressiblePerfectGas {
    fn add_assign(&mut self, ipg: &IncompressiblePerfectGas) {
        let n1 = self.n_moles();
        self.specie += &ipg.specie;
        let w = MolarWeights::new(n1, ipg.n_moles(), self.n_moles());
        self.p_ref = w.add(self.p_ref, ipg.p_ref);
    }
}

impl SubAssign<&IncompressiblePerfectGas> for IncompressiblePerfectGas {
    fn sub_assign(&mut self, ipg: &IncompressiblePerfectGas) {
        let n1 = self.n_moles();
        self.specie -= &ipg.specie;
        let w = MolarWeights::new(n1, ipg.n_moles(), self.n_moles());
        self.p_ref = w.sub(self.p_ref, ipg.p_ref);
    }
}

impl Add for IncompressiblePerfectGas {
    type Output = IncompressiblePerfectGas;

    fn add(mut self, rhs: IncompressiblePerfectGas) -> IncompressiblePerfectGas {
        self += &rhs;
        self
    }
}

impl Sub for IncompressiblePerfectGas {
    type Output = IncompressiblePerfectGas;

    fn sub(mut self, rhs: IncompressiblePerfectGas) -> IncompressiblePerfectGas {
        self -= &rhs;
        self
    }
}

impl Mul<f64> for IncompressiblePerfectGas {
    type Output = IncompressiblePerfectGas;

    fn mul(self, s: f64) -> IncompressiblePerfectGas {
        Self::new(self.specie * s, self.p_ref)
    }
}
