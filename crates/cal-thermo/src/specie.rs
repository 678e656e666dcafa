//! Specie base: name, amount of substance and molecular weight.

use cal_core::constants::RR;
use cal_core::molar_share;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Amount of substance and molecular weight of a species or mixture.
///
/// Mixing re-weights the molecular weight by molar share. Totals are not
/// clamped: combining to a zero amount leaves a non-finite molecular weight,
/// which the checked operations on [`crate::ThermoState`] detect.
#[derive(Debug, Clone, PartialEq)]
pub struct Specie {
    name: String,
    /// Number of moles [kmol] represented by this specie
    n_moles: f64,
    /// Molecular weight [kg/kmol]
    mol_weight: f64,
}

impl Specie {
    pub fn new(name: impl Into<String>, n_moles: f64, mol_weight: f64) -> Self {
        Self {
            name: name.into(),
            n_moles,
            mol_weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_moles(&self) -> f64 {
        self.n_moles
    }

    /// Molecular weight [kg/kmol].
    pub fn w(&self) -> f64 {
        self.mol_weight
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn r(&self) -> f64 {
        RR / self.mol_weight
    }

    /// Deep copy carrying a new name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl AddAssign<&Specie> for Specie {
    fn add_assign(&mut self, st: &Specie) {
        let sum = self.n_moles + st.n_moles;
        self.mol_weight = molar_share(self.n_moles, sum) * self.mol_weight
            + molar_share(st.n_moles, sum) * st.mol_weight;
        self.n_moles = sum;
    }
}

impl SubAssign<&Specie> for Specie {
    fn sub_assign(&mut self, st: &Specie) {
        let diff = self.n_moles - st.n_moles;
        self.mol_weight = molar_share(self.n_moles, diff) * self.mol_weight
            - molar_share(st.n_moles, diff) * st.mol_weight;
        self.n_moles = diff;
    }
}

impl Add for Specie {
    type Output = Specie;

    fn add(mut self, rhs: Specie) -> Specie {
        self += &rhs;
        self
    }
}

impl Sub for Specie {
    type Output = Specie;

    fn sub(mut self, rhs: Specie) -> Specie {
        self -= &rhs;
        self
    }
}

impl Mul<f64> for Specie {
    type Output = Specie;

    fn mul(mut self, s: f64) -> Specie {
        self.n_moles *= s;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cal_core::{Tolerances, nearly_equal};

    #[test]
    fn gas_constant_from_molecular_weight() {
        let n2 = Specie::new("N2", 1.0, 28.014);
        assert!(nearly_equal(n2.r(), 296.8, Tolerances { abs: 0.1, rel: 0.0 }));
    }

    #[test]
    fn addition_weights_molecular_weight() {
        let mut a = Specie::new("a", 1.0, 2.0);
        let b = Specie::new("b", 3.0, 6.0);
        a += &b;
        assert_eq!(a.n_moles(), 4.0);
        assert!(nearly_equal(a.w(), 5.0, Tolerances::MIXING));
        assert_eq!(a.name(), "a");
    }

    #[test]
    fn subtraction_recovers_remaining_species() {
        let a = Specie::new("a", 1.0, 2.0);
        let b = Specie::new("b", 3.0, 6.0);
        let mix = a.clone() + b.clone();
        let rest = mix - b;
        assert!(nearly_equal(rest.n_moles(), a.n_moles(), Tolerances::MIXING));
        assert!(nearly_equal(rest.w(), a.w(), Tolerances::MIXING));
    }

    #[test]
    fn scaling_keeps_molecular_weight() {
        let a = Specie::new("a", 2.0, 18.0) * 0.5;
        assert_eq!(a.n_moles(), 1.0);
        assert_eq!(a.w(), 18.0);
    }

    #[test]
    fn zero_total_is_not_clamped() {
        let a = Specie::new("a", 1.0, 2.0);
        let mix = a.clone() - a;
        assert_eq!(mix.n_moles(), 0.0);
        assert!(!mix.w().is_finite());
    }

    #[test]
    fn renamed_copy_keeps_amounts() {
        let a = Specie::new("a", 2.0, 18.0);
        let b = a.with_name("water");
        assert_eq!(b.name(), "water");
        assert_eq!(b.n_moles(), 2.0);
        assert_eq!(b.w(), 18.0);
    }
}
