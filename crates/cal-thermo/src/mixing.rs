//! Mole-weighted mixing rule shared by the equations of state and the
//! constant-Cp layer.

use cal_core::molar_share;

/// Molar shares of two operands in a combined amount of substance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MolarWeights {
    pub w1: f64,
    pub w2: f64,
}

impl MolarWeights {
    /// Shares of `n1` and `n2` in `total`. Non-finite when `total` is zero.
    #[inline]
    pub fn new(n1: f64, n2: f64, total: f64) -> Self {
        Self {
            w1: molar_share(n1, total),
            w2: molar_share(n2, total),
        }
    }

    /// `w1·x1 + w2·x2`
    #[inline]
    pub fn add(&self, x1: f64, x2: f64) -> f64 {
        self.w1 * x1 + self.w2 * x2
    }

    /// `w1·x1 − w2·x2`
    #[inline]
    pub fn sub(&self, x1: f64, x2: f64) -> f64 {
        self.w1 * x1 - self.w2 * x2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_amounts_average() {
        let w = MolarWeights::new(1.0, 1.0, 2.0);
        assert_eq!(w.add(1000.0, 2000.0), 1500.0);
    }

    #[test]
    fn subtraction_back_solves_remaining_value() {
        // 1 mol at 1000 mixed with 3 mol at 2000 gives 1750 over 4 mol;
        // removing the 3 mol leaves the first operand.
        let w = MolarWeights::new(4.0, 3.0, 1.0);
        assert_eq!(w.sub(1750.0, 2000.0), 1000.0);
    }
}
