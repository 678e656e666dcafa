//! Thermodynamic model errors.

use cal_core::CoreError;
use thiserror::Error;

/// Result type for thermodynamic operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised by the checked operations of the thermodynamic model.
///
/// The plain property formulas and mixing operators never return these; they
/// propagate non-finite values instead. The `try_*` counterparts report the
/// same degenerate inputs through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Non-physical values (negative molar mass, non-finite coefficient, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Combined molar amount of a mixing operation is zero or non-finite.
    #[error("Degenerate mixture: combined molar amount is {n_moles}")]
    DegenerateMixture { n_moles: f64 },

    /// Temperature outside the domain of the entropy logarithm.
    #[error("Temperature {t} K is outside the valid domain (must be positive and finite)")]
    TemperatureDomain { t: f64 },

    /// Temperature inversion did not converge.
    #[error("Convergence failed for {what} after {iterations} iterations")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },

    /// Record describes a different equation of state than the one requested.
    #[error("Equation of state mismatch: expected {expected}, found {found}")]
    EosMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::DegenerateMixture { n_moles: 0.0 };
        assert!(err.to_string().contains("combined molar amount is 0"));

        let err = ThermoError::EosMismatch {
            expected: "perfect_gas",
            found: "rho_const",
        };
        assert!(err.to_string().contains("rho_const"));
    }

    #[test]
    fn core_error_is_transparent() {
        let core = CoreError::NonFinite {
            what: "Cp",
            value: f64::INFINITY,
        };
        let err: ThermoError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
        assert!(matches!(err, ThermoError::Core(_)));
    }
}
