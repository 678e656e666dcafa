//! Constant-Cp thermodynamics with an explicit reference enthalpy datum.
//!
//! Specific heat is temperature independent and sensible enthalpy is measured
//! from `(Tref, Href)` rather than from absolute zero:
//!
//! ```text
//! cp(p, T) = Cp + eos.cp(p, T)
//! hs(p, T) = Cp·(T − Tref) + Href + eos.h(p, T)
//! ha(p, T) = hs(p, T) + Hf
//! s(p, T)  = Cp·ln(T / T_std) + eos.s(p, T)
//! ```
//!
//! # Mixing
//!
//! Two operands are combined by first combining their equation-of-state
//! sub-states (which yields the combined amount of substance), then weighting
//! the coefficients by each operand's molar share.
//!
//! The in-place operators ([`ThermoState::combine_in_place`],
//! [`ThermoState::remove_in_place`]) re-weight `Cp` and `Hf` only and leave
//! `Tref`/`Href` as they were: every state accumulated this way must share the
//! same enthalpy datum. [`ThermoState::combine`] re-weights all four
//! coefficients. [`ThermoState::subtract`] re-weights `Cp` and `Hf` and keeps
//! the minuend's datum.
//!
//! The operators do not guard against a zero combined amount of substance;
//! the `try_*` variants report it as [`ThermoError::DegenerateMixture`].

use crate::eos::EquationOfState;
use crate::error::{ThermoError, ThermoResult};
use crate::mixing::MolarWeights;
use crate::record::{SpecieRecord, ThermoCoeffsRecord, ThermoRecord};
use cal_core::constants::T_STD_K;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Constant-Cp thermodynamic state layered over an equation of state `E`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState<E> {
    eos: E,
    /// Specific heat at constant pressure [J/(kg·K)]
    cp: f64,
    /// Heat of formation [J/kg]
    hf: f64,
    /// Reference temperature [K]
    t_ref: f64,
    /// Reference enthalpy [J/kg]
    h_ref: f64,
}

impl<E: EquationOfState> ThermoState<E> {
    pub fn new(eos: E, cp: f64, hf: f64, t_ref: f64, h_ref: f64) -> Self {
        Self {
            eos,
            cp,
            hf,
            t_ref,
            h_ref,
        }
    }

    /// Deep copy of `other` carrying a new name.
    pub fn renamed(name: &str, other: &Self) -> Self {
        Self {
            eos: other.eos.renamed(name),
            ..other.clone()
        }
    }

    /// Build from a validated species record.
    pub fn from_record(record: &ThermoRecord) -> ThermoResult<Self> {
        record.validate()?;
        let specie = record.specie.to_specie(&record.name);
        let eos = E::from_record(specie, &record.equation_of_state)?;
        let c = &record.thermodynamics;
        Ok(Self::new(eos, c.cp, c.hf, c.t_ref, c.h_ref))
    }

    /// Species record describing this state.
    pub fn to_record(&self) -> ThermoRecord {
        ThermoRecord {
            name: self.name().to_string(),
            specie: SpecieRecord::from(self.eos.specie()),
            equation_of_state: self.eos.to_record(),
            thermodynamics: ThermoCoeffsRecord {
                cp: self.cp,
                hf: self.hf,
                t_ref: self.t_ref,
                h_ref: self.h_ref,
            },
        }
    }

    pub fn eos(&self) -> &E {
        &self.eos
    }

    pub fn name(&self) -> &str {
        self.eos.name()
    }

    pub fn n_moles(&self) -> f64 {
        self.eos.n_moles()
    }

    /// The constant `Cp` coefficient (without the equation-of-state term).
    pub fn const_cp(&self) -> f64 {
        self.cp
    }

    pub fn t_ref(&self) -> f64 {
        self.t_ref
    }

    pub fn h_ref(&self) -> f64 {
        self.h_ref
    }

    // Mixing

    /// Absorb `other`'s amount of substance. `Tref`/`Href` are not updated.
    pub fn combine_in_place(&mut self, other: &Self) {
        let n1 = self.n_moles();
        self.eos += &other.eos;
        let w = MolarWeights::new(n1, other.n_moles(), self.n_moles());
        self.cp = w.add(self.cp, other.cp);
        self.hf = w.add(self.hf, other.hf);
    }

    /// Remove `other`'s amount of substance. `Tref`/`Href` are not updated.
    pub fn remove_in_place(&mut self, other: &Self) {
        let n1 = self.n_moles();
        self.eos -= &other.eos;
        let w = MolarWeights::new(n1, other.n_moles(), self.n_moles());
        self.cp = w.sub(self.cp, other.cp);
        self.hf = w.sub(self.hf, other.hf);
    }

    /// [`combine_in_place`](Self::combine_in_place), leaving `self` untouched
    /// when the combined amount of substance is degenerate.
    pub fn try_combine_in_place(&mut self, other: &Self) -> ThermoResult<()> {
        let mut eos = self.eos.clone();
        eos += &other.eos;
        check_total(eos.n_moles())?;
        self.combine_in_place(other);
        Ok(())
    }

    /// [`remove_in_place`](Self::remove_in_place), leaving `self` untouched
    /// when the remaining amount of substance is degenerate.
    pub fn try_remove_in_place(&mut self, other: &Self) -> ThermoResult<()> {
        let mut eos = self.eos.clone();
        eos -= &other.eos;
        check_total(eos.n_moles())?;
        self.remove_in_place(other);
        Ok(())
    }

    /// New state holding the union of `self` and `other`; all four
    /// coefficients are mole-weighted.
    pub fn combine(&self, other: &Self) -> Self {
        let eos = self.eos.clone() + other.eos.clone();
        let w = MolarWeights::new(self.n_moles(), other.n_moles(), eos.n_moles());
        Self::new(
            eos,
            w.add(self.cp, other.cp),
            w.add(self.hf, other.hf),
            w.add(self.t_ref, other.t_ref),
            w.add(self.h_ref, other.h_ref),
        )
    }

    /// New state holding `self` with `other` removed. Only `Cp` and `Hf` are
    /// re-weighted; the datum is taken from `self`.
    pub fn subtract(&self, other: &Self) -> Self {
        let eos = self.eos.clone() - other.eos.clone();
        let w = MolarWeights::new(self.n_moles(), other.n_moles(), eos.n_moles());
        Self::new(
            eos,
            w.sub(self.cp, other.cp),
            w.sub(self.hf, other.hf),
            self.t_ref,
            self.h_ref,
        )
    }

    /// Amount of substance scaled by `s`; coefficients unchanged.
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.eos.clone() * s, self.cp, self.hf, self.t_ref, self.h_ref)
    }

    /// `other` relative to `self`, i.e. `other.subtract(self)`.
    pub fn difference(&self, other: &Self) -> Self {
        other.subtract(self)
    }

    pub fn try_combine(&self, other: &Self) -> ThermoResult<Self> {
        let mixed = self.combine(other);
        check_total(mixed.n_moles())?;
        Ok(mixed)
    }

    pub fn try_subtract(&self, other: &Self) -> ThermoResult<Self> {
        let rest = self.subtract(other);
        check_total(rest.n_moles())?;
        Ok(rest)
    }

    pub fn try_difference(&self, other: &Self) -> ThermoResult<Self> {
        other.try_subtract(self)
    }
}

/// Property capability of a thermodynamic closure.
///
/// Pressure is in Pa, temperature in K, specific quantities per kg. Code that
/// only evaluates properties (temperature inversion, property packs, the CLI)
/// is generic over this trait rather than over a concrete closure.
pub trait Thermo {
    /// Temperature limiter applied to every temperature iterate. Closures
    /// without a validity range return `t` unchanged.
    #[inline]
    fn limit(&self, t: f64) -> f64 {
        t
    }

    /// Specific heat at constant pressure [J/(kg·K)].
    fn cp(&self, p: f64, t: f64) -> f64;

    /// Absolute enthalpy [J/kg].
    fn ha(&self, p: f64, t: f64) -> f64;

    /// Sensible enthalpy [J/kg].
    fn hs(&self, p: f64, t: f64) -> f64;

    /// Chemical enthalpy (heat of formation) [J/kg].
    fn hc(&self) -> f64;

    /// Entropy [J/(kg·K)].
    fn s(&self, p: f64, t: f64) -> f64;

    /// Entropy, rejecting temperatures outside the domain of the logarithm.
    fn try_s(&self, p: f64, t: f64) -> ThermoResult<f64> {
        if !t.is_finite() || t <= 0.0 {
            return Err(ThermoError::TemperatureDomain { t });
        }
        Ok(self.s(p, t))
    }
}

impl<E: EquationOfState> Thermo for ThermoState<E> {
    /// This model has no validity range.
    #[inline]
    fn limit(&self, t: f64) -> f64 {
        t
    }

    #[inline]
    fn cp(&self, p: f64, t: f64) -> f64 {
        self.cp + self.eos.cp(p, t)
    }

    #[inline]
    fn ha(&self, p: f64, t: f64) -> f64 {
        self.cp * (t - self.t_ref) + self.h_ref + self.hf + self.eos.h(p, t)
    }

    #[inline]
    fn hs(&self, p: f64, t: f64) -> f64 {
        self.cp * (t - self.t_ref) + self.h_ref + self.eos.h(p, t)
    }

    #[inline]
    fn hc(&self) -> f64 {
        self.hf
    }

    /// Non-finite for `t <= 0`.
    #[inline]
    fn s(&self, p: f64, t: f64) -> f64 {
        self.cp * (t / T_STD_K).ln() + self.eos.s(p, t)
    }
}

fn check_total(n_moles: f64) -> ThermoResult<()> {
    if n_moles == 0.0 || !n_moles.is_finite() {
        return Err(ThermoError::DegenerateMixture { n_moles });
    }
    Ok(())
}

impl<E: EquationOfState> AddAssign<&ThermoState<E>> for ThermoState<E> {
    fn add_assign(&mut self, rhs: &ThermoState<E>) {
        self.combine_in_place(rhs);
    }
}

impl<E: EquationOfState> SubAssign<&ThermoState<E>> for ThermoState<E> {
    fn sub_assign(&mut self, rhs: &ThermoState<E>) {
        self.remove_in_place(rhs);
    }
}

impl<E: EquationOfState> Add for &ThermoState<E> {
    type Output = ThermoState<E>;

    fn add(self, rhs: Self) -> ThermoState<E> {
        self.combine(rhs)
    }
}

impl<E: EquationOfState> Sub for &ThermoState<E> {
    type Output = ThermoState<E>;

    fn sub(self, rhs: Self) -> ThermoState<E> {
        self.subtract(rhs)
    }
}

impl<E: EquationOfState> Mul<&ThermoState<E>> for f64 {
    type Output = ThermoState<E>;

    fn mul(self, rhs: &ThermoState<E>) -> ThermoState<E> {
        rhs.scale(self)
    }
}

impl<E: EquationOfState> Mul<ThermoState<E>> for f64 {
    type Output = ThermoState<E>;

    fn mul(self, mut rhs: ThermoState<E>) -> ThermoState<E> {
        rhs.eos = rhs.eos * self;
        rhs
    }
}
