//! Gas compositions over the built-in catalog.

use crate::catalog::Species;
use crate::eos::PerfectGas;
use crate::error::{ThermoError, ThermoResult};
use crate::thermo::ThermoState;
use cal_core::numeric::{Tolerances, nearly_equal};

/// Mole fractions of catalog species, normalized to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(Species, f64)>,
}

impl Composition {
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)],
        }
    }

    /// Create a composition from (possibly unnormalized) mole fractions.
    ///
    /// Fractions must be finite and non-negative with a positive sum; repeated
    /// species are merged and negligible ones dropped.
    pub fn new_mole_fractions(fractions: Vec<(Species, f64)>) -> ThermoResult<Self> {
        if fractions.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut merged: Vec<(Species, f64)> = Vec::with_capacity(fractions.len());
        for (species, frac) in fractions {
            if !frac.is_finite() || frac < 0.0 {
                return Err(ThermoError::NonPhysical {
                    what: "mole fraction must be finite and non-negative",
                });
            }
            match merged.iter_mut().find(|(s, _)| *s == species) {
                Some((_, f)) => *f += frac,
                None => merged.push((species, frac)),
            }
        }

        let sum: f64 = merged.iter().map(|(_, f)| f).sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let items: Vec<(Species, f64)> = merged
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15)
            .collect();

        if items.is_empty() {
            return Err(ThermoError::NonPhysical {
                what: "all mole fractions negligible",
            });
        }

        Ok(Self { items })
    }

    /// Mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// `Some(species)` if the composition is a single species.
    pub fn is_pure(&self) -> Option<Species> {
        match self.items.as_slice() {
            [(species, frac)] if nearly_equal(*frac, 1.0, Tolerances::default()) => {
                Some(*species)
            }
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Mixture molar mass [kg/kmol]: Σ xᵢ·Mᵢ.
    pub fn molar_mass(&self) -> f64 {
        self.items
            .iter()
            .map(|(species, x)| species.molar_mass() * x)
            .sum()
    }

    /// Constant-Cp state of one kmol of this mixture, accumulated species by
    /// species with [`ThermoState::combine`].
    pub fn thermo(&self) -> ThermoResult<ThermoState<PerfectGas>> {
        let mut parts = self.items.iter();
        let Some(&(first, x0)) = parts.next() else {
            return Err(ThermoError::InvalidArg {
                what: "empty composition",
            });
        };
        let mut mix = first.thermo()?.scale(x0);
        for &(species, x) in parts {
            mix = mix.try_combine(&species.thermo()?.scale(x))?;
        }
        Ok(mix)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_sum_is_one(fracs in prop::collection::vec(0.0_f64..1.0_f64, 1..5)) {
            let input: Vec<(Species, f64)> = fracs
                .iter()
                .enumerate()
                .map(|(i, &f)| (Species::ALL[i % Species::ALL.len()], f))
                .collect();

            if let Ok(comp) = Composition::new_mole_fractions(input) {
                let sum: f64 = comp.iter().map(|(_, f)| f).sum();
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                prop_assert!(nearly_equal(sum, 1.0, tol));
            }
        }

        #[test]
        fn mixture_cp_is_mole_weighted(x in 0.01_f64..0.99) {
            let comp =
                Composition::new_mole_fractions(vec![(Species::He, x), (Species::Ar, 1.0 - x)])
                    .unwrap();
            let mix = comp.thermo().unwrap();
            let expected = x * Species::He.const_cp() + (1.0 - x) * Species::Ar.const_cp();
            prop_assert!(nearly_equal(mix.const_cp(), expected, Tolerances::MIXING));
        }
    }
}
