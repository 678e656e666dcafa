//! Species library: a named collection of species records with YAML/JSON
//! load and save helpers, and mixture construction by molar amounts.

use crate::catalog::Species;
use crate::eos::EquationOfState;
use crate::error::ThermoError;
use crate::record::ThermoRecord;
use crate::thermo::ThermoState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    #[error("Validation error in species '{name}': {source}")]
    Validation {
        name: String,
        #[source]
        source: ThermoError,
    },

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Duplicate species: {0}")]
    DuplicateSpecies(String),

    #[error("Mixture has no components")]
    EmptyMixture,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LibraryError {
    fn validation(name: &str, source: ThermoError) -> Self {
        LibraryError::Validation {
            name: name.to_string(),
            source,
        }
    }
}

/// Named collection of species records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermoLibrary {
    #[serde(default)]
    pub species: Vec<ThermoRecord>,
}

impl ThermoLibrary {
    pub fn new(species: Vec<ThermoRecord>) -> Self {
        Self { species }
    }

    /// Library holding every species of the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Species::ALL.iter().map(Species::record).collect())
    }

    pub fn from_yaml_str(content: &str) -> LibraryResult<Self> {
        let library: ThermoLibrary = serde_yaml::from_str(content)?;
        library.validate()?;
        Ok(library)
    }

    pub fn load_yaml(path: &Path) -> LibraryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let library = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            species = library.species.len(),
            "loaded species library"
        );
        Ok(library)
    }

    pub fn to_yaml_string(&self) -> LibraryResult<String> {
        self.validate()?;
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save_yaml(&self, path: &Path) -> LibraryResult<()> {
        let content = self.to_yaml_string()?;
        std::fs::write(path, content)?;
        tracing::debug!(
            path = %path.display(),
            species = self.species.len(),
            "saved species library"
        );
        Ok(())
    }

    pub fn load_json(path: &Path) -> LibraryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let library: ThermoLibrary = serde_json::from_str(&content)?;
        library.validate()?;
        tracing::debug!(
            path = %path.display(),
            species = library.species.len(),
            "loaded species library"
        );
        Ok(library)
    }

    pub fn save_json(&self, path: &Path) -> LibraryResult<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(
            path = %path.display(),
            species = self.species.len(),
            "saved species library"
        );
        Ok(())
    }

    /// Load by extension: `.json` is JSON, anything else YAML.
    pub fn load(path: &Path) -> LibraryResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_yaml(path),
        }
    }

    /// Every record must validate and names must be unique.
    pub fn validate(&self) -> LibraryResult<()> {
        let mut seen = HashSet::new();
        for record in &self.species {
            record
                .validate()
                .map_err(|e| LibraryError::validation(&record.name, e))?;
            if !seen.insert(record.name.as_str()) {
                return Err(LibraryError::DuplicateSpecies(record.name.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ThermoRecord> {
        self.species.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.species.iter().map(|r| r.name.as_str())
    }

    /// State of a single species as stored in the library.
    pub fn thermo<E: EquationOfState>(&self, name: &str) -> LibraryResult<ThermoState<E>> {
        let record = self
            .get(name)
            .ok_or_else(|| LibraryError::UnknownSpecies(name.to_string()))?;
        ThermoState::from_record(record).map_err(|e| LibraryError::validation(name, e))
    }

    /// Species scaled to `n_moles` kmol.
    fn amount<E: EquationOfState>(
        &self,
        name: &str,
        n_moles: f64,
    ) -> LibraryResult<ThermoState<E>> {
        let st: ThermoState<E> = self.thermo(name)?;
        Ok(st.scale(n_moles / st.n_moles()))
    }

    /// Mixture of the given `(species, kmol)` components built with
    /// [`ThermoState::combine`], so reference datums are mole-weighted too.
    pub fn mixture<E: EquationOfState>(
        &self,
        components: &[(&str, f64)],
    ) -> LibraryResult<ThermoState<E>> {
        let ((first, n0), rest) = components.split_first().ok_or(LibraryError::EmptyMixture)?;
        let mut mix: ThermoState<E> = self.amount(first, *n0)?;
        for (name, n) in rest {
            let st: ThermoState<E> = self.amount(name, *n)?;
            mix = mix
                .try_combine(&st)
                .map_err(|e| LibraryError::validation(name, e))?;
        }
        tracing::debug!(
            components = components.len(),
            n_moles = mix.n_moles(),
            cp = mix.const_cp(),
            "built mixture"
        );
        Ok(mix)
    }

    /// Mixture of the given components accumulated in place. The datum of the
    /// first component is kept; components with a different datum are mixed
    /// anyway and reported with a warning.
    pub fn accumulate<E: EquationOfState>(
        &self,
        components: &[(&str, f64)],
    ) -> LibraryResult<ThermoState<E>> {
        let ((first, n0), rest) = components.split_first().ok_or(LibraryError::EmptyMixture)?;
        let mut acc: ThermoState<E> = self.amount(first, *n0)?;
        for (name, n) in rest {
            let st: ThermoState<E> = self.amount(name, *n)?;
            if st.t_ref() != acc.t_ref() || st.h_ref() != acc.h_ref() {
                tracing::warn!(
                    species = *name,
                    t_ref = st.t_ref(),
                    h_ref = st.h_ref(),
                    acc_t_ref = acc.t_ref(),
                    acc_h_ref = acc.h_ref(),
                    "enthalpy datum differs from accumulated mixture"
                );
            }
            acc.try_combine_in_place(&st)
                .map_err(|e| LibraryError::validation(name, e))?;
        }
        Ok(acc)
    }
}
