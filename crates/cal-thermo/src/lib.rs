//! cal-thermo: constant-Cp thermodynamics with a reference enthalpy datum.
//!
//! Provides:
//! - `Specie` base (amount of substance, molecular weight)
//! - `EquationOfState` capability with perfect-gas, constant-density and
//!   incompressible perfect-gas implementations
//! - `Thermo` closure capability (`limit`, `cp`, `ha`, `hs`, `hc`, `s`) and
//!   `ThermoState<E>`, its constant-Cp implementation with the mixing algebra
//!   layered over any equation of state
//! - derived properties (`cv`, `gamma`, `es`, `ea`), temperature inversion and
//!   property packs
//! - serde species records, a YAML/JSON species library and a built-in
//!   catalog of common gases
//!
//! # Example
//!
//! ```
//! use cal_thermo::{PerfectGas, Specie, Thermo, ThermoState};
//!
//! let n2 = ThermoState::new(
//!     PerfectGas::new(Specie::new("N2", 1.0, 28.014)),
//!     1040.0,   // Cp [J/(kg·K)]
//!     0.0,      // Hf [J/kg]
//!     298.15,   // Tref [K]
//!     0.0,      // Href [J/kg]
//! );
//! assert_eq!(n2.hs(101_325.0, 298.15), 0.0);
//! assert_eq!(n2.limit(1.0e4), 1.0e4);
//! ```

pub mod catalog;
pub mod composition;
pub mod eos;
pub mod error;
pub mod library;
pub mod mixing;
pub mod properties;
pub mod record;
pub mod specie;
pub mod thermo;

// Re-exports for ergonomics
pub use catalog::Species;
pub use composition::Composition;
pub use eos::{EquationOfState, IncompressiblePerfectGas, PerfectGas, RhoConst};
pub use error::{ThermoError, ThermoResult};
pub use library::{LibraryError, LibraryResult, ThermoLibrary};
pub use mixing::MolarWeights;
pub use properties::{
    SpecEnthalpy, SpecEntropy, SpecHeatCapacity, ThermoProperties, ThermoPropertyPack,
};
pub use record::{EosKind, EosRecord, SpecieRecord, ThermoCoeffsRecord, ThermoRecord};
pub use specie::Specie;
pub use thermo::{Thermo, ThermoState};
