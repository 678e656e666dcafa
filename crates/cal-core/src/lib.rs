//! cal-core: shared foundation for caloric.
//!
//! Contains:
//! - units (uom SI types, constructors, standard-condition constants)
//! - numeric (Real + tolerances + finite/positive checks)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
