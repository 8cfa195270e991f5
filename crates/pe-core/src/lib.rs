//! pe-core: stable foundation for the petroleum engineering engine.
//!
//! Contains:
//! - units (uom SI types + oilfield constructors and readers)
//! - conversion (text-tagged units and the dimension-checked conversion table)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod conversion;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use conversion::{Dimension, TaggedQuantity, UnitTag, convert};
pub use error::{PeError, PeResult};
pub use numeric::*;
pub use units::*;
