//! pe-correlations: petroleum engineering correlation library.
//!
//! Provides closed-form and iterative field correlations:
//! - drilling hydraulics (mud gradient, hydrostatics, velocities, ECD)
//! - well control (kill sheet, MAASP, pump schedule, formation, overburden and
//!   Eaton fracture gradients, lost-circulation margin)
//! - completion (fracture width, proppant, acid volume, fracture productivity)
//! - single-phase flow (Moody/Colebrook, Weymouth, Hazen-Williams, orifice, ...)
//! - Beggs-Brill multiphase gradient
//! - reservoir inflow and Standing PVT
//! - rock properties (log porosity, Archie, permeability transforms, Corey,
//!   Brooks-Corey, volumetrics)
//! - water and gas PVT
//! - production (Darcy radial flow, skin, gas deliverability and chokes,
//!   Horner buildup)
//!
//! Every function is pure: typed quantities in, typed quantities out, and a
//! `CorrelationError::DomainViolation` naming the broken constraint when an
//! input is outside the correlation's domain.
//!
//! # Example
//!
//! ```
//! use pe_correlations::drilling::hydrostatic_pressure;
//! use pe_core::{ft, in_psi, ppg};
//!
//! let p = hydrostatic_pressure(ppg(12.0), ft(10_000.0)).unwrap();
//! assert!((in_psi(p) - 6_240.0).abs() < 1.0);
//! ```

pub mod common;
pub mod completion;
pub mod drilling;
pub mod error;
pub mod flow;
pub mod fluids;
pub mod multiphase;
pub mod production;
pub mod reservoir;
pub mod rock;
pub mod well_control;

// Re-exports
pub use completion::FractureProductivity;
pub use error::{CorrelationError, CorrelationResult};
pub use multiphase::{FlowRegime, MultiphaseGradient, MultiphaseInput, beggs_brill};
pub use production::{BuildupTest, ChokeFlow, HornerAnalysis};
pub use rock::{ArchieParameters, CoreyPhase};
pub use well_control::{KillSheet, LostCirculation};
