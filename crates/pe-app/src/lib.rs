//! Shared application service layer for the petroleum engineering engine.
//!
//! This crate is the boundary used by the CLI (and any other front end):
//! it parses requests, applies configured defaults, evaluates the
//! correlations and economics crates, and labels results with units.

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod service;

// Re-export key types for convenience
pub use config::{EngineDefaults, load_defaults, parse_defaults};
pub use error::{AppError, AppResult, ErrorKind};
pub use request::{Request, load_requests, parse_requests};
pub use response::{NamedValue, OperationResponse, Value};
pub use service::{evaluate, evaluate_all};
