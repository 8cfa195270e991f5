//! Scalar root-finding for the petroleum engineering engine.
//!
//! Solves `f(x) = 0` over a bracketing interval with a false-position /
//! bisection hybrid. Every call carries its own [`ToleranceSpec`]; the solver
//! either converges within it, or fails with an explicit error. It never
//! loops without bound.

pub mod bracket;
pub mod error;
pub mod tolerance;

pub use bracket::{Root, brackets_root, solve, solve_with_expansion};
pub use error::{SolverError, SolverResult};
pub use tolerance::ToleranceSpec;
