//! Bracketing root finder: Illinois false position with a bisection fallback.

use crate::error::SolverError;
use crate::tolerance::ToleranceSpec;
use tracing::{debug, trace};

/// Converged root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    /// Location of the root
    pub root: f64,
    /// Iterations used (0 when an endpoint already satisfies the tolerance)
    pub iterations: usize,
    /// f(root)
    pub residual: f64,
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Lower,
    Upper,
    None,
}

fn eval<F, E>(f: &mut F, x: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let value = f(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFinite { x, value }.into())
    }
}

/// Solve `f(x) = 0` for x in `[lower, upper]`.
///
/// Requires `f(lower)` and `f(upper)` to have opposite signs (an endpoint that
/// already meets the residual tolerance is returned directly). Converges when
/// `|f(x)| <= tol.residual`, or when the bracket half-width drops below
/// `tol.abs` and the better endpoint also meets the residual tolerance. A
/// bracket that collapses with a larger residual fails with `NotConverged`.
///
/// `f` may itself fail; its error type only needs to absorb [`SolverError`].
pub fn solve<F, E>(mut f: F, lower: f64, upper: f64, tol: &ToleranceSpec) -> Result<Root, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    tol.validate()?;
    if !(lower.is_finite() && upper.is_finite()) || lower >= upper {
        return Err(SolverError::InvalidBracket { lower, upper }.into());
    }

    let mut a = lower;
    let mut fa = eval(&mut f, a)?;
    if fa.abs() <= tol.residual {
        return Ok(Root {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }

    let mut b = upper;
    let mut fb = eval(&mut f, b)?;
    if fb.abs() <= tol.residual {
        return Ok(Root {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }

    if fa.signum() == fb.signum() {
        return Err(SolverError::NoSignChange {
            lower,
            upper,
            f_lower: fa,
            f_upper: fb,
        }
        .into());
    }

    // Weighted copies of fa/fb used only for the secant step.
    let mut ga = fa;
    let mut gb = fb;
    let mut retained = Side::None;

    for iter in 1..=tol.max_iterations {
        let mut x = (a * gb - b * ga) / (gb - ga);
        if !x.is_finite() || x <= a || x >= b {
            x = 0.5 * (a + b);
        }

        let fx = eval(&mut f, x)?;
        trace!(iter, x, fx, a, b, "bracket step");

        if fx.abs() <= tol.residual {
            debug!(iter, root = x, residual = fx, "root converged on residual");
            return Ok(Root {
                root: x,
                iterations: iter,
                residual: fx,
            });
        }

        if fx.signum() == fb.signum() {
            b = x;
            fb = fx;
            gb = fx;
            if retained == Side::Lower {
                ga *= 0.5;
            }
            retained = Side::Lower;
        } else {
            a = x;
            fa = fx;
            ga = fx;
            if retained == Side::Upper {
                gb *= 0.5;
            }
            retained = Side::Upper;
        }

        if 0.5 * (b - a) <= tol.abs {
            let (root, residual) = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
            if residual.abs() > tol.residual {
                // Bracket collapsed onto a sign change that is not a root.
                debug!(iter, root, residual, "bracket collapsed above residual tolerance");
                return Err(SolverError::NotConverged {
                    iterations: iter,
                    residual: residual.abs(),
                }
                .into());
            }
            debug!(iter, root, residual, "root converged on bracket width");
            return Ok(Root {
                root,
                iterations: iter,
                residual,
            });
        }
    }

    let residual = fa.abs().min(fb.abs());
    debug!(
        iterations = tol.max_iterations,
        residual, "root finder hit iteration cap"
    );
    Err(SolverError::NotConverged {
        iterations: tol.max_iterations,
        residual,
    }
    .into())
}

/// Whether `f` changes sign (or vanishes) over `[lower, upper]`.
pub fn brackets_root<F, E>(f: &mut F, lower: f64, upper: f64) -> Result<bool, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let fl = eval(f, lower)?;
    let fu = eval(f, upper)?;
    Ok(fl == 0.0 || fu == 0.0 || fl.signum() != fu.signum())
}

/// Like [`solve`], but when `[lower, upper]` does not bracket a root the upper
/// bound is moved out once to `lower + (upper - lower) * expand` before giving up.
pub fn solve_with_expansion<F, E>(
    mut f: F,
    lower: f64,
    upper: f64,
    expand: f64,
    tol: &ToleranceSpec,
) -> Result<Root, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    if expand > 1.0 && lower < upper && !brackets_root(&mut f, lower, upper)? {
        let widened = lower + (upper - lower) * expand;
        debug!(lower, upper, widened, "widening bracket");
        return solve(f, lower, widened, tol);
    }
    solve(f, lower, upper, tol)
}
