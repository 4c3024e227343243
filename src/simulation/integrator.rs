//! Advance-by-duration driver
//!
//! Splits an arbitrary requested advance into substeps no larger than
//! `dt_max` and feeds them to the chosen solver one at a time, passing the
//! physics explicitly into every step.

use nalgebra::SVector;

use crate::simulation::physics::DiffEq;
use crate::simulation::solver::Solver;

/// Default substep bound for orbital mechanics, in simulated years
pub const DEFAULT_DT_MAX: f64 = 1e-3;

/// Advance `f` from `t` by `dt` in substeps bounded by `dt_max`
///
/// The remaining duration shrinks by exactly the step taken each
/// iteration, so the loop reaches zero and the full `dt` is consumed. The
/// sign of `dt` carries through, so negative advances step backward.
///
/// A zero `dt_max` or non-finite `dt` never terminates; both are caller
/// preconditions, as is a `dt_max` small enough for the scheme to stay
/// stable on the problem at hand. An oversized `dt_max` shows up as silent
/// energy drift, not an error.
pub fn advance_by<const N: usize>(
    solver: Solver,
    eq: &impl DiffEq<N>,
    mut t: f64,
    mut f: SVector<f64, N>,
    dt: f64,
    dt_max: f64,
) -> (f64, SVector<f64, N>) {
    let mut remaining = dt;
    while remaining.abs() > 0.0 {
        let step = if remaining.abs() > dt_max {
            dt_max * remaining.signum()
        } else {
            remaining
        };
        let (tn, fn_next) = solver.advance(eq, t, f, step);
        t = tn;
        f = fn_next;
        remaining -= step;
    }
    (t, f)
}
