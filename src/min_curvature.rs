//! # Minimum-curvature segment solver
//!
//! Core numerical routine of the crate: given two adjacent survey stations, compute the
//! 3-D displacement (north, east, vertical) between them using the **minimum-curvature
//! method** — the industry-standard reconstruction that fits a smooth circular arc
//! through both orientation vectors instead of projecting a straight line.
//!
//! ## Method
//! -----------------
//! For stations `(md₁, inc₁, azi₁)` and `(md₂, inc₂, azi₂)` with `md₂ > md₁` (angles
//! in radians below):
//!
//! ```text
//! dogleg = arccos( cos(inc₂ − inc₁) − sin(inc₁)·sin(inc₂)·(1 − cos(azi₂ − azi₁)) )
//! rf     = 1                          dogleg ≈ 0
//!        = (2/dogleg)·tan(dogleg/2)   otherwise
//! Δnorth = (Δmd/2)·rf·(sin inc₁ cos azi₁ + sin inc₂ cos azi₂)
//! Δeast  = (Δmd/2)·rf·(sin inc₁ sin azi₁ + sin inc₂ sin azi₂)
//! Δtvd   = (Δmd/2)·rf·(cos inc₁ + cos inc₂)
//! ```
//!
//! The ratio factor `rf` is the curvature correction that distinguishes minimum
//! curvature from the average-angle method; as the dogleg vanishes it tends to 1 and
//! the two methods coincide. The `arccos` argument is clamped to `[-1, 1]` against
//! floating-point drift, and doglegs below
//! [`DOGLEG_STRAIGHT_EPS`](crate::constants::DOGLEG_STRAIGHT_EPS) take the straight
//! branch to avoid the `0/0` singularity.
use nalgebra::Vector3;

use crate::constants::{Radian, DOGLEG_STRAIGHT_EPS};
use crate::survey::SurveyStation;
use crate::wellpath_errors::WellPathError;

/// Relative 3-D displacement over one measured-depth interval.
///
/// Ephemeral output of the segment solver, consumed by the cumulative path fold.
/// All components are in the survey's depth unit; `delta_tvd` is positive downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDisplacement {
    pub delta_north: f64,
    pub delta_east: f64,
    pub delta_tvd: f64,
}

impl SegmentDisplacement {
    /// Displacement as a `(north, east, tvd)` vector, for accumulation.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.delta_north, self.delta_east, self.delta_tvd)
    }
}

/// Dogleg angle between two wellbore tangent directions (radians).
///
/// The standard spherical-law-of-cosines form; the argument is clamped to `[-1, 1]`
/// so that identical orientations cannot produce `NaN` through rounding.
pub fn dogleg_angle(inc1: Radian, azi1: Radian, inc2: Radian, azi2: Radian) -> Radian {
    let cos_dogleg =
        (inc2 - inc1).cos() - inc1.sin() * inc2.sin() * (1.0 - (azi2 - azi1).cos());
    cos_dogleg.clamp(-1.0, 1.0).acos()
}

/// Minimum-curvature ratio factor for a given dogleg angle.
///
/// `(2/θ)·tan(θ/2)`, with the limit value `1.0` below the straight-segment
/// threshold.
pub fn ratio_factor(dogleg: Radian) -> f64 {
    if dogleg < DOGLEG_STRAIGHT_EPS {
        1.0
    } else {
        (2.0 / dogleg) * (dogleg / 2.0).tan()
    }
}

/// Compute the minimum-curvature displacement between two survey stations.
///
/// Arguments
/// -----------------
/// * `upper`: shallower station (smaller MD)
/// * `lower`: deeper station (larger MD); may be a synthetic station built by the
///   interpolator at an intermediate depth
///
/// Return
/// ----------
/// * The `(Δnorth, Δeast, Δtvd)` displacement, or
///   [`WellPathError::NonPositiveInterval`] if `lower.md ≤ upper.md`. Given the
///   table's monotonicity invariant this is an internal-consistency fault, not an
///   expected runtime condition.
pub fn solve_segment(
    upper: &SurveyStation,
    lower: &SurveyStation,
) -> Result<SegmentDisplacement, WellPathError> {
    let delta_md = lower.md - upper.md;
    if delta_md <= 0.0 {
        return Err(WellPathError::NonPositiveInterval {
            md_upper: upper.md,
            md_lower: lower.md,
        });
    }

    let inc1 = upper.inclination_deg.to_radians();
    let azi1 = upper.azimuth_deg.to_radians();
    let inc2 = lower.inclination_deg.to_radians();
    let azi2 = lower.azimuth_deg.to_radians();

    let rf = ratio_factor(dogleg_angle(inc1, azi1, inc2, azi2));
    let half_md_rf = delta_md / 2.0 * rf;

    Ok(SegmentDisplacement {
        delta_north: half_md_rf * (inc1.sin() * azi1.cos() + inc2.sin() * azi2.cos()),
        delta_east: half_md_rf * (inc1.sin() * azi1.sin() + inc2.sin() * azi2.sin()),
        delta_tvd: half_md_rf * (inc1.cos() + inc2.cos()),
    })
}
