//! # Constants and type definitions for wellpath
//!
//! This module centralizes the **numeric thresholds**, **conversion helpers**, and **common type
//! definitions** used throughout the `wellpath` library.
//!
//! ## Overview
//!
//! - Unit type aliases (degrees, radians, lengths) used across the crate
//! - The dogleg threshold below which a survey interval is treated as straight
//! - Azimuth domain helpers
//!
//! These definitions are used by the survey table, the minimum-curvature solver,
//! and the interpolation layer.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Length in the survey's depth unit (meters or feet, whichever the log uses)
pub type Length = f64;
/// Measured depth along the wellbore, in the survey's depth unit
pub type MeasuredDepth = f64;

// -------------------------------------------------------------------------------------------------
// Numeric thresholds and conversions
// -------------------------------------------------------------------------------------------------

/// Full azimuth circle in degrees
pub const FULL_CIRCLE_DEG: Degree = 360.0;

/// Dogleg angle (radians) below which a survey interval is treated as straight.
///
/// The minimum-curvature ratio factor `(2/θ)·tan(θ/2)` is a `0/0` form at `θ = 0`;
/// below this threshold it is replaced by its limit value `1.0`. The threshold is a
/// stability bound, not an exact-zero test.
pub const DOGLEG_STRAIGHT_EPS: Radian = 1e-9;

/// Normalize an azimuth to the `[0, 360)` degree domain.
///
/// Negative and `≥ 360°` bearings are valid inputs and are wrapped rather than
/// rejected, matching compass-bearing semantics.
///
/// Arguments
/// -----------------
/// * `azimuth_deg`: a compass bearing in degrees, possibly outside `[0, 360)`
///
/// Return
/// ----------
/// * The equivalent bearing in `[0, 360)`.
pub fn normalize_azimuth(azimuth_deg: Degree) -> Degree {
    azimuth_deg.rem_euclid(FULL_CIRCLE_DEG)
}

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_normalize_azimuth() {
        assert_eq!(normalize_azimuth(0.0), 0.0);
        assert_eq!(normalize_azimuth(360.0), 0.0);
        assert_eq!(normalize_azimuth(450.0), 90.0);
        assert_eq!(normalize_azimuth(-10.0), 350.0);
        assert_eq!(normalize_azimuth(-370.0), 350.0);
        assert_eq!(normalize_azimuth(359.999), 359.999);
    }
}
