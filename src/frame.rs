//! # Frame adjuster
//!
//! Places the relative `(north, east, tvd)` path into the caller's world frame.
//! Two corrections are supported, both defaulting to zero:
//!
//! * a global **azimuth adjustment** (magnetic/grid declination), added to every
//!   station bearing and re-normalized mod 360 *before* the path is built;
//! * a **surface origin** `(x0, y0, z0)` applied to interpolated output, with
//!   `x = x0 + east` (easting), `y = y0 + north` (northing) and `z = z0 − tvd`
//!   (TVD is positive underground, so elevation decreases with depth).
use crate::constants::{Degree, Length};

/// World-frame parameters for a solving operation.
///
/// `x0`/`y0` are the well-head easting/northing in the same units as MD, `z0` the
/// well-head elevation, `azi_adj` a declination correction in degrees. All default
/// to zero, in which case the output is the raw north/east/TVD path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameParams {
    pub x0: Length,
    pub y0: Length,
    pub z0: Length,
    pub azi_adj: Degree,
}

impl FrameParams {
    /// Frame with a surface origin and no azimuth correction.
    pub fn with_origin(x0: Length, y0: Length, z0: Length) -> Self {
        Self {
            x0,
            y0,
            z0,
            azi_adj: 0.0,
        }
    }

    /// Same frame with the given azimuth adjustment (degrees).
    pub fn azimuth_adjustment(self, azi_adj: Degree) -> Self {
        Self { azi_adj, ..self }
    }

    /// Map a relative `(north, east, tvd)` position to world `(x, y, z)`.
    pub(crate) fn to_world(&self, north: f64, east: f64, tvd: f64) -> (f64, f64, f64) {
        (self.x0 + east, self.y0 + north, self.z0 - tvd)
    }

    /// Whether the frame carries a usable (non-zero) horizontal origin.
    ///
    /// Geodetic projection is only meaningful when the well head is actually
    /// georeferenced; a zero easting/northing is treated as "no origin supplied".
    pub fn has_origin(&self) -> bool {
        self.x0 != 0.0 && self.y0 != 0.0
    }
}
