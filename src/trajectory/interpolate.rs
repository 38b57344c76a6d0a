//! # Point interpolation
//!
//! Random access into a [`TrajectoryPath`] at arbitrary measured depths, plus batch
//! evaluation with **per-item failure isolation** and optional geodetic enrichment.
//!
//! ## Single query
//! -----------------
//! [`TrajectoryPath::interpolate`] brackets the query MD, linearly interpolates
//! inclination and azimuth at that depth (azimuth along the **shorter angular path**,
//! so a 350° → 10° interval crosses north instead of sweeping 340°), solves the
//! partial minimum-curvature interval from the upper bracketing station, and adds the
//! displacement to that station's stored cumulative point. A query landing exactly on
//! a station MD returns the stored [`PathPoint`](crate::trajectory::PathPoint)
//! untouched, so re-querying station depths never accumulates recomputation error.
//!
//! ## Batch queries
//! -----------------
//! [`TrajectoryPath::interpolate_batch`] evaluates many MDs against the shared
//! immutable path. Errors are **per-MD**: an out-of-range depth degrades its own
//! [`PointRecord`] to null coordinates and never aborts the rest of the batch.
//!
//! ## Output shape
//! -----------------
//! [`PointRecord`] serializes to the JSON record consumed downstream:
//! `{"md":..,"x":..,"y":..,"z":..}` with `null` coordinates for failed depths, and
//! `lat`/`lon` keys present only when a projection succeeded.
use serde::Serialize;

use crate::constants::{normalize_azimuth, Degree, FULL_CIRCLE_DEG};
use crate::geodesy::Projection;
use crate::min_curvature::solve_segment;
use crate::survey::SurveyStation;
use crate::trajectory::TrajectoryPath;
use crate::wellpath_errors::WellPathError;

/// Absolute world-frame position at an interpolated MD.
///
/// `x`/`y` are easting/northing (origin applied), `z` is elevation (`z0 − tvd`).
/// `lat`/`lon` are populated only by a successful projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterpolatedPoint {
    pub md: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// One batch output record, independently fallible.
///
/// `x`/`y`/`z` are `None` (JSON `null`) when the query for this MD failed;
/// `lat`/`lon` are omitted from serialization unless projection succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointRecord {
    pub md: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl From<InterpolatedPoint> for PointRecord {
    fn from(p: InterpolatedPoint) -> Self {
        Self {
            md: p.md,
            x: Some(p.x),
            y: Some(p.y),
            z: Some(p.z),
            lat: p.lat,
            lon: p.lon,
        }
    }
}

impl PointRecord {
    /// Null-coordinate record for a failed query at `md`.
    fn failed(md: f64) -> Self {
        Self {
            md,
            x: None,
            y: None,
            z: None,
            lat: None,
            lon: None,
        }
    }
}

/// Interpolate an azimuth between two bearings along the shorter angular path.
///
/// Raw linear interpolation between `350°` and `10°` would sweep 340° through south;
/// the wrap-aware form takes the 20° path through north. The result is normalized
/// back into `[0, 360)`.
pub(crate) fn lerp_azimuth(from_deg: Degree, to_deg: Degree, t: f64) -> Degree {
    let mut delta = (to_deg - from_deg).rem_euclid(FULL_CIRCLE_DEG);
    if delta > FULL_CIRCLE_DEG / 2.0 {
        delta -= FULL_CIRCLE_DEG;
    }
    normalize_azimuth(from_deg + t * delta)
}

impl TrajectoryPath {
    /// Interpolate the absolute world-frame position at an arbitrary MD.
    ///
    /// Arguments
    /// -----------------
    /// * `md`: query measured depth, within the surveyed range
    ///
    /// Return
    /// ----------
    /// * The interpolated point (lat/lon unset), or
    ///   [`WellPathError::MdOutOfRange`] with the valid bounds.
    pub fn interpolate(&self, md: f64) -> Result<InterpolatedPoint, WellPathError> {
        let i = self.bracket(md)?;
        let stations = self.stations().stations();
        let points = self.path_points();

        // Exact station hit: return the stored cumulative point, never recompute.
        let (north, east, tvd) = if md == points[i].md {
            (points[i].north, points[i].east, points[i].tvd)
        } else if md == points[i + 1].md {
            (points[i + 1].north, points[i + 1].east, points[i + 1].tvd)
        } else {
            let upper = &stations[i];
            let lower = &stations[i + 1];
            let t = (md - upper.md) / (lower.md - upper.md);
            let target = SurveyStation {
                md,
                inclination_deg: upper.inclination_deg
                    + t * (lower.inclination_deg - upper.inclination_deg),
                azimuth_deg: lerp_azimuth(upper.azimuth_deg, lower.azimuth_deg, t),
            };
            let d = solve_segment(upper, &target)?;
            (
                points[i].north + d.delta_north,
                points[i].east + d.delta_east,
                points[i].tvd + d.delta_tvd,
            )
        };

        let (x, y, z) = self.frame().to_world(north, east, tvd);
        Ok(InterpolatedPoint {
            md,
            x,
            y,
            z,
            lat: None,
            lon: None,
        })
    }

    /// Interpolate a batch of MDs with per-item failure isolation.
    ///
    /// Every input MD yields exactly one [`PointRecord`], in input order. A failed
    /// query (out-of-range MD) produces a null-coordinate record for that MD only;
    /// the remaining queries are unaffected.
    pub fn interpolate_batch(&self, mds: &[f64]) -> Vec<PointRecord> {
        mds.iter()
            .map(|&md| match self.interpolate(md) {
                Ok(point) => point.into(),
                Err(_) => PointRecord::failed(md),
            })
            .collect()
    }
}

/// Attach WGS84 lat/lon to batch records through a projection adapter.
///
/// Applied only to records with resolved `x`/`y`; a per-point projection failure
/// leaves that record's `lat`/`lon` unset without touching its `x`/`y`/`z`. Callers
/// should gate the call on a known source CRS and a georeferenced origin
/// ([`FrameParams::has_origin`](crate::frame::FrameParams::has_origin)).
pub fn attach_latlon(records: &mut [PointRecord], projection: &dyn Projection) {
    for record in records.iter_mut() {
        if let (Some(x), Some(y)) = (record.x, record.y) {
            if let Ok((lon, lat)) = projection.project(x, y) {
                record.lat = Some(lat);
                record.lon = Some(lon);
            }
        }
    }
}
