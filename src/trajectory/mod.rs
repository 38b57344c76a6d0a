//! # Trajectory path
//!
//! Assembles the cumulative 3-D wellbore path from a validated
//! [`SurveyStationTable`] by folding the
//! [minimum-curvature segment solver](crate::min_curvature) over consecutive
//! station pairs. The result, [`TrajectoryPath`], owns one [`PathPoint`] per
//! station (the first anchored at `(north, east, tvd) = (0, 0, 0)`), the
//! azimuth-adjusted station table it was built from, and the
//! [`FrameParams`](crate::frame::FrameParams) used to express output in world
//! coordinates.
//!
//! ## Querying
//! -----------------
//! * [`TrajectoryPath::path_points`] – the full cumulative sequence.
//! * [`TrajectoryPath::bracket`] – index of the survey interval containing an MD.
//! * [`TrajectoryPath::interpolate`] – absolute point at an arbitrary MD
//!   (see [`interpolate`](crate::trajectory::interpolate)).
//!
//! The path is immutable once built; every query is a pure function of the path
//! and the query MD, so batches of queries can be evaluated concurrently over a
//! shared reference without coordination.
use itertools::Itertools;
use nalgebra::Vector3;

use crate::frame::FrameParams;
use crate::min_curvature::solve_segment;
use crate::survey::SurveyStationTable;
use crate::wellpath_errors::WellPathError;

pub mod interpolate;

/// Absolute cumulative position at a survey-station MD.
///
/// `north`/`east` are relative to the well head, `tvd` is positive downward. The
/// frame origin is applied later, at interpolation output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub md: f64,
    pub north: f64,
    pub east: f64,
    pub tvd: f64,
}

/// The reconstructed 3-D wellbore path.
///
/// Owns the (azimuth-adjusted) station table and the parallel cumulative
/// [`PathPoint`] sequence. Built once per solving operation via
/// [`TrajectoryPath::build`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPath {
    stations: SurveyStationTable,
    points: Vec<PathPoint>,
    frame: FrameParams,
}

impl TrajectoryPath {
    /// Build the cumulative path for a survey table in a given frame.
    ///
    /// The frame's azimuth adjustment is applied to every station bearing first;
    /// the segment solver is then folded over consecutive station pairs. This is
    /// the `solve` entry point of the crate.
    ///
    /// Arguments
    /// -----------------
    /// * `stations`: validated survey table (consumed; the path owns it)
    /// * `frame`: world-frame parameters (origin + azimuth adjustment)
    ///
    /// Return
    /// ----------
    /// * The path, or a [`WellPathError`] if a segment violates the monotonic-MD
    ///   invariant (internal-consistency fault given a validated table).
    pub fn build(stations: SurveyStationTable, frame: FrameParams) -> Result<Self, WellPathError> {
        let stations = stations.with_azimuth_adjustment(frame.azi_adj);

        let mut points = Vec::with_capacity(stations.len());
        let mut position: Vector3<f64> = Vector3::zeros();
        points.push(PathPoint {
            md: stations.stations()[0].md,
            north: 0.0,
            east: 0.0,
            tvd: 0.0,
        });

        for (upper, lower) in stations.stations().iter().tuple_windows() {
            position += solve_segment(upper, lower)?.as_vector();
            points.push(PathPoint {
                md: lower.md,
                north: position.x,
                east: position.y,
                tvd: position.z,
            });
        }

        Ok(Self {
            stations,
            points,
            frame,
        })
    }

    /// Cumulative path points, parallel to the station table.
    pub fn path_points(&self) -> &[PathPoint] {
        &self.points
    }

    /// The azimuth-adjusted station table the path was built from.
    pub fn stations(&self) -> &SurveyStationTable {
        &self.stations
    }

    /// Frame parameters the path was built with.
    pub fn frame(&self) -> &FrameParams {
        &self.frame
    }

    /// Shallowest and deepest surveyed MD.
    pub fn md_range(&self) -> (f64, f64) {
        self.stations.md_range()
    }

    /// Index `i` of the survey interval bracketing `md`, such that
    /// `stations[i].md ≤ md ≤ stations[i+1].md`.
    ///
    /// Return
    /// ----------
    /// * The interval index, or [`WellPathError::MdOutOfRange`] carrying the valid
    ///   `[min_md, max_md]` bounds when `md` falls outside the surveyed range.
    pub fn bracket(&self, md: f64) -> Result<usize, WellPathError> {
        let (min_md, max_md) = self.md_range();
        if !md.is_finite() || md < min_md || md > max_md {
            return Err(WellPathError::MdOutOfRange {
                requested: md,
                min_md,
                max_md,
            });
        }
        let upper = self.points.partition_point(|p| p.md <= md);
        // md == max_md lands past the end; clamp to the last interval
        Ok((upper - 1).min(self.points.len() - 2))
    }
}
