//! # Survey station table
//!
//! Validated, MD-ordered storage for directional-survey stations. The central type is
//! [`SurveyStationTable`], an owning, immutable sequence of [`SurveyStation`] sorted by
//! strictly increasing measured depth. It is the only input the trajectory solver needs.
//!
//! ## Validation rules
//! -----------------
//! Construction from raw records ([`SurveyStationTable::from_records`]) enforces:
//!
//! * at least **2** stations (a single station cannot define a path),
//! * every field **finite**,
//! * `md ≥ 0`,
//! * **strictly increasing** MD once sorted (duplicates rejected),
//! * `inclination ∈ [0, 180]` degrees.
//!
//! Azimuth is the one field that is *normalized* rather than rejected: negative or
//! `≥ 360°` bearings are wrapped into `[0, 360)` via
//! [`normalize_azimuth`](crate::constants::normalize_azimuth).
//!
//! ## Ingestion sources
//! -----------------
//! * In-memory records — [`SurveyStationTable::from_records`].
//! * CSV files with `md`, `azi`, `inc` columns — [`SurveyStationTable::from_csv`]
//!   (see [`csv_reader`](crate::survey::csv_reader)).
//!
//! ## See also
//! ------------
//! * [`TrajectoryPath`](crate::trajectory::TrajectoryPath) – consumes the table.
//! * [`WellPathError`] – validation failure taxonomy.
use camino::Utf8Path;
use serde::Deserialize;

use crate::constants::{normalize_azimuth, Degree, MeasuredDepth};
use crate::wellpath_errors::WellPathError;

pub mod csv_reader;

/// A raw survey record as found in tabular sources.
///
/// Field names match the required CSV columns (`md`, `azi`, `inc`); any extra
/// columns in a source file are ignored. No validation is applied at this level.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SurveyRecord {
    /// Measured depth along the wellbore
    pub md: f64,
    /// Azimuth in degrees (any real value; wrapped mod 360 at validation)
    pub azi: f64,
    /// Inclination in degrees, `[0, 180]`
    pub inc: f64,
}

/// A validated directional-survey station.
///
/// Units:
/// * `md`: measured depth in the survey's depth unit
/// * `inclination_deg`: degrees from true vertical, `[0, 180]`
/// * `azimuth_deg`: compass bearing in degrees, `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyStation {
    pub md: MeasuredDepth,
    pub inclination_deg: Degree,
    pub azimuth_deg: Degree,
}

/// An owning, immutable sequence of survey stations sorted by strictly increasing MD.
///
/// Built once per solving operation; the trajectory and interpolation layers only
/// ever borrow it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyStationTable {
    stations: Vec<SurveyStation>,
}

impl SurveyStationTable {
    /// Build a validated table from raw records supplied in any order.
    ///
    /// Records are sorted by MD, azimuths are wrapped into `[0, 360)`, and the
    /// validation rules listed in the module documentation are enforced.
    ///
    /// Arguments
    /// -----------------
    /// * `records`: raw `(md, azi, inc)` records, unordered
    ///
    /// Return
    /// ----------
    /// * The MD-sorted table, or the first violated constraint as a [`WellPathError`].
    pub fn from_records(records: Vec<SurveyRecord>) -> Result<Self, WellPathError> {
        if records.len() < 2 {
            return Err(WellPathError::NotEnoughStations(records.len()));
        }

        for (index, rec) in records.iter().enumerate() {
            if !(rec.md.is_finite() && rec.azi.is_finite() && rec.inc.is_finite()) {
                return Err(WellPathError::NonFiniteStation { index });
            }
            if rec.md < 0.0 {
                return Err(WellPathError::NegativeMd { index, md: rec.md });
            }
            if !(0.0..=180.0).contains(&rec.inc) {
                return Err(WellPathError::InclinationOutOfDomain {
                    md: rec.md,
                    inclination_deg: rec.inc,
                });
            }
        }

        let mut stations: Vec<SurveyStation> = records
            .into_iter()
            .map(|rec| SurveyStation {
                md: rec.md,
                inclination_deg: rec.inc,
                azimuth_deg: normalize_azimuth(rec.azi),
            })
            .collect();
        stations.sort_by(|a, b| a.md.total_cmp(&b.md));

        for pair in stations.windows(2) {
            if pair[0].md == pair[1].md {
                return Err(WellPathError::DuplicateMd { md: pair[0].md });
            }
        }

        Ok(Self { stations })
    }

    /// Load a table from a CSV file with `md`, `azi`, `inc` columns.
    ///
    /// Column order is free and extra columns are ignored; a missing required
    /// column or a malformed row fails with
    /// [`WellPathError::SurveyCsvParsing`]. The parsed records then go through
    /// the same validation as [`SurveyStationTable::from_records`].
    pub fn from_csv(path: &Utf8Path) -> Result<Self, WellPathError> {
        let records = csv_reader::read_survey_csv(path)?;
        Self::from_records(records)
    }

    /// The stations, sorted by strictly increasing MD.
    pub fn stations(&self) -> &[SurveyStation] {
        &self.stations
    }

    /// Number of stations in the table (always ≥ 2).
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Shallowest and deepest surveyed MD.
    pub fn md_range(&self) -> (MeasuredDepth, MeasuredDepth) {
        // len ≥ 2 is a construction invariant
        (self.stations[0].md, self.stations[self.stations.len() - 1].md)
    }

    /// Copy of the table with `azi_adj` degrees added to every station azimuth,
    /// re-normalized into `[0, 360)`. Used by the frame adjuster to correct a
    /// magnetic/grid declination offset before the path is built.
    pub(crate) fn with_azimuth_adjustment(&self, azi_adj: Degree) -> Self {
        let stations = self
            .stations
            .iter()
            .map(|s| SurveyStation {
                azimuth_deg: normalize_azimuth(s.azimuth_deg + azi_adj),
                ..*s
            })
            .collect();
        Self { stations }
    }
}

#[cfg(test)]
mod survey_table_test {
    use super::*;

    fn rec(md: f64, azi: f64, inc: f64) -> SurveyRecord {
        SurveyRecord { md, azi, inc }
    }

    #[test]
    fn test_sorts_by_md() {
        let table = SurveyStationTable::from_records(vec![
            rec(1000.0, 90.0, 30.0),
            rec(0.0, 0.0, 0.0),
            rec(500.0, 45.0, 15.0),
        ])
        .unwrap();

        let mds: Vec<f64> = table.stations().iter().map(|s| s.md).collect();
        assert_eq!(mds, vec![0.0, 500.0, 1000.0]);
        assert_eq!(table.md_range(), (0.0, 1000.0));
    }

    #[test]
    fn test_azimuth_is_wrapped_not_rejected() {
        let table =
            SurveyStationTable::from_records(vec![rec(0.0, -10.0, 0.0), rec(100.0, 370.0, 5.0)])
                .unwrap();
        assert_eq!(table.stations()[0].azimuth_deg, 350.0);
        assert_eq!(table.stations()[1].azimuth_deg, 10.0);
    }

    #[test]
    fn test_too_few_stations() {
        assert_eq!(
            SurveyStationTable::from_records(vec![rec(0.0, 0.0, 0.0)]),
            Err(WellPathError::NotEnoughStations(1))
        );
        assert_eq!(
            SurveyStationTable::from_records(vec![]),
            Err(WellPathError::NotEnoughStations(0))
        );
    }

    #[test]
    fn test_negative_md() {
        assert_eq!(
            SurveyStationTable::from_records(vec![rec(-5.0, 0.0, 0.0), rec(100.0, 0.0, 0.0)]),
            Err(WellPathError::NegativeMd { index: 0, md: -5.0 })
        );
    }

    #[test]
    fn test_duplicate_md() {
        assert_eq!(
            SurveyStationTable::from_records(vec![
                rec(0.0, 0.0, 0.0),
                rec(500.0, 10.0, 5.0),
                rec(500.0, 20.0, 6.0),
            ]),
            Err(WellPathError::DuplicateMd { md: 500.0 })
        );
    }

    #[test]
    fn test_inclination_domain() {
        assert_eq!(
            SurveyStationTable::from_records(vec![rec(0.0, 0.0, 181.0), rec(100.0, 0.0, 0.0)]),
            Err(WellPathError::InclinationOutOfDomain {
                md: 0.0,
                inclination_deg: 181.0
            })
        );
        // Boundary values are valid
        assert!(
            SurveyStationTable::from_records(vec![rec(0.0, 0.0, 0.0), rec(100.0, 0.0, 180.0)])
                .is_ok()
        );
    }

    #[test]
    fn test_non_finite_station() {
        assert_eq!(
            SurveyStationTable::from_records(vec![rec(0.0, 0.0, 0.0), rec(f64::NAN, 0.0, 0.0)]),
            Err(WellPathError::NonFiniteStation { index: 1 })
        );
    }

    #[test]
    fn test_azimuth_adjustment() {
        let table =
            SurveyStationTable::from_records(vec![rec(0.0, 350.0, 10.0), rec(100.0, 90.0, 10.0)])
                .unwrap();
        let adjusted = table.with_azimuth_adjustment(20.0);
        assert_eq!(adjusted.stations()[0].azimuth_deg, 10.0);
        assert_eq!(adjusted.stations()[1].azimuth_deg, 110.0);
        // the source table is untouched
        assert_eq!(table.stations()[0].azimuth_deg, 350.0);
    }
}
