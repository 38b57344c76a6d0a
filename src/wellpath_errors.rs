use thiserror::Error;

use crate::geodesy::ProjectionError;
use crate::survey::csv_reader::ParseSurveyError;

/// Crate-level error type.
///
/// Construction-time failures (the `*Md*`, `Inclination*` and parsing variants) are
/// fatal to the whole solving operation and carry the offending constraint. Per-query
/// failures (`MdOutOfRange`) are local to one measured depth and are folded into the
/// corresponding output record by the batch interpolator instead of aborting the batch.
#[derive(Error, Debug)]
pub enum WellPathError {
    #[error("a trajectory needs at least 2 survey stations, got {0}")]
    NotEnoughStations(usize),

    #[error("negative measured depth {md} at station {index}")]
    NegativeMd { index: usize, md: f64 },

    #[error("non-finite value in survey station {index}")]
    NonFiniteStation { index: usize },

    #[error("duplicate measured depth {md} in survey table")]
    DuplicateMd { md: f64 },

    #[error("inclination {inclination_deg} deg at MD {md} outside [0, 180]")]
    InclinationOutOfDomain { md: f64, inclination_deg: f64 },

    #[error("measured depth {requested} outside surveyed range [{min_md}, {max_md}]")]
    MdOutOfRange {
        requested: f64,
        min_md: f64,
        max_md: f64,
    },

    #[error("non-increasing measured depth interval: {md_upper} -> {md_lower}")]
    NonPositiveInterval { md_upper: f64, md_lower: f64 },

    #[error("error during survey CSV parsing: {0}")]
    SurveyCsvParsing(ParseSurveyError),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV reader error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("projection failed: {0}")]
    Projection(#[from] ProjectionError),
}

impl PartialEq for WellPathError {
    fn eq(&self, other: &Self) -> bool {
        use WellPathError::*;
        match (self, other) {
            (NotEnoughStations(a), NotEnoughStations(b)) => a == b,
            (
                NegativeMd { index: i1, md: m1 },
                NegativeMd { index: i2, md: m2 },
            ) => i1 == i2 && m1 == m2,
            (NonFiniteStation { index: a }, NonFiniteStation { index: b }) => a == b,
            (DuplicateMd { md: a }, DuplicateMd { md: b }) => a == b,
            (
                InclinationOutOfDomain {
                    md: m1,
                    inclination_deg: i1,
                },
                InclinationOutOfDomain {
                    md: m2,
                    inclination_deg: i2,
                },
            ) => m1 == m2 && i1 == i2,
            (
                MdOutOfRange {
                    requested: r1,
                    min_md: lo1,
                    max_md: hi1,
                },
                MdOutOfRange {
                    requested: r2,
                    min_md: lo2,
                    max_md: hi2,
                },
            ) => r1 == r2 && lo1 == lo2 && hi1 == hi2,
            (
                NonPositiveInterval {
                    md_upper: u1,
                    md_lower: l1,
                },
                NonPositiveInterval {
                    md_upper: u2,
                    md_lower: l2,
                },
            ) => u1 == u2 && l1 == l2,
            (SurveyCsvParsing(a), SurveyCsvParsing(b)) => a == b,
            (Projection(a), Projection(b)) => a == b,

            // Wrapped io/csv errors are not comparable: equality is same variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
