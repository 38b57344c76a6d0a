//! # Geodetic projection adapter
//!
//! Seam between the trajectory core and coordinate-reference-system conversion.
//! The core only ever talks to the [`Projection`] trait: given a projected
//! `(x, y)` pair (easting/northing), an adapter either produces WGS84
//! `(lon, lat)` in degrees or fails with a [`ProjectionError`]. A failure is
//! always non-fatal to the caller — it degrades a point's output to omit
//! lat/lon while keeping x/y/z.
//!
//! One adapter ships with the crate: [`UtmProjection`], an inverse transverse
//! Mercator for the WGS84 UTM zones (EPSG 326xx / 327xx), selected by EPSG code
//! via [`UtmProjection::from_epsg`].
use thiserror::Error;

pub mod utm;

pub use utm::UtmProjection;

/// Failure to construct a CRS transform or to project a point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("unsupported source CRS id: {0}")]
    UnsupportedCrs(u32),
    #[error("coordinates outside projection domain: ({x}, {y})")]
    OutOfDomain { x: f64, y: f64 },
}

/// Map projected coordinates to WGS84 geographic coordinates.
///
/// `x` is the easting and `y` the northing in the source CRS; the result is
/// `(lon, lat)` in degrees (x/y axis order, matching the inputs).
pub trait Projection {
    fn project(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError>;
}
