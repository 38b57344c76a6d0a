//! # Inverse transverse Mercator for WGS84 UTM zones
//!
//! Converts UTM easting/northing back to geographic `(lon, lat)` using the
//! standard series expansion (footpoint-latitude method) on the WGS84
//! ellipsoid. Zones are addressed by their EPSG codes: `326xx` for the
//! northern hemisphere, `327xx` for the southern.
use crate::geodesy::{Projection, ProjectionError};

/// WGS84 ellipsoid semi-major axis (equatorial radius) in meters
const WGS84_A: f64 = 6_378_137.0;

/// WGS84 ellipsoid flattening factor
const WGS84_F: f64 = 1.0 / 298.257223563;

/// WGS84 first eccentricity squared
const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// WGS84 second eccentricity squared
const WGS84_EP2: f64 = WGS84_E2 / (1.0 - WGS84_E2);

/// UTM central-meridian scale factor
const K0: f64 = 0.9996;

/// UTM false easting (meters)
const FALSE_EASTING: f64 = 500_000.0;

/// UTM false northing for the southern hemisphere (meters)
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Inverse UTM projection for one WGS84 zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmProjection {
    zone: u8,
    southern: bool,
}

impl UtmProjection {
    /// Build the adapter for a UTM EPSG code (`32601..=32660` north,
    /// `32701..=32760` south).
    ///
    /// Any other code — including geographic CRSs like 4326, which carry no
    /// projected easting/northing to invert — fails with
    /// [`ProjectionError::UnsupportedCrs`].
    pub fn from_epsg(epsg: u32) -> Result<Self, ProjectionError> {
        match epsg {
            32601..=32660 => Ok(Self {
                zone: (epsg - 32600) as u8,
                southern: false,
            }),
            32701..=32760 => Ok(Self {
                zone: (epsg - 32700) as u8,
                southern: true,
            }),
            other => Err(ProjectionError::UnsupportedCrs(other)),
        }
    }

    /// Central meridian of the zone, in degrees.
    fn central_meridian_deg(&self) -> f64 {
        f64::from(self.zone) * 6.0 - 183.0
    }
}

impl Projection for UtmProjection {
    fn project(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(ProjectionError::OutOfDomain { x, y });
        }

        let northing = if self.southern {
            y - FALSE_NORTHING_SOUTH
        } else {
            y
        };
        let easting = x - FALSE_EASTING;

        // Footpoint latitude from the rectified meridian arc
        let m = northing / K0;
        let e2 = WGS84_E2;
        let mu = m
            / (WGS84_A
                * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let c1 = WGS84_EP2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let n1 = WGS84_A / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = WGS84_A * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = easting / (n1 * K0);

        let lat_rad = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * WGS84_EP2)
                        * d.powi(4)
                        / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * WGS84_EP2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lon_rad = self.central_meridian_deg().to_radians()
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * WGS84_EP2
                    + 24.0 * t1 * t1)
                    * d.powi(5)
                    / 120.0)
                / cos_phi1;

        let (lon, lat) = (lon_rad.to_degrees(), lat_rad.to_degrees());
        if !(lon.is_finite() && lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(ProjectionError::OutOfDomain { x, y });
        }
        Ok((lon, lat))
    }
}
