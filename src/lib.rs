//! # wellpath
//!
//! Reconstruction of a directional wellbore's 3-D path from a discrete survey log of
//! (measured depth, inclination, azimuth) stations, and interpolation of arbitrary-depth
//! points on that path using the **minimum-curvature method**.
//!
//! ## Pipeline
//!
//! ```text
//! SurveyStationTable ──▶ minimum-curvature fold ──▶ TrajectoryPath
//!                                                       │
//!                              interpolate(md) ◀────────┘
//!                                    │
//!                          FrameParams (origin, azi_adj)
//!                                    │
//!                          Projection (optional lat/lon)
//! ```
//!
//! ## Quick-start
//!
//! ```rust
//! use wellpath::{FrameParams, SurveyRecord, SurveyStationTable, TrajectoryPath};
//!
//! # fn run() -> Result<(), wellpath::WellPathError> {
//! let table = SurveyStationTable::from_records(vec![
//!     SurveyRecord { md: 0.0, azi: 0.0, inc: 0.0 },
//!     SurveyRecord { md: 1000.0, azi: 90.0, inc: 30.0 },
//! ])?;
//! let path = TrajectoryPath::build(table, FrameParams::default())?;
//!
//! let point = path.interpolate(500.0)?;
//! let records = path.interpolate_batch(&[250.0, 750.0, 99_999.0]); // per-MD isolation
//! # Ok(()) }
//! ```
pub mod constants;
pub mod frame;
pub mod geodesy;
pub mod min_curvature;
pub mod survey;
pub mod trajectory;
pub mod wellpath_errors;

pub use frame::FrameParams;
pub use geodesy::{Projection, ProjectionError, UtmProjection};
pub use min_curvature::SegmentDisplacement;
pub use survey::{SurveyRecord, SurveyStation, SurveyStationTable};
pub use trajectory::interpolate::{attach_latlon, InterpolatedPoint, PointRecord};
pub use trajectory::{PathPoint, TrajectoryPath};
pub use wellpath_errors::WellPathError;
