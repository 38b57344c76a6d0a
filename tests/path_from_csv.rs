use approx::assert_relative_eq;

use wellpath::min_curvature::solve_segment;
use wellpath::{FrameParams, WellPathError};

mod common;

#[test]
fn test_csv_fixture_loads_sorted() {
    let table = common::deviated_table();
    assert_eq!(table.len(), 8);
    assert_eq!(table.md_range(), (0.0, 3500.0));
    for pair in table.stations().windows(2) {
        assert!(pair[0].md < pair[1].md);
    }
}

#[test]
fn test_path_has_one_point_per_station() {
    let path = common::deviated_path(FrameParams::default());
    assert_eq!(path.path_points().len(), path.stations().len());
    assert_eq!(path.path_points()[0].md, 0.0);
    assert_eq!(path.path_points()[0].tvd, 0.0);
}

#[test]
fn test_vertical_section_then_eastward_drift() {
    let path = common::deviated_path(FrameParams::default());

    // The first 500 units are vertical: tvd tracks md, no horizontal offset.
    let p = path.interpolate(347.25).unwrap();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    assert_relative_eq!(p.z, -347.25, max_relative = 1e-15);

    // Past the kick-off the well heads roughly due east: easting dominates and
    // keeps growing with depth.
    let shallow = path.interpolate(1500.0).unwrap();
    let deep = path.interpolate(3500.0).unwrap();
    assert!(shallow.x > 0.0);
    assert!(deep.x > shallow.x);
    assert!(deep.x > deep.y.abs());
}

#[test]
fn test_station_depths_reproduce_stored_points() {
    let path = common::deviated_path(FrameParams::default());
    let stored: Vec<_> = path.path_points().to_vec();
    for point in stored {
        let p = path.interpolate(point.md).unwrap();
        assert_eq!(p.x, point.east);
        assert_eq!(p.y, point.north);
        assert_eq!(p.z, -point.tvd);
    }
}

#[test]
fn test_interpolation_is_consistent_with_segment_solver() {
    let path = common::deviated_path(FrameParams::default());
    let stations = path.stations().stations();
    let points = path.path_points();

    // A depth inside the 2000..2500 interval, checked against a manual partial solve.
    let md = 2200.0;
    let t = (md - 2000.0) / 500.0;
    let upper = stations[4];
    let target = wellpath::SurveyStation {
        md,
        inclination_deg: upper.inclination_deg + t * (stations[5].inclination_deg - upper.inclination_deg),
        azimuth_deg: upper.azimuth_deg + t * (stations[5].azimuth_deg - upper.azimuth_deg),
    };
    let d = solve_segment(&upper, &target).unwrap();

    let p = path.interpolate(md).unwrap();
    assert_relative_eq!(p.x, points[4].east + d.delta_east, max_relative = 1e-13);
    assert_relative_eq!(p.y, points[4].north + d.delta_north, max_relative = 1e-13);
    assert_relative_eq!(p.z, -(points[4].tvd + d.delta_tvd), max_relative = 1e-13);
}

#[test]
fn test_out_of_range_reports_survey_bounds() {
    let path = common::deviated_path(FrameParams::default());
    assert_eq!(
        path.interpolate(-1.0),
        Err(WellPathError::MdOutOfRange {
            requested: -1.0,
            min_md: 0.0,
            max_md: 3500.0
        })
    );
    let err = path.interpolate(3500.01).unwrap_err();
    assert!(err
        .to_string()
        .contains("outside surveyed range [0, 3500]"));
}
