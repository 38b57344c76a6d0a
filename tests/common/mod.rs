use camino::Utf8Path;

use wellpath::{FrameParams, SurveyStationTable, TrajectoryPath};

/// Survey log of a build-and-hold well turning from vertical to horizontal-east.
pub fn deviated_table() -> SurveyStationTable {
    SurveyStationTable::from_csv(Utf8Path::new("tests/data/deviated_well.csv"))
        .expect("test fixture must load")
}

pub fn deviated_path(frame: FrameParams) -> TrajectoryPath {
    TrajectoryPath::build(deviated_table(), frame).expect("test fixture must solve")
}
