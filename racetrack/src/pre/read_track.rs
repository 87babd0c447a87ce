use crate::core::waypoint::Waypoint;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::{Path, PathBuf};

/// * `id` - Waypoint identifier, e.g. p1
/// * `x` - x coordinate of the anchor
/// * `y` - y coordinate of the anchor
/// * `track_width` - Full track width at the waypoint (must be positive)
#[derive(Debug, Deserialize, Clone)]
pub struct CsvWaypoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub track_width: f64,
}

/// get_trackfile_path returns the path of the track file that belongs to the inserted parameter
/// file, i.e. <parfile dir>/../tracks/<track name>.csv.
pub fn get_trackfile_path(parfile_path: &Path, track_name: &str) -> PathBuf {
    let mut trackfile_path = parfile_path.to_owned();
    trackfile_path.pop();
    trackfile_path.pop();
    trackfile_path.push("tracks");
    trackfile_path.push(track_name);
    trackfile_path.set_extension("csv");
    trackfile_path
}

/// read_track reads the waypoints of a track from a CSV file (in loop order).
pub fn read_track(trackfile_path: &Path) -> anyhow::Result<Vec<Waypoint>> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(trackfile_path)
        .context(format!(
            "Failed to open track file {}!",
            trackfile_path.display()
        ))?;

    read_waypoints(&fh).context(format!(
        "Failed to read track file {}!",
        trackfile_path.display()
    ))
}

/// read_waypoints parses CSV track data with the header id,x,y,track_width. Lines starting with #
/// are ignored.
pub fn read_waypoints<R: Read>(reader: R) -> anyhow::Result<Vec<Waypoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut waypoints: Vec<Waypoint> = vec![];

    for (i, result) in csv_reader.deserialize().enumerate() {
        let csv_waypoint: CsvWaypoint =
            result.context(format!("Failed to parse waypoint {}!", i + 1))?;

        waypoints.push(Waypoint::new(
            &csv_waypoint.id,
            csv_waypoint.x,
            csv_waypoint.y,
            csv_waypoint.track_width,
        )?);
    }

    Ok(waypoints)
}
