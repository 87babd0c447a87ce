use crate::core::racecar::RacecarPars;
use crate::core::renderer::DisplayOpts;
use crate::core::track::TrackPars;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// ViewPars is used to store all other parameter structs. Display options and racecars are
/// optional (all display options enabled, no racecars).
#[derive(Debug, Deserialize, Clone)]
pub struct ViewPars {
    pub track_pars: TrackPars,
    #[serde(default)]
    pub display_opts: DisplayOpts,
    #[serde(default)]
    pub racecar_pars_all: Vec<RacecarPars>,
}

/// read_view_pars reads the JSON file and decodes the JSON string into the view parameters struct.
pub fn read_view_pars(filepath: &Path) -> anyhow::Result<ViewPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}
