use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "racetrack-viewer",
    about = "A real-time viewer for closed racetracks and racecars written in Rust"
)]
pub struct ViewOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing of every draw command (not usable in case the GUI is activated)
    #[clap(short, long, conflicts_with = "gui")]
    pub debug: bool,

    /// Activate GUI (otherwise a single frame is rendered headless)
    #[clap(short, long, conflicts_with = "debug")]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the view parameter file
    #[clap(short, long)]
    pub parfile_path: PathBuf,

    /// Set padding between the track and the window border in track units (only relevant in case
    /// the GUI is activated)
    #[clap(long, default_value = "50.0")]
    pub padding: f64,
}
