use clap::Parser;
use gui::core::gui::TrackPlot;
use racetrack::core::racecar::Racecar;
use racetrack::core::renderer::TrackRenderer;
use racetrack::interfaces::surface::DrawCommand;
use racetrack::pre::check_view_opts_pars::check_view_opts_pars;
use racetrack::pre::read_track::{get_trackfile_path, read_track};
use racetrack::pre::read_view_pars::read_view_pars;
use racetrack::pre::view_opts::ViewOpts;
use std::time::Instant;

// window size of the GUI in pixels
const WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get view options from the command line arguments and read view parameters
    let view_opts: ViewOpts = ViewOpts::parse();
    let view_pars = read_view_pars(view_opts.parfile_path.as_path())?;

    // check view options and parameters
    check_view_opts_pars(&view_opts, &view_pars)?;

    // load track and create racecars
    let trackfile_path =
        get_trackfile_path(view_opts.parfile_path.as_path(), &view_pars.track_pars.name);
    let waypoints = read_track(trackfile_path.as_path())?;
    let racecars = view_pars
        .racecar_pars_all
        .iter()
        .map(Racecar::from_pars)
        .collect::<anyhow::Result<Vec<Racecar>>>()?;

    // print track details
    println!(
        "INFO: Viewing track {} with {} waypoints and {} racecars",
        view_pars.track_pars.name,
        waypoints.len(),
        racecars.len()
    );

    if waypoints.len() < 3 {
        println!(
            "WARNING: Track {} has less than 3 waypoints and does not form a visible loop!",
            view_pars.track_pars.name
        )
    }

    // create the renderer (calculates the track edges)
    let renderer = TrackRenderer::new(
        waypoints,
        racecars,
        view_pars.track_pars.edge_mode,
        view_pars.display_opts,
    )?;

    println!(
        "INFO: Waypoints are ordered {} (edge mode {:?})",
        if renderer.track().is_clockwise() {
            "clockwise"
        } else {
            "counter-clockwise"
        },
        renderer.track().edge_mode()
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if !view_opts.gui {
        // HEADLESS CASE ---------------------------------------------------------------------------
        let t_start = Instant::now();

        let mut draw_commands: Vec<DrawCommand> = vec![];
        renderer.render_frame(&mut draw_commands);

        if view_opts.debug {
            for waypoint in renderer.track().waypoints().iter() {
                println!("DEBUG: Waypoint {}", waypoint);
            }
            for racecar in renderer.racecars().iter() {
                println!("DEBUG: Racecar {}", racecar);
            }
            for draw_command in draw_commands.iter() {
                println!("DEBUG: Draw {}", draw_command);
            }
        }

        println!(
            "INFO: Rendered a frame with {} draw commands",
            draw_commands.len()
        );
        println!(
            "INFO: Execution time (total): {}ms",
            t_start.elapsed().as_millis()
        );
    } else {
        // GUI CASE --------------------------------------------------------------------------------
        // start GUI (must be done in the main thread)
        let padding = view_opts.padding;
        let native_options = eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
            ..Default::default()
        };

        eframe::run_native(
            "Racetrack Viewer",
            native_options,
            Box::new(move |cc| Box::new(TrackPlot::new(renderer, padding, cc.egui_ctx.clone()))),
        )
        .map_err(|err| anyhow::anyhow!("Failed to run the GUI: {}", err))?;
    }

    Ok(())
}
