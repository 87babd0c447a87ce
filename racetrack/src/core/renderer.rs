use crate::core::racecar::Racecar;
use crate::core::track::Track;
use crate::core::waypoint::{EdgeMode, ResolvedWaypoint, Waypoint};
use crate::interfaces::surface::{DrawingSurface, RgbColor};
use flume::{Receiver, Sender};
use helpers::geometry::Vector2d;
use serde::Deserialize;

/// diameter of the waypoint dots
pub const WAYPOINT_SIZE: f64 = 6.0;

/// side length of the racecar squares
pub const RACECAR_SIZE: f64 = 15.0;

/// * `show_waypoint_id` - Draw the waypoint identifiers
/// * `show_dot` - Draw a dot at every waypoint
/// * `show_centerline` - Draw the track centerline
/// * `show_tangents` - Draw the line connecting the two edges at every waypoint
/// * `show_racecars` - Draw the racecars
/// * `show_racecar_id` - Draw the racecar identifiers (only relevant if racecars are drawn)
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayOpts {
    pub show_waypoint_id: bool,
    pub show_dot: bool,
    pub show_centerline: bool,
    pub show_tangents: bool,
    pub show_racecars: bool,
    pub show_racecar_id: bool,
}

impl Default for DisplayOpts {
    fn default() -> Self {
        DisplayOpts {
            show_waypoint_id: true,
            show_dot: true,
            show_centerline: true,
            show_tangents: true,
            show_racecars: true,
            show_racecar_id: true,
        }
    }
}

/// RedrawHandle can be handed to other threads (e.g. a source of racecar snapshots) to ask the
/// host for a redraw and to feed new racecar snapshots. Pending redraw requests are coalesced into
/// one.
#[derive(Debug, Clone)]
pub struct RedrawHandle {
    redraw_tx: Sender<()>,
    racecars_tx: Sender<Vec<Racecar>>,
}

impl RedrawHandle {
    pub fn request_redraw(&self) {
        // a full channel already holds a pending request, a disconnected one has no listener left
        // that could redraw
        let _ = self.redraw_tx.try_send(());
    }

    /// The method hands a new racecar snapshot to the renderer and requests a redraw. The
    /// snapshot is applied when the host calls poll_racecars().
    pub fn send_racecars(&self, racecars: Vec<Racecar>) {
        if self.racecars_tx.send(racecars).is_ok() {
            self.request_redraw();
        }
    }
}

/// TrackRenderer owns the resolved track and the current racecar snapshots and paints them onto a
/// drawing surface.
#[derive(Debug)]
pub struct TrackRenderer {
    track: Track,
    racecars: Vec<Racecar>,
    display_opts: DisplayOpts,
    redraw_tx: Sender<()>,
    redraw_rx: Receiver<()>,
    racecars_tx: Sender<Vec<Racecar>>,
    racecars_rx: Receiver<Vec<Racecar>>,
}

impl TrackRenderer {
    /// Creates the renderer and runs the edge preprocessing pass over the closed loop of
    /// waypoints. Fails if there are no waypoints.
    pub fn new(
        waypoints: Vec<Waypoint>,
        racecars: Vec<Racecar>,
        edge_mode: EdgeMode,
        display_opts: DisplayOpts,
    ) -> anyhow::Result<TrackRenderer> {
        let track = Track::new(waypoints, edge_mode)?;
        let (redraw_tx, redraw_rx) = flume::bounded(1);
        let (racecars_tx, racecars_rx) = flume::unbounded();

        Ok(TrackRenderer {
            track,
            racecars,
            display_opts,
            redraw_tx,
            redraw_rx,
            racecars_tx,
            racecars_rx,
        })
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn racecars(&self) -> &[Racecar] {
        &self.racecars
    }

    pub fn display_opts(&self) -> DisplayOpts {
        self.display_opts
    }

    /// The method replaces the racecar snapshots drawn in the next frames. Call request_redraw()
    /// afterwards to make the host show them.
    pub fn replace_racecars(&mut self, racecars: Vec<Racecar>) {
        self.racecars = racecars;
    }

    /// The method signals the host to call render_frame() at its next paint opportunity.
    pub fn request_redraw(&self) {
        self.redraw_handle().request_redraw()
    }

    pub fn redraw_handle(&self) -> RedrawHandle {
        RedrawHandle {
            redraw_tx: self.redraw_tx.clone(),
            racecars_tx: self.racecars_tx.clone(),
        }
    }

    /// The method applies the latest racecar snapshot received through a redraw handle (older
    /// ones are skipped). It returns true if the racecars were replaced.
    pub fn poll_racecars(&mut self) -> bool {
        match self.racecars_rx.try_iter().last() {
            Some(racecars) => {
                self.replace_racecars(racecars);
                true
            }
            None => false,
        }
    }

    /// The method returns the receiving end of the redraw requests. The host polls it and
    /// repaints when it received something.
    pub fn redraw_listener(&self) -> Receiver<()> {
        self.redraw_rx.clone()
    }

    /// The method paints the track segments (in loop order, including the closing segment) and
    /// afterwards the racecars onto the surface. It does not modify any state and can be called
    /// repeatedly.
    pub fn render_frame<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let waypoints = self.track.waypoints();

        for (start, end) in self.track.cursor().segments() {
            self.render_segment(surface, &waypoints[start], &waypoints[end]);
        }

        if self.display_opts.show_racecars {
            self.render_racecars(surface);
        }
    }

    fn render_segment<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        waypoint_start: &ResolvedWaypoint,
        waypoint_end: &ResolvedWaypoint,
    ) {
        // tangent line at the end waypoint
        if self.display_opts.show_tangents {
            surface.draw_line(
                waypoint_end.edge_inside(),
                waypoint_end.edge_outside(),
                RgbColor::DARK_GREEN,
            );
        }

        // track edges
        surface.draw_line(
            waypoint_start.edge_inside(),
            waypoint_end.edge_inside(),
            RgbColor::GREEN,
        );
        surface.draw_line(
            waypoint_start.edge_outside(),
            waypoint_end.edge_outside(),
            RgbColor::GREEN,
        );

        if self.display_opts.show_centerline {
            surface.draw_line(waypoint_start.anchor(), waypoint_end.anchor(), RgbColor::GRAY);
        }

        if self.display_opts.show_dot {
            let top_left = waypoint_start.anchor().shift(&Vector2d {
                dx: -WAYPOINT_SIZE / 2.0,
                dy: -WAYPOINT_SIZE / 2.0,
            });

            surface.draw_oval(&top_left, WAYPOINT_SIZE, WAYPOINT_SIZE, RgbColor::YELLOW);
        }

        if self.display_opts.show_waypoint_id {
            surface.draw_text(waypoint_start.id(), waypoint_start.anchor(), RgbColor::RED);
        }
    }

    fn render_racecars<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for racecar in self.racecars.iter() {
            let top_left = racecar.anchor().shift(&Vector2d {
                dx: -RACECAR_SIZE / 2.0,
                dy: -RACECAR_SIZE / 2.0,
            });

            surface.fill_rect(&top_left, RACECAR_SIZE, RACECAR_SIZE, racecar.color());

            if self.display_opts.show_racecar_id {
                surface.draw_text(racecar.id(), &top_left, racecar.color());
            }
        }
    }
}
