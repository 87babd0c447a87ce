use crate::core::closed_loop::LoopCursor;
use crate::core::waypoint::{EdgeMode, Edges, ResolvedWaypoint, Waypoint};
use anyhow::Context;
use helpers::general::InputValueError;
use serde::Deserialize;

/// * `name` - Track name, the waypoints are read from tracks/<name>.csv
/// * `edge_mode` - Arithmetic used to offset the track edges from the waypoints (default: Exact)
#[derive(Debug, Deserialize, Clone)]
pub struct TrackPars {
    pub name: String,
    #[serde(default)]
    pub edge_mode: EdgeMode,
}

/// Track is the closed loop of waypoints. Segment i connects waypoint i with waypoint
/// (i + 1) mod N.
#[derive(Debug)]
pub struct Track {
    waypoints: Vec<ResolvedWaypoint>,
    cursor: LoopCursor,
    edge_mode: EdgeMode,
    clockwise: bool,
}

impl Track {
    pub fn new(waypoints: Vec<Waypoint>, edge_mode: EdgeMode) -> anyhow::Result<Track> {
        // check input
        if waypoints.is_empty() {
            return Err(InputValueError).context("A track requires at least one waypoint!");
        }

        let cursor = LoopCursor::new(waypoints.len())?;

        // calculate the edges of every waypoint from its neighbors in the loop (neighbor edges are
        // never read, only their anchors)
        let edges: Vec<Edges> = cursor
            .neighbors()
            .map(|(prev, idx, next)| {
                waypoints[idx].calc_edges(&waypoints[prev], &waypoints[next], edge_mode)
            })
            .collect();

        let waypoints: Vec<ResolvedWaypoint> = waypoints
            .into_iter()
            .zip(edges)
            .map(|(waypoint, edges)| ResolvedWaypoint::new(waypoint, edges))
            .collect();

        // determine if track is driven clockwise or counter-clockwise (on screen, y axis pointing
        // down) using the sign of the shoelace sum, which also holds for non-convex loops
        let tmp_area: f64 = cursor
            .segments()
            .map(|(idx, next)| {
                waypoints[idx]
                    .anchor()
                    .as_vector2d()
                    .cross(&waypoints[next].anchor().as_vector2d())
            })
            .sum();

        let clockwise = tmp_area > 0.0;

        Ok(Track {
            waypoints,
            cursor,
            edge_mode,
            clockwise,
        })
    }

    pub fn waypoints(&self) -> &[ResolvedWaypoint] {
        &self.waypoints
    }

    pub fn cursor(&self) -> LoopCursor {
        self.cursor
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// The method returns the padded bounding box [x_min, x_max, y_min, y_max] of the track
    /// (anchors and edges), widened to a square shape.
    pub fn get_axes_expansion(&self, padding_size: f64) -> [f64; 4] {
        // determine min and max x and y values
        let first = self.waypoints[0].anchor();

        let (mut x_min, mut x_max, mut y_min, mut y_max) = self
            .waypoints
            .iter()
            .flat_map(|waypoint| {
                vec![
                    *waypoint.anchor(),
                    *waypoint.edge_inside(),
                    *waypoint.edge_outside(),
                ]
            })
            .fold(
                (first.x, first.x, first.y, first.y),
                |(x_min, x_max, y_min, y_max), point| {
                    (
                        x_min.min(point.x),
                        x_max.max(point.x),
                        y_min.min(point.y),
                        y_max.max(point.y),
                    )
                },
            );

        // apply padding
        x_min -= padding_size;
        x_max += padding_size;
        y_min -= padding_size;
        y_max += padding_size;

        // update min and max values such that its a square shape
        let width = x_max - x_min;
        let height = y_max - y_min;

        if width > height {
            let diff = width - height;
            y_min -= diff / 2.0;
            y_max += diff / 2.0;
        } else {
            let diff = height - width;
            x_min -= diff / 2.0;
            x_max += diff / 2.0;
        }

        [x_min, x_max, y_min, y_max]
    }
}
