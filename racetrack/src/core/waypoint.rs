use anyhow::Context;
use helpers::general::InputValueError;
use helpers::geometry::{Point2d, Vector2d};
use serde::Deserialize;
use std::fmt;

/// EdgeMode determines the arithmetic used to offset the track edges from a waypoint's anchor.
///
/// * `Exact` - Half the track width is applied as a real number
/// * `PixelTruncated` - Track width and half width are truncated to whole units, and each offset
/// component is truncated toward zero before it is added to the anchor (integer pixel placement)
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    Exact,
    PixelTruncated,
}

impl Default for EdgeMode {
    fn default() -> Self {
        EdgeMode::Exact
    }
}

/// Edges holds the two boundary points of the track at a waypoint. Which side is called inside is
/// purely a matter of the waypoint order, not of the actual track curvature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub inside: Point2d,
    pub outside: Point2d,
}

/// Waypoint is a control point of the track centerline together with the full track width at that
/// point. Its edges are not known before the neighbors in the loop are known, see ResolvedWaypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    id: String,
    anchor: Point2d,
    track_width: f64,
}

impl Waypoint {
    pub fn new(id: &str, x: f64, y: f64, track_width: f64) -> anyhow::Result<Waypoint> {
        if id.is_empty() {
            return Err(InputValueError).context("Waypoint id must not be empty!");
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(InputValueError).context(format!(
                "Anchor of waypoint {} is ({}, {}), but coordinates must be finite!",
                id, x, y
            ));
        }
        if !(track_width > 0.0 && track_width.is_finite()) {
            return Err(InputValueError).context(format!(
                "Track width of waypoint {} is {}, but must be a positive number!",
                id, track_width
            ));
        }

        Ok(Waypoint {
            id: id.to_owned(),
            anchor: Point2d { x, y },
            track_width,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn anchor(&self) -> &Point2d {
        &self.anchor
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// The method calculates the inside and outside edges of the track at this waypoint. The
    /// heading through the waypoint is the direction of the vector from the next to the previous
    /// waypoint's anchor, the edges are offset by half the track width perpendicular to it.
    pub fn calc_edges(&self, prev: &Waypoint, next: &Waypoint, edge_mode: EdgeMode) -> Edges {
        let heading = next.anchor.vector_to(&prev.anchor).angle_deg();

        let dir_inside = Vector2d::from_angle((heading + 90.0).to_radians());
        let dir_outside = Vector2d::from_angle((heading - 90.0).to_radians());

        match edge_mode {
            EdgeMode::Exact => {
                let track_width_half = self.track_width / 2.0;

                Edges {
                    inside: self.anchor.shift(&dir_inside.mult(track_width_half)),
                    outside: self.anchor.shift(&dir_outside.mult(track_width_half)),
                }
            }
            EdgeMode::PixelTruncated => {
                let track_width_half = (self.track_width.trunc() / 2.0).trunc();

                Edges {
                    inside: self
                        .anchor
                        .shift(&dir_inside.mult(track_width_half).trunc()),
                    outside: self
                        .anchor
                        .shift(&dir_outside.mult(track_width_half).trunc()),
                }
            }
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={} anchor={} track_width={}",
            self.id, self.anchor, self.track_width
        )
    }
}

/// ResolvedWaypoint is a waypoint whose edges were calculated by the preprocessing pass of a
/// track. It can only be created there, and its edges never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWaypoint {
    waypoint: Waypoint,
    edges: Edges,
}

impl ResolvedWaypoint {
    pub(crate) fn new(waypoint: Waypoint, edges: Edges) -> ResolvedWaypoint {
        ResolvedWaypoint { waypoint, edges }
    }

    pub fn waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    pub fn id(&self) -> &str {
        self.waypoint.id()
    }

    pub fn anchor(&self) -> &Point2d {
        self.waypoint.anchor()
    }

    pub fn track_width(&self) -> f64 {
        self.waypoint.track_width()
    }

    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    pub fn edge_inside(&self) -> &Point2d {
        &self.edges.inside
    }

    pub fn edge_outside(&self) -> &Point2d {
        &self.edges.outside
    }
}

impl fmt::Display for ResolvedWaypoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} edge_inside={} edge_outside={}",
            self.waypoint, self.edges.inside, self.edges.outside
        )
    }
}
