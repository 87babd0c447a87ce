use crate::interfaces::surface::RgbColor;
use anyhow::Context;
use helpers::general::InputValueError;
use helpers::geometry::Point2d;
use serde::Deserialize;
use std::fmt;

/// * `id` - Racecar identifier, e.g. R1 (drawn as label next to the car)
/// * `color` - CSS color string, e.g. #ffafaf
/// * `anchor` - Current position of the car
#[derive(Debug, Deserialize, Clone)]
pub struct RacecarPars {
    pub id: String,
    pub color: String,
    pub anchor: Point2d,
}

/// Racecar is an immutable snapshot of a car's drawable state. To move a car, a new snapshot must
/// be created.
#[derive(Debug, Clone, PartialEq)]
pub struct Racecar {
    id: String,
    color: RgbColor,
    anchor: Point2d,
}

impl Racecar {
    pub fn new(id: &str, color: RgbColor, x: f64, y: f64) -> anyhow::Result<Racecar> {
        if id.is_empty() {
            return Err(InputValueError).context("Racecar id must not be empty!");
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(InputValueError).context(format!(
                "Anchor of racecar {} is ({}, {}), but coordinates must be finite!",
                id, x, y
            ));
        }

        Ok(Racecar {
            id: id.to_owned(),
            color,
            anchor: Point2d { x, y },
        })
    }

    pub fn from_pars(racecar_pars: &RacecarPars) -> anyhow::Result<Racecar> {
        let color = RgbColor::from_css(&racecar_pars.color)
            .context(format!("Invalid color of racecar {}!", racecar_pars.id))?;

        Racecar::new(
            &racecar_pars.id,
            color,
            racecar_pars.anchor.x,
            racecar_pars.anchor.y,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> RgbColor {
        self.color
    }

    pub fn anchor(&self) -> &Point2d {
        &self.anchor
    }
}

impl fmt::Display for Racecar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={} color={} anchor={}",
            self.id, self.color, self.anchor
        )
    }
}
