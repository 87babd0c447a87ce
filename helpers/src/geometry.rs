use approx::ulps_eq;
use serde::Deserialize;
use std::fmt;

// POINT -------------------------------------------------------------------------------------------
/// Point2d is a position in the drawing plane. The units are arbitrary, but they usually map to
/// pixel coordinates with (0, 0) at the top left corner and the y axis pointing down.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub fn new(x: f64, y: f64) -> Point2d {
        Point2d { x, y }
    }
    pub fn as_vector2d(&self) -> Vector2d {
        Vector2d {
            dx: self.x,
            dy: self.y,
        }
    }
    pub fn shift(&self, other: &Vector2d) -> Point2d {
        self.as_vector2d().add(other).as_point2d()
    }
    /// vector_to returns the vector pointing from this point to the other point.
    pub fn vector_to(&self, other: &Point2d) -> Vector2d {
        other.as_vector2d().sub(&self.as_vector2d())
    }
    pub fn dist(&self, other: &Point2d) -> f64 {
        self.vector_to(other).abs()
    }
    pub fn midpoint(&self, other: &Point2d) -> Point2d {
        self.shift(&self.vector_to(other).mult(0.5))
    }
}

impl PartialEq for Point2d {
    fn eq(&self, other: &Self) -> bool {
        ulps_eq!(self.x, other.x) && ulps_eq!(self.y, other.y)
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// VECTOR ------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Copy)]
pub struct Vector2d {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2d {
    /// from_angle returns the unit vector pointing in the direction of the inserted angle (rad),
    /// measured from the positive x axis towards the positive y axis.
    pub fn from_angle(angle: f64) -> Vector2d {
        Vector2d {
            dx: angle.cos(),
            dy: angle.sin(),
        }
    }
    pub fn as_point2d(&self) -> Point2d {
        Point2d {
            x: self.dx,
            y: self.dy,
        }
    }
    pub fn sub(&self, other: &Self) -> Vector2d {
        Vector2d {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
        }
    }
    pub fn add(&self, other: &Self) -> Vector2d {
        Vector2d {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }
    pub fn mult(&self, k: f64) -> Vector2d {
        Vector2d {
            dx: self.dx * k,
            dy: self.dy * k,
        }
    }
    /// trunc truncates both components toward zero (pixel arithmetic).
    pub fn trunc(&self) -> Vector2d {
        Vector2d {
            dx: self.dx.trunc(),
            dy: self.dy.trunc(),
        }
    }
    /// convenience function (strictly speaking, the cross product is not defined in a 2D space)
    pub fn cross(&self, other: &Self) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }
    pub fn abs(&self) -> f64 {
        (self.dx.powf(2.0) + self.dy.powf(2.0)).sqrt()
    }
    /// angle_deg returns the direction of the vector in degrees within (-180, 180].
    pub fn angle_deg(&self) -> f64 {
        self.dy.atan2(self.dx).to_degrees()
    }
}

impl PartialEq for Vector2d {
    fn eq(&self, other: &Self) -> bool {
        ulps_eq!(self.dx, other.dx) && ulps_eq!(self.dy, other.dy)
    }
}
