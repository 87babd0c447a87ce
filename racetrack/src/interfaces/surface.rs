use anyhow::Context;
use helpers::geometry::Point2d;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const DARK_GREEN: RgbColor = RgbColor::new(0, 128, 0);
    pub const GREEN: RgbColor = RgbColor::new(0, 255, 0);
    pub const GRAY: RgbColor = RgbColor::new(128, 128, 128);
    pub const YELLOW: RgbColor = RgbColor::new(255, 255, 0);
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> RgbColor {
        RgbColor { r, g, b }
    }

    /// from_css converts a CSS color string (e.g. "#ffafaf" or "pink") into an RGB color. The
    /// alpha channel is ignored.
    pub fn from_css(color: &str) -> anyhow::Result<RgbColor> {
        let tmp_color = color
            .parse::<css_color_parser::Color>()
            .context(format!("Could not parse color {}!", color))?;

        Ok(RgbColor {
            r: tmp_color.r,
            g: tmp_color.g,
            b: tmp_color.b,
        })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// DrawingSurface is the 2D canvas a track renderer paints onto. The host binds these primitives
/// to its real canvas; the renderer never issues anything else.
pub trait DrawingSurface {
    fn draw_line(&mut self, from: &Point2d, to: &Point2d, color: RgbColor);

    /// Fills the axis-aligned rectangle spanned from its top left corner.
    fn fill_rect(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor);

    /// Outlines the oval inscribed into the axis-aligned rectangle spanned from its top left
    /// corner.
    fn draw_oval(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor);

    /// Draws a text whose baseline starts at the inserted position.
    fn draw_text(&mut self, text: &str, pos: &Point2d, color: RgbColor);
}

/// DrawCommand is a single recorded drawing primitive, see the DrawingSurface implementation for
/// Vec<DrawCommand>.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point2d,
        to: Point2d,
        color: RgbColor,
    },
    FilledRect {
        top_left: Point2d,
        width: f64,
        height: f64,
        color: RgbColor,
    },
    Oval {
        top_left: Point2d,
        width: f64,
        height: f64,
        color: RgbColor,
    },
    Text {
        text: String,
        pos: Point2d,
        color: RgbColor,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrawCommand::Line { from, to, color } => write!(f, "line {} -> {} {}", from, to, color),
            DrawCommand::FilledRect {
                top_left,
                width,
                height,
                color,
            } => write!(f, "rect {} {}x{} {}", top_left, width, height, color),
            DrawCommand::Oval {
                top_left,
                width,
                height,
                color,
            } => write!(f, "oval {} {}x{} {}", top_left, width, height, color),
            DrawCommand::Text { text, pos, color } => {
                write!(f, "text \"{}\" at {} {}", text, pos, color)
            }
        }
    }
}

/// Recording surface, used for headless rendering.
impl DrawingSurface for Vec<DrawCommand> {
    fn draw_line(&mut self, from: &Point2d, to: &Point2d, color: RgbColor) {
        self.push(DrawCommand::Line {
            from: *from,
            to: *to,
            color,
        })
    }
    fn fill_rect(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor) {
        self.push(DrawCommand::FilledRect {
            top_left: *top_left,
            width,
            height,
            color,
        })
    }
    fn draw_oval(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor) {
        self.push(DrawCommand::Oval {
            top_left: *top_left,
            width,
            height,
            color,
        })
    }
    fn draw_text(&mut self, text: &str, pos: &Point2d, color: RgbColor) {
        self.push(DrawCommand::Text {
            text: text.to_owned(),
            pos: *pos,
            color,
        })
    }
}
