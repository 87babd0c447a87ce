use eframe::egui;
use helpers::geometry::{Point2d, Vector2d};
use racetrack::interfaces::surface::{DrawingSurface, RgbColor};

const LINE_WIDTH: f32 = 1.0;
const FONT_SIZE: f32 = 12.0;

/// EguiSurface binds the drawing primitives of the track renderer to egui shapes. Positions are
/// transformed from track units into the painter's screen rectangle, the shapes are collected
/// and handed to the painter at once.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    to_screen: egui::emath::RectTransform,
    shapes: Vec<egui::Shape>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, to_screen: egui::emath::RectTransform) -> Self {
        EguiSurface {
            painter,
            to_screen,
            shapes: vec![],
        }
    }

    pub fn into_shapes(self) -> Vec<egui::Shape> {
        self.shapes
    }

    fn to_pos2(&self, point: &Point2d) -> egui::Pos2 {
        self.to_screen.transform_pos(egui::Pos2 {
            x: point.x as f32,
            y: point.y as f32,
        })
    }
}

fn to_color32(color: RgbColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl DrawingSurface for EguiSurface<'_> {
    fn draw_line(&mut self, from: &Point2d, to: &Point2d, color: RgbColor) {
        self.shapes.push(egui::Shape::line_segment(
            [self.to_pos2(from), self.to_pos2(to)],
            egui::Stroke::new(LINE_WIDTH, to_color32(color)),
        ));
    }

    fn fill_rect(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor) {
        let bottom_right = top_left.shift(&Vector2d {
            dx: width,
            dy: height,
        });

        self.shapes.push(egui::Shape::rect_filled(
            egui::Rect::from_two_pos(self.to_pos2(top_left), self.to_pos2(&bottom_right)),
            0.0,
            to_color32(color),
        ));
    }

    fn draw_oval(&mut self, top_left: &Point2d, width: f64, height: f64, color: RgbColor) {
        // egui outlines circles only -> use the largest circle inscribed into the rectangle
        let center = top_left.shift(&Vector2d {
            dx: width / 2.0,
            dy: height / 2.0,
        });
        let radius = (width.min(height) / 2.0) as f32 * self.to_screen.scale().x;

        self.shapes.push(egui::Shape::circle_stroke(
            self.to_pos2(&center),
            radius,
            egui::Stroke::new(LINE_WIDTH, to_color32(color)),
        ));
    }

    fn draw_text(&mut self, text: &str, pos: &Point2d, color: RgbColor) {
        let pos = self.to_pos2(pos);

        let shape = self.painter.fonts(|fonts| {
            egui::Shape::text(
                fonts,
                pos,
                egui::Align2::LEFT_BOTTOM,
                text,
                egui::FontId::proportional(FONT_SIZE),
                to_color32(color),
            )
        });

        self.shapes.push(shape);
    }
}
