use crate::interfaces::egui_surface::EguiSurface;
use eframe::egui;
use racetrack::core::renderer::TrackRenderer;
use std::thread;

#[derive(Debug)]
pub struct TrackPlot {
    pub renderer: TrackRenderer,
    pub axes_expansion: [f64; 4],
}

impl TrackPlot {
    pub fn new(renderer: TrackRenderer, padding_size: f64, ctx: egui::Context) -> TrackPlot {
        // get the shown track area (calculated once since the track never changes)
        let axes_expansion = renderer.track().get_axes_expansion(padding_size);

        // wake up the GUI whenever a redraw is requested (the renderer keeps a sender itself, so
        // the loop runs as long as the renderer and thus the app is alive)
        let redraw_rx = renderer.redraw_listener();

        let _ = thread::spawn(move || {
            while redraw_rx.recv().is_ok() {
                ctx.request_repaint();
            }
        });

        TrackPlot {
            renderer,
            axes_expansion,
        }
    }

    pub fn set_ui_content(&self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), egui::Sense::hover());

        // get transformation from track units to pixels in the window (both with the y axis
        // pointing down), the square track area is fit into the largest centered square
        let [x_min, x_max, y_min, y_max] = self.axes_expansion;
        let side_length = response.rect.width().min(response.rect.height());

        let to_screen = egui::emath::RectTransform::from_to(
            egui::Rect::from_min_max(
                egui::Pos2 {
                    x: x_min as f32,
                    y: y_min as f32,
                },
                egui::Pos2 {
                    x: x_max as f32,
                    y: y_max as f32,
                },
            ),
            egui::Rect::from_center_size(
                response.rect.center(),
                egui::Vec2::splat(side_length),
            ),
        );

        // DRAWING ---------------------------------------------------------------------------------
        let mut surface = EguiSurface::new(&painter, to_screen);
        self.renderer.render_frame(&mut surface);

        painter.extend(surface.into_shapes());
        response
    }
}

impl eframe::App for TrackPlot {
    /// Called each time the UI needs repainting, e.g. after a redraw request of the renderer.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // apply the latest racecar snapshot fed through a redraw handle
        self.renderer.poll_racecars();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                self.set_ui_content(ui);
            });
    }
}
