pub mod egui_surface;
