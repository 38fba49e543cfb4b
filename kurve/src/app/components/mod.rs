pub mod exporter;
pub mod metrics;
pub mod options;
pub mod plotter;

/// Resolve a channel's palette slot to an egui color.
pub fn channel_color(index: usize) -> egui::Color32 {
    let (r, g, b) = measure_table::palette_color(index);
    egui::Color32::from_rgb(r, g, b)
}
