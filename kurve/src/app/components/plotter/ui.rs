use egui_plot::Legend;

use crate::app::components::channel_color;
use crate::app::session::Session;

/// Draw the selected channels of the cropped table against the shared index.
pub fn render(session: &Session, ui: &mut egui::Ui) {
    if !session.dataset_name.is_empty() {
        ui.heading(&session.dataset_name);
    }

    egui_plot::Plot::new("channel_plot")
        .legend(Legend::default())
        .x_axis_label(format!(
            "{} ({})",
            session.current.index_name, session.x_unit
        ))
        .y_axis_label(format!("({})", session.y_unit))
        .show(ui, |plot_ui| {
            for (chan, entry) in session.current.channels.iter().zip(&session.channels) {
                if !entry.selected {
                    continue;
                }
                let points: Vec<[f64; 2]> = session
                    .current
                    .index
                    .iter()
                    .zip(&chan.values)
                    .map(|(x, y)| [*x, *y])
                    .collect();
                plot_ui.line(
                    egui_plot::Line::new(points)
                        .color(channel_color(entry.color_index))
                        .width(1.5)
                        .name(&chan.name),
                );
            }
        });
}
