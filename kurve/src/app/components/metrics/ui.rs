use crate::app::components::channel_color;
use crate::app::session::Session;

/// One card per selected channel: name, mean and standard deviation in the
/// shared y-unit, framed in the channel's color.
pub fn render(session: &Session, ui: &mut egui::Ui) {
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for stats in &session.metrics {
                let color = session
                    .channels
                    .iter()
                    .find(|entry| entry.name == stats.name)
                    .map(|entry| channel_color(entry.color_index))
                    .unwrap_or(egui::Color32::GRAY);

                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(2.0, color))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&stats.name).color(color).strong());
                            ui.label(
                                egui::RichText::new(format!("Mean [{}]", session.y_unit)).strong(),
                            );
                            ui.label(format!("{}", stats.mean));
                            ui.label(
                                egui::RichText::new(format!("Std [{}]", session.y_unit)).strong(),
                            );
                            ui.label(format!("{}", stats.std));
                        });
                    });
            }
        });
    });
}
