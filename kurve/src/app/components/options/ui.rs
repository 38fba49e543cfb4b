use crate::app::components::channel_color;
use crate::app::session::Session;

/// Actions requested from the options panel this frame. Load and export are
/// handed back to the app because they need the file dialog and the config.
#[derive(Debug, Default)]
pub struct OptionsResponse {
    pub load_requested: bool,
    pub export_requested: bool,
    pub crop_toggled: bool,
}

pub fn render(session: &mut Session, ui: &mut egui::Ui) -> OptionsResponse {
    let mut response = OptionsResponse::default();

    ui.heading("Options");
    if ui.button("Load File").clicked() {
        response.load_requested = true;
    }
    if ui.button("Save Plot").clicked() {
        response.export_requested = true;
    }

    ui.separator();
    ui.label("Channels to plot");
    let mut toggled = None;
    for (idx, entry) in session.channels.iter().enumerate() {
        let mut selected = entry.selected;
        let label = egui::RichText::new(&entry.name).color(channel_color(entry.color_index));
        if ui.checkbox(&mut selected, label).changed() {
            toggled = Some(idx);
        }
    }
    if let Some(idx) = toggled {
        session.toggle_channel(idx);
    }

    ui.separator();
    ui.label("Crop Borders");
    let mut crop_active = session.crop_offset > 0.0;
    if ui.toggle_value(&mut crop_active, "Toggle Offset").changed() {
        response.crop_toggled = true;
    }

    response
}
