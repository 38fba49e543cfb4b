mod components;
pub mod config;
pub mod session;

use components::{exporter, metrics, options, plotter};
use config::Config;
use session::Session;

pub struct EguiApp {
    config: Config,
    session: Session,
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            config,
            session: Session::default(),
        }
    }

    /// Pick an input file and load it. Cancelling the dialog keeps the
    /// current dataset untouched.
    fn load_file_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select a file")
            .add_filter("CSV files", &["csv"])
            .add_filter("Spreadsheet files", &["xlsx"])
            .pick_file();
        match picked {
            Some(path) => self.session.load_from(&path),
            None => log::debug!("file dialog cancelled, keeping current dataset"),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let response = egui::SidePanel::right("options_panel")
            .min_width(180.0)
            .show(ctx, |ui| options::render(&mut self.session, ui))
            .inner;

        egui::TopBottomPanel::bottom("metrics_panel")
            .min_height(100.0)
            .show(ctx, |ui| metrics::render(&self.session, ui));

        egui::CentralPanel::default().show(ctx, |ui| plotter::render(&self.session, ui));

        if response.load_requested {
            self.load_file_dialog();
        }
        if response.crop_toggled {
            self.session.toggle_crop(self.config.crop_offset);
        }
        if response.export_requested {
            if let Err(err) = exporter::export(&self.session, &self.config) {
                log::error!("{}", err);
            }
        }
    }
}
