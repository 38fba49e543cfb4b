use std::path::Path;

use derive_new::new;

use measure_table::{ChannelStats, LoadedDataset, Table};

/// The whole application state: the loaded table, per-channel settings, the
/// active crop offset, plus the derived cropped table and metrics that the
/// panels render from. Mutated only through the operations below; the render
/// functions take it by reference.
#[derive(Debug, Default)]
pub struct Session {
    pub table: Table,
    pub channels: Vec<ChannelEntry>,
    pub crop_offset: f64,
    /// The cropped table the plot and the metrics are computed from.
    pub current: Table,
    pub metrics: Vec<ChannelStats>,
    pub dataset_name: String,
    pub x_unit: String,
    pub y_unit: String,
}

/// Per-channel display settings, rebuilt wholesale on every file load.
/// The color index is resolved through the shared palette.
#[derive(Clone, Debug, new)]
pub struct ChannelEntry {
    pub name: String,
    pub color_index: usize,
    #[new(value = "false")]
    pub selected: bool,
}

impl Session {
    /// Load a file from disk. A failed parse is logged and leaves an empty
    /// dataset; the previous dataset is replaced either way.
    pub fn load_from(&mut self, path: &Path) {
        let dataset = match LoadedDataset::from_path(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                log::error!("unable to load {:?}: {}", path, err);
                LoadedDataset::default()
            }
        };
        self.install(dataset);
    }

    /// Replace the dataset and rebuild the channel entries, with every
    /// selection reset to off.
    pub fn install(&mut self, dataset: LoadedDataset) {
        let LoadedDataset {
            table,
            x_unit,
            y_unit,
            name,
        } = dataset;
        self.channels = table
            .channels
            .iter()
            .enumerate()
            .map(|(idx, chan)| ChannelEntry::new(chan.name.clone(), idx))
            .collect();
        self.table = table;
        self.x_unit = x_unit;
        self.y_unit = y_unit;
        self.dataset_name = name;
        self.refresh();
    }

    pub fn toggle_channel(&mut self, index: usize) {
        let Some(entry) = self.channels.get_mut(index) else {
            log::warn!("toggle requested for unknown channel index {}", index);
            return;
        };
        entry.selected = !entry.selected;
        self.refresh();
    }

    /// Flip the crop offset between zero and the configured value.
    pub fn toggle_crop(&mut self, configured_offset: f64) {
        self.crop_offset = if self.crop_offset == 0.0 {
            configured_offset
        } else {
            0.0
        };
        self.refresh();
    }

    /// Recompute the cropped table and the per-selected-channel metrics.
    pub fn refresh(&mut self) {
        self.current = self.table.crop(self.crop_offset);
        self.metrics = self
            .current
            .channels
            .iter()
            .zip(&self.channels)
            .filter(|(_, entry)| entry.selected)
            .map(|(chan, _)| ChannelStats::from_values(&chan.name, &chan.values))
            .collect();
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.selected)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Whether there is anything on the plot worth exporting.
    pub fn has_plot(&self) -> bool {
        !self.current.is_empty()
    }
}
