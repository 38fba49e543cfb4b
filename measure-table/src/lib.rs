#![warn(clippy::all, rust_2018_idioms)]

mod loader;
mod palette;
mod report;
mod stats;
mod table;

pub use loader::{LoadError, LoadedDataset};
pub use palette::{palette_color, PALETTE};
pub use report::{format_report, parse_report};
pub use stats::{mean, sample_std, ChannelStats};
pub use table::{Channel, Table};
