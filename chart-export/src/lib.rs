#![warn(clippy::all, rust_2018_idioms)]

mod chart;

pub use chart::{render_png, ChartError, ChartStyle};
