#![warn(clippy::all, rust_2018_idioms)]

mod app;

pub use app::config::Config;
pub use app::session::Session;
pub use app::EguiApp;
