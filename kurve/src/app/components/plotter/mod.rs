mod ui;

pub use ui::render;
