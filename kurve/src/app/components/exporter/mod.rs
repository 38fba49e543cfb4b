mod logic;

pub use logic::{export, find_unique_name};
