pub mod settings;

pub use settings::{ListMapping, Settings};
