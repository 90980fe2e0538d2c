pub mod settings;
pub mod stats;
