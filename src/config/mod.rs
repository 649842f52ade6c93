//! JSON configuration for the command-line tools.
pub mod lines;

pub use lines::{load_config, LineOutputConfig, LineToolConfig, ScanMode};
