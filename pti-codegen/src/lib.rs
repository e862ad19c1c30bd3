//! Generated files for pti and the writer for derived compiler configs.

pub mod files;
pub mod writer;

pub use writer::{config_files, ensure_base_name, write_config, write_configs};
