// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Manifest handling for pti: the project's `package.json`, the toolchain
//! manifest bundled into pti, and optional `pti.toml` project settings.

mod error;
mod package_json;
mod settings;
mod toolchain;

pub use error::{Error, Result};
pub use package_json::{PACKAGE_JSON, PackageJson};
pub use settings::{
    Directories, Features, FormatterSettings, PackageManager, SETTINGS_FILE, Settings,
    TsConfigSettings, invalid_directory,
};
pub use toolchain::Toolchain;
