//! Core utilities and types for the pti build-tools generator.
//!
//! This crate provides the pieces every generator shares: the error type,
//! the generated-file model and its writer, the optional code formatter,
//! repository-root discovery and package-manager invocation.

mod error;
mod file;
mod format;
mod process;
mod root;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
pub use format::{Formatter, Syntax};
pub use process::run;
pub use root::find_repo_root;
// String and path utilities
pub use utils::{join_path, to_camel_case};
