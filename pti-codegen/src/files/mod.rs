//! Generated project files.

mod eslint;
mod json;
mod release_it;
mod rollup;
mod templates;
mod vite;
mod vitest;

use pti_core::join_path;

pub use eslint::{ESLINT_CONFIG, EslintConfigJs, RootEslintConfig};
pub use json::{JsonFile, render_json};
pub use release_it::{ReleaseChannel, ReleaseItConfig};
pub use rollup::RollupConfigJs;
pub use templates::{GitIgnore, License, PrettierRc, SourceIndex, YarnRc};
pub use vite::{AppTsx, DevEntry, IndexHtml, ReactEntry, ViteConfigTs};
pub use vitest::{PlaceholderTest, VitestConfigTs};

/// Relative path from `folder` back up to the repository root.
pub(crate) fn up_from(folder: &str) -> String {
    let depth = join_path(&[folder])
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .count();
    join_path(&vec![".."; depth])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_from() {
        assert_eq!(up_from("config"), "..");
        assert_eq!(up_from("build/config"), "../..");
        assert_eq!(up_from("./dev/"), "..");
        assert_eq!(up_from("."), ".");
    }
}
