use std::{fmt, str::FromStr};

use pti_core::Error;

use crate::normalize::{ModuleKind, ModuleResolutionKind};

/// An output module format built by Rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    Es,
    Cjs,
    Umd,
}

impl ModuleFormat {
    pub const ALL: [ModuleFormat; 3] = [ModuleFormat::Es, ModuleFormat::Cjs, ModuleFormat::Umd];

    pub fn name(self) -> &'static str {
        match self {
            ModuleFormat::Es => "es",
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Umd => "umd",
        }
    }

    /// The package.json field that points at this format's bundle.
    pub fn package_field(self) -> &'static str {
        match self {
            ModuleFormat::Es => "module",
            ModuleFormat::Cjs => "main",
            ModuleFormat::Umd => "browser",
        }
    }

    /// Bundle file name inside `<library>/<format>/`.
    pub fn entry_file(self) -> &'static str {
        match self {
            ModuleFormat::Es => "index.mjs",
            ModuleFormat::Cjs => "index.cjs",
            ModuleFormat::Umd => "index.js",
        }
    }

    pub fn module(self) -> ModuleKind {
        match self {
            ModuleFormat::Es => ModuleKind::NodeNext,
            ModuleFormat::Cjs => ModuleKind::Node16,
            ModuleFormat::Umd => ModuleKind::EsNext,
        }
    }

    pub fn module_resolution(self) -> ModuleResolutionKind {
        match self {
            ModuleFormat::Es => ModuleResolutionKind::NodeNext,
            ModuleFormat::Cjs => ModuleResolutionKind::Node16,
            ModuleFormat::Umd => ModuleResolutionKind::Bundler,
        }
    }

    /// Extension type declarations are renamed to for this format.
    ///
    /// UMD bundles ship no per-format declarations.
    pub fn declaration_extension(self) -> pti_core::Result<&'static str> {
        match self {
            ModuleFormat::Es => Ok("mts"),
            ModuleFormat::Cjs => Ok("cts"),
            ModuleFormat::Umd => Err(Error::invalid_argument(
                "declarations are not rewritten for \"umd\"; please pass \"cjs\" or \"es\"",
            )),
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "type \"{s}\" is invalid; please pass one of \"cjs\", \"es\" or \"umd\""
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("es".parse::<ModuleFormat>().unwrap(), ModuleFormat::Es);
        assert_eq!("cjs".parse::<ModuleFormat>().unwrap(), ModuleFormat::Cjs);
        assert_eq!("umd".parse::<ModuleFormat>().unwrap(), ModuleFormat::Umd);
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        let err = "esm".parse::<ModuleFormat>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(err.to_string().contains("\"esm\""));
    }

    #[test]
    fn test_umd_has_no_declaration_extension() {
        assert_eq!(ModuleFormat::Cjs.declaration_extension().unwrap(), "cts");
        assert_eq!(ModuleFormat::Es.declaration_extension().unwrap(), "mts");
        assert!(ModuleFormat::Umd.declaration_extension().is_err());
    }
}
