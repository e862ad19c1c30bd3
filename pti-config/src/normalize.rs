//! The normalization table for TypeScript's numeric compiler enums.
//!
//! TypeScript's API represents `module`, `moduleResolution`,
//! `moduleDetection` and `target` as numeric `const enum` codes, while
//! `tsconfig.json` expects their names. Each enum here is closed: it
//! deserializes from either form and always serializes to the name, so a
//! typed option set can never emit a raw code.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};
use serde_json::{Map, Value};

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident(key = $key:literal, lowercase = $lower:literal) {
            $($variant:ident = $code:literal => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The compiler option this enum is the value of.
            pub const KEY: &'static str = $key;

            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> u64 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Name as spelled in TypeScript's enum declaration
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Name as written to tsconfig.json
            pub fn canonical(self) -> String {
                if $lower {
                    self.name().to_ascii_lowercase()
                } else {
                    self.name().to_string()
                }
            }

            pub fn from_code(code: u64) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(name))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.canonical())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.canonical())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct CodeOrName;

                impl<'de> Visitor<'de> for CodeOrName {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "a `{}` name or numeric code", $key)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<$name, E> {
                        $name::from_code(v)
                            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<$name, E> {
                        u64::try_from(v)
                            .ok()
                            .and_then($name::from_code)
                            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$name, E> {
                        $name::from_name(v)
                            .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
                    }
                }

                deserializer.deserialize_any(CodeOrName)
            }
        }
    };
}

option_enum! {
    /// `compilerOptions.module`
    ModuleKind(key = "module", lowercase = false) {
        None = 0 => "None",
        CommonJs = 1 => "CommonJS",
        Amd = 2 => "AMD",
        Umd = 3 => "UMD",
        System = 4 => "System",
        Es2015 = 5 => "ES2015",
        Es2020 = 6 => "ES2020",
        Es2022 = 7 => "ES2022",
        EsNext = 99 => "ESNext",
        Node16 = 100 => "Node16",
        Node18 = 101 => "Node18",
        Node20 = 102 => "Node20",
        NodeNext = 199 => "NodeNext",
        Preserve = 200 => "Preserve",
    }
}

option_enum! {
    /// `compilerOptions.moduleResolution`
    ModuleResolutionKind(key = "moduleResolution", lowercase = false) {
        Classic = 1 => "Classic",
        Node10 = 2 => "Node10",
        Node16 = 3 => "Node16",
        NodeNext = 99 => "NodeNext",
        Bundler = 100 => "Bundler",
    }
}

option_enum! {
    /// `compilerOptions.moduleDetection`, written lowercased
    ModuleDetectionKind(key = "moduleDetection", lowercase = true) {
        Legacy = 1 => "Legacy",
        Auto = 2 => "Auto",
        Force = 3 => "Force",
    }
}

option_enum! {
    /// `compilerOptions.target`
    ScriptTarget(key = "target", lowercase = false) {
        Es3 = 0 => "ES3",
        Es5 = 1 => "ES5",
        Es2015 = 2 => "ES2015",
        Es2016 = 3 => "ES2016",
        Es2017 = 4 => "ES2017",
        Es2018 = 5 => "ES2018",
        Es2019 = 6 => "ES2019",
        Es2020 = 7 => "ES2020",
        Es2021 = 8 => "ES2021",
        Es2022 = 9 => "ES2022",
        Es2023 = 10 => "ES2023",
        Es2024 = 11 => "ES2024",
        EsNext = 99 => "ESNext",
        Json = 100 => "JSON",
    }
}

/// Look up the canonical name of `code` for the compiler option `key`.
///
/// Returns `None` for keys outside the table and for codes the table does
/// not know.
pub fn canonical_name(key: &str, code: u64) -> Option<String> {
    match key {
        "module" => ModuleKind::from_code(code).map(ModuleKind::canonical),
        "moduleResolution" => {
            ModuleResolutionKind::from_code(code).map(ModuleResolutionKind::canonical)
        }
        "moduleDetection" => {
            ModuleDetectionKind::from_code(code).map(ModuleDetectionKind::canonical)
        }
        "target" => ScriptTarget::from_code(code).map(ScriptTarget::canonical),
        _ => None,
    }
}

/// Replace numeric enum codes in a raw compiler-options object with their
/// names.
///
/// Only top-level values are inspected. Non-numeric values, numeric values
/// under other keys and codes missing from the table pass through as-is.
pub fn normalize_compiler_options(options: &Map<String, Value>) -> Map<String, Value> {
    options
        .iter()
        .map(|(key, value)| {
            let normalized = value
                .as_u64()
                .and_then(|code| canonical_name(key, code))
                .map(Value::String)
                .unwrap_or_else(|| value.clone());
            (key.clone(), normalized)
        })
        .collect()
}
