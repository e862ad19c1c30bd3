//! Literal project files that only vary by directory names.

use std::path::{Path, PathBuf};

use pti_core::{FileRules, GeneratedFile, Overwrite, Syntax, join_path};

/// The .gitignore file.
#[derive(Debug, Clone)]
pub struct GitIgnore {
    library: String,
}

impl GitIgnore {
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
        }
    }
}

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            syntax: None,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"# Dependencies
node_modules/

# Build output
{library}/
coverage/

# Yarn
.yarn/*
!.yarn/patches
!.yarn/plugins
!.yarn/releases

# Environment
.env
.env.local

# IDE
.idea/
.vscode/

# OS
.DS_Store
Thumbs.db

# Debug
*.log
"#,
            library = self.library.trim_end_matches('/')
        )
    }
}

/// MIT LICENSE.
#[derive(Debug, Clone)]
pub struct License {
    holder: String,
}

impl License {
    pub fn new(holder: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
        }
    }
}

impl GeneratedFile for License {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("LICENSE")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            syntax: None,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"MIT License

Copyright (c) {}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#,
            self.holder
        )
    }
}

/// The .prettierrc file.
pub struct PrettierRc;

impl GeneratedFile for PrettierRc {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".prettierrc")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
            syntax: Some(Syntax::Json),
        }
    }

    fn render(&self) -> String {
        r#"{
  "arrowParens": "always",
  "bracketSpacing": true,
  "printWidth": 120,
  "semi": true,
  "singleQuote": true,
  "tabWidth": 2,
  "trailingComma": "all"
}
"#
        .to_string()
    }
}

/// The .yarnrc.yml file.
pub struct YarnRc;

impl GeneratedFile for YarnRc {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".yarnrc.yml")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        "nodeLinker: node-modules\n".to_string()
    }
}

/// `<source>/index.ts` placeholder for a project without sources yet.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    source: String,
}

impl SourceIndex {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl GeneratedFile for SourceIndex {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.source.as_str(), "index.ts"]))
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            syntax: Some(Syntax::TypeScript),
        }
    }

    fn render(&self) -> String {
        "export const REPLACE_ME = {};\n".to_string()
    }
}
