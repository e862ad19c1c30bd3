use std::path::{Path, PathBuf};

use pti_config::{Project, vite::ViteConfig};
use pti_core::{Error, FileRules, GeneratedFile, Overwrite, Result, Syntax, join_path};
use serde_json::Value;

use super::up_from;

/// `<config>/vite.config.ts`
#[derive(Debug, Clone)]
pub struct ViteConfigTs {
    config: String,
    options: Value,
}

impl ViteConfigTs {
    pub fn new(config: impl Into<String>, vite: &ViteConfig) -> Result<Self> {
        let options = serde_json::to_value(vite).map_err(|e| Error::serialize("vite config", e))?;
        Ok(Self {
            config: config.into(),
            options,
        })
    }
}

impl GeneratedFile for ViteConfigTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.config.as_str(), "vite.config.ts"]))
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::TypeScript)
    }

    fn render(&self) -> String {
        format!(
            "import {{ defineConfig }} from 'vite';\n\nexport default defineConfig({:#});\n",
            self.options
        )
    }
}

fn placeholder(syntax: Syntax) -> FileRules {
    FileRules {
        overwrite: Overwrite::IfMissing,
        syntax: Some(syntax),
    }
}

/// `<development>/index.html` loading the development entry.
#[derive(Debug, Clone)]
pub struct IndexHtml {
    development: String,
    entry: &'static str,
}

impl IndexHtml {
    pub fn new(project: &Project) -> Self {
        Self {
            development: project.development.clone(),
            entry: if project.react { "index.tsx" } else { "index.ts" },
        }
    }
}

impl GeneratedFile for IndexHtml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.development.as_str(), "index.html"]))
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            syntax: None,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Development</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="./{}"></script>
  </body>
</html>
"#,
            self.entry
        )
    }
}

/// `<development>/index.ts`, logging the library's exports.
#[derive(Debug, Clone)]
pub struct DevEntry {
    development: String,
    source: String,
}

impl DevEntry {
    pub fn new(project: &Project) -> Self {
        Self {
            development: project.development.clone(),
            source: project.source.clone(),
        }
    }
}

impl GeneratedFile for DevEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.development.as_str(), "index.ts"]))
    }

    fn rules(&self) -> FileRules {
        placeholder(Syntax::TypeScript)
    }

    fn render(&self) -> String {
        let library = join_path(&[up_from(&self.development).as_str(), self.source.as_str(), "index.js"]);
        format!(
            "import * as library from '{library}';\n\nconsole.log(library);\n\ndocument.body.textContent = JSON.stringify(Object.keys(library));\n"
        )
    }
}

/// `<development>/index.tsx`, mounting `App` into the page.
#[derive(Debug, Clone)]
pub struct ReactEntry {
    development: String,
}

impl ReactEntry {
    pub fn new(project: &Project) -> Self {
        Self {
            development: project.development.clone(),
        }
    }
}

impl GeneratedFile for ReactEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.development.as_str(), "index.tsx"]))
    }

    fn rules(&self) -> FileRules {
        placeholder(Syntax::TypeScript)
    }

    fn render(&self) -> String {
        r#"import { StrictMode } from 'react';
import { createRoot } from 'react-dom/client';
import { App } from './App.tsx';

const container = document.getElementById('app');

if (!container) {
  throw new ReferenceError('No container found to render the app into.');
}

createRoot(container).render(
  <StrictMode>
    <App />
  </StrictMode>,
);
"#
        .to_string()
    }
}

/// `<development>/App.tsx`
#[derive(Debug, Clone)]
pub struct AppTsx {
    development: String,
    source: String,
}

impl AppTsx {
    pub fn new(project: &Project) -> Self {
        Self {
            development: project.development.clone(),
            source: project.source.clone(),
        }
    }
}

impl GeneratedFile for AppTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.development.as_str(), "App.tsx"]))
    }

    fn rules(&self) -> FileRules {
        placeholder(Syntax::TypeScript)
    }

    fn render(&self) -> String {
        let library = join_path(&[up_from(&self.development).as_str(), self.source.as_str(), "index.js"]);
        format!(
            r#"import * as library from '{library}';

export function App() {{
  return (
    <main>
      <h1>Development</h1>
      <pre>{{JSON.stringify(Object.keys(library), null, 2)}}</pre>
    </main>
  );
}}
"#
        )
    }
}
