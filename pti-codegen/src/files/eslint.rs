use std::path::{Path, PathBuf};

use pti_config::eslint::EslintConfig;
use pti_core::{Error, FileRules, GeneratedFile, Result, Syntax, join_path};
use serde_json::Value;

use super::up_from;

pub const ESLINT_CONFIG: &str = "eslint.config.js";

/// `<config>/eslint.config.js`, composing the plugin presets with the
/// project's ignores and rules.
#[derive(Debug, Clone)]
pub struct EslintConfigJs {
    config: String,
    react: bool,
    options: Value,
}

impl EslintConfigJs {
    pub fn new(config: impl Into<String>, eslint: &EslintConfig) -> Result<Self> {
        let options = serde_json::to_value(eslint).map_err(|e| Error::serialize("eslint config", e))?;
        Ok(Self {
            config: config.into(),
            react: eslint.react,
            options,
        })
    }
}

impl GeneratedFile for EslintConfigJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.config.as_str(), ESLINT_CONFIG]))
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::JavaScript)
    }

    fn render(&self) -> String {
        let mut imports = vec![
            "import { resolve } from 'node:path';",
            "import eslint from '@eslint/js';",
            "import { defineConfig, globalIgnores } from 'eslint/config';",
            "import eslintImport from 'eslint-plugin-import';",
        ];
        let mut presets = vec![
            "  eslint.configs.recommended,",
            "  typescriptEslint.configs.strictTypeChecked,",
            "  typescriptEslint.configs.stylisticTypeChecked,",
            "  eslintImport.flatConfigs.recommended,",
        ];
        if self.react {
            imports.push("import eslintReact from 'eslint-plugin-react';");
            imports.push("import eslintReactHooks from 'eslint-plugin-react-hooks';");
            presets.push("  eslintReact.configs.flat.recommended,");
            presets.push("  eslintReact.configs.flat['jsx-runtime'],");
            presets.push("  eslintReactHooks.configs['recommended-latest'],");
            presets.push("  { settings: options.settings },");
        }
        imports.push("import typescriptEslint from 'typescript-eslint';");

        format!(
            r#"{imports}

const options = {options:#};

export default defineConfig([
  globalIgnores(options.ignores),
{presets}
  {{
    languageOptions: {{
      parserOptions: {{
        projectService: true,
        tsconfigRootDir: resolve(import.meta.dirname, '{root}'),
      }},
    }},
    rules: options.rules,
  }},
  ...options.configs,
]);
"#,
            imports = imports.join("\n"),
            options = self.options,
            presets = presets.join("\n"),
            root = up_from(&self.config),
        )
    }
}

/// Root `eslint.config.js` re-exporting the generated config, where ESLint
/// looks for it.
#[derive(Debug, Clone)]
pub struct RootEslintConfig {
    config: String,
}

impl RootEslintConfig {
    pub fn new(config: impl Into<String>) -> Self {
        Self {
            config: config.into(),
        }
    }
}

impl GeneratedFile for RootEslintConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ESLINT_CONFIG)
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::JavaScript)
    }

    fn render(&self) -> String {
        format!(
            "export {{ default }} from './{}';\n",
            join_path(&[self.config.as_str(), ESLINT_CONFIG])
        )
    }
}
