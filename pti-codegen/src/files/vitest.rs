use std::path::{Path, PathBuf};

use pti_config::{TEST_FOLDER, vitest::VitestConfig};
use pti_core::{Error, FileRules, GeneratedFile, Overwrite, Result, Syntax, join_path};
use serde_json::Value;

/// `<config>/vitest.config.ts`
#[derive(Debug, Clone)]
pub struct VitestConfigTs {
    config: String,
    options: Value,
}

impl VitestConfigTs {
    pub fn new(config: impl Into<String>, vitest: &VitestConfig) -> Result<Self> {
        let options =
            serde_json::to_value(vitest).map_err(|e| Error::serialize("vitest config", e))?;
        Ok(Self {
            config: config.into(),
            options,
        })
    }
}

impl GeneratedFile for VitestConfigTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.config.as_str(), "vitest.config.ts"]))
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::TypeScript)
    }

    fn render(&self) -> String {
        format!(
            "import {{ defineConfig }} from 'vitest/config';\n\nexport default defineConfig({:#});\n",
            self.options
        )
    }
}

/// `<source>/__tests__/index.test.ts`, so a fresh project has one passing
/// test.
#[derive(Debug, Clone)]
pub struct PlaceholderTest {
    source: String,
}

impl PlaceholderTest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl GeneratedFile for PlaceholderTest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(join_path(&[self.source.as_str(), TEST_FOLDER, "index.test.ts"]))
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            syntax: Some(Syntax::TypeScript),
        }
    }

    fn render(&self) -> String {
        r#"import { expect, test } from 'vitest';

test('placeholder', () => {
  expect(true).toBe(true);
});
"#
        .to_string()
    }
}
