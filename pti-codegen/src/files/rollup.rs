use std::path::{Path, PathBuf};

use pti_config::rollup::RollupConfig;
use pti_core::{Error, FileRules, GeneratedFile, Result, Syntax, join_path};
use serde_json::Value;

/// `<config>/rollup/<format>.config.js`
#[derive(Debug, Clone)]
pub struct RollupConfigJs {
    config: String,
    format: &'static str,
    tsconfig: String,
    options: Value,
}

impl RollupConfigJs {
    pub fn new(config: impl Into<String>, rollup: &RollupConfig) -> Result<Self> {
        let options =
            serde_json::to_value(rollup).map_err(|e| Error::serialize("rollup config", e))?;
        Ok(Self {
            config: config.into(),
            format: rollup.format.name(),
            tsconfig: rollup.tsconfig.clone(),
            options,
        })
    }
}

impl GeneratedFile for RollupConfigJs {
    fn path(&self, base: &Path) -> PathBuf {
        let file = format!("{}.config.js", self.format);
        base.join(join_path(&[self.config.as_str(), "rollup", file.as_str()]))
    }

    fn rules(&self) -> FileRules {
        FileRules::formatted(Syntax::JavaScript)
    }

    fn render(&self) -> String {
        format!(
            r#"import typescript from '@rollup/plugin-typescript';

const options = {options:#};

export default {{
  ...options,
  external: [...options.external, /node:/],
  plugins: [typescript({{ tsconfig: '{tsconfig}' }})],
}};
"#,
            options = self.options,
            tsconfig = self.tsconfig,
        )
    }
}
