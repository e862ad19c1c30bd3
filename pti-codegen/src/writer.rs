//! Writing derived compiler configs to disk.
//!
//! Every base name produces two files: `<name>.json` with the runtime
//! variant and `<name>.declaration.json` with the declaration variant.

use std::path::Path;

use futures::future::try_join_all;
use indexmap::IndexMap;
use pti_config::{DerivedConfigs, TsConfigOverrides, create_configs};
use pti_core::{Error, File, Formatter, GeneratedFile, Result};
use tracing::debug;

use crate::files::JsonFile;

/// Reject base names that already carry the `.json` extension.
pub fn ensure_base_name(name: &str) -> Result<()> {
    if name.ends_with(".json") {
        return Err(Error::invalid_argument(format!(
            "found extra `.json` suffix in \"{name}\"; please provide only the base name"
        )));
    }
    Ok(())
}

/// The runtime and declaration files for `name` inside `folder`.
pub fn config_files(folder: &Path, name: &str, configs: &DerivedConfigs) -> Result<[File; 2]> {
    let runtime = JsonFile::new(format!("{name}.json"), &configs.runtime)?;
    let declaration = JsonFile::new(format!("{name}.declaration.json"), &configs.declaration)?;

    Ok([runtime.to_file(folder), declaration.to_file(folder)])
}

/// Derive both variants for `name` and write them into `folder`.
pub async fn write_config(
    folder: &Path,
    name: &str,
    overrides: TsConfigOverrides,
    formatter: &Formatter,
) -> Result<DerivedConfigs> {
    ensure_base_name(name)?;

    let configs = create_configs(name, overrides);
    let [runtime, declaration] = config_files(folder, name, &configs)?;

    debug!(folder = %folder.display(), name, "writing compiler configs");
    tokio::try_join!(runtime.write(formatter), declaration.write(formatter))?;

    Ok(configs)
}

/// Write several configs into `folder` concurrently.
///
/// All names are checked before anything is written. The first failure
/// cancels the writes still in flight.
pub async fn write_configs(
    folder: &Path,
    configs: IndexMap<String, TsConfigOverrides>,
    formatter: &Formatter,
) -> Result<IndexMap<String, DerivedConfigs>> {
    for name in configs.keys() {
        ensure_base_name(name)?;
    }

    let written = try_join_all(configs.into_iter().map(|(name, overrides)| async move {
        let derived = write_config(folder, &name, overrides, formatter).await?;
        Ok::<_, Error>((name, derived))
    }))
    .await?;

    Ok(written.into_iter().collect())
}
