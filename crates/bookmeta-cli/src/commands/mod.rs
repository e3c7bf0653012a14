//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use bookmeta_core::ExtractorConfig;

/// Load the extractor config from an explicit path, the default location,
/// or fall back to the built-in taxonomy.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractorConfig> {
    if let Some(path) = config_path {
        return Ok(ExtractorConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(ExtractorConfig::from_file(&default_path)?);
    }

    Ok(ExtractorConfig::default())
}
