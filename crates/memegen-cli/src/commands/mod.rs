pub mod config;
pub mod fit;
pub mod render;
pub mod speak;
pub mod voices;

use std::path::Path;

use anyhow::{Context, Result};
use memegen_core::config::MemeConfig;

/// Load `path` if given, otherwise the built-in defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<MemeConfig> {
    match path {
        Some(path) => MemeConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(MemeConfig::default()),
    }
}
