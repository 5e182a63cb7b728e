//! Bag configuration loader.

use std::path::Path;

use bag_core::BagConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for bag configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BagConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BagConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BagConfig> {
        let config: BagConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.grid_width == 0 || config.grid_height == 0 {
            anyhow::bail!(
                "Grid size must be positive, got {}x{}",
                config.grid_width,
                config.grid_height
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("grid_width = 6\n").unwrap();
        assert_eq!(config.grid_width, 6);
        assert_eq!(config.grid_height, BagConfig::DEFAULT_GRID_HEIGHT);
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = ConfigLoader::parse("grid_width = 0\ngrid_height = 4\n").unwrap_err();
        assert!(err.to_string().contains("0x4"));
    }
}
