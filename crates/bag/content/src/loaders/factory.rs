//! Content factory for building bag content from data files.

use std::path::{Path, PathBuf};

use bag_core::{BagConfig, ItemDefinition};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all bag content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── bag.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "bag.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load bag configuration from `bag.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<BagConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(BagConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join(Self::ITEMS_FILE);
        ItemLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
