//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Directories and save slot used by the `bag` binary.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `bag.toml` and `items.ron`.
    pub data_dir: PathBuf,
    /// Directory holding `{slot}.json` saves.
    pub save_dir: PathBuf,
    pub slot: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/bag/content/data"),
            save_dir: default_save_dir(),
            slot: "autosave".to_string(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BAG_DATA_DIR` - Content directory (default: `crates/bag/content/data`)
    /// - `BAG_SAVE_DIR` - Save directory (default: platform data dir + `saves`)
    /// - `BAG_SAVE_SLOT` - Slot to load and write (default: `autosave`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("BAG_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("BAG_SAVE_DIR") {
            config.save_dir = dir;
        }
        if let Some(slot) = read_env::<String>("BAG_SAVE_SLOT").filter(|s| !s.is_empty()) {
            config.slot = slot;
        }

        config
    }
}

/// Platform data directory for saves.
///
/// - Linux: `~/.local/share/bag/saves`
/// - macOS: `~/Library/Application Support/bag/saves`
/// - Fallback: `./save_data`
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "bag")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
