//! On-disk save document.

use bag_core::{GridDimensions, SaveEntry};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::repository::{RepositoryError, Result};

/// A saved bag: grid size plus the ordered placement list.
///
/// `checksum` is the hex SHA-256 of the version, grid and entries, so a file
/// edited by hand or truncated mid-write is rejected on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub grid: GridDimensions,
    pub entries: Vec<SaveEntry>,
    pub checksum: String,
}

impl SaveFile {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(grid: GridDimensions, entries: Vec<SaveEntry>) -> Self {
        let checksum = compute_checksum(Self::CURRENT_VERSION, grid, &entries);
        Self {
            version: Self::CURRENT_VERSION,
            grid,
            entries,
            checksum,
        }
    }

    /// Checks the version and recomputes the checksum.
    pub fn verify(&self) -> Result<()> {
        if self.version != Self::CURRENT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: self.version,
                expected: Self::CURRENT_VERSION,
            });
        }
        let expected = compute_checksum(self.version, self.grid, &self.entries);
        if expected != self.checksum {
            return Err(RepositoryError::CorruptedData(format!(
                "checksum mismatch: stored {}, computed {}",
                self.checksum, expected
            )));
        }
        Ok(())
    }
}

fn compute_checksum(version: u32, grid: GridDimensions, entries: &[SaveEntry]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_le_bytes());
    hasher.update(grid.width.to_le_bytes());
    hasher.update(grid.height.to_le_bytes());

    // Order matters: entries are restored in sequence.
    for entry in entries {
        let id = entry.item_definition_id.as_str().as_bytes();
        hasher.update((id.len() as u64).to_le_bytes());
        hasher.update(id);
        hasher.update(entry.x.to_le_bytes());
        hasher.update(entry.y.to_le_bytes());
        hasher.update(entry.rotation.to_le_bytes());
    }

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use bag_core::Rotation;

    use super::*;

    fn sample() -> SaveFile {
        SaveFile::new(
            GridDimensions::new(10, 8),
            vec![
                SaveEntry::new("torch", 0, 0, Rotation::Deg0),
                SaveEntry::new("buckler", 4, 2, Rotation::Deg90),
            ],
        )
    }

    #[test]
    fn fresh_save_verifies() {
        let save = sample();
        assert_eq!(save.checksum.len(), 64);
        save.verify().unwrap();
    }

    #[test]
    fn tampered_entry_fails_checksum() {
        let mut save = sample();
        save.entries[1].x = 5;
        assert!(matches!(
            save.verify(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn reordered_entries_change_checksum() {
        let save = sample();
        let mut reversed = save.entries.clone();
        reversed.reverse();
        let other = SaveFile::new(save.grid, reversed);
        assert_ne!(save.checksum, other.checksum);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut save = sample();
        save.version = 2;
        assert!(matches!(
            save.verify(),
            Err(RepositoryError::UnsupportedVersion { found: 2, expected: 1 })
        ));
    }
}
