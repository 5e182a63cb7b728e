//! Repository contract for saving and loading bag placements.

use crate::repository::{RepositoryError, Result, SaveFile};

/// Repository for save files indexed by slot name.
///
/// Slot names are restricted to ASCII letters, digits, `-` and `_` so they
/// map directly onto file names.
pub trait SaveRepository: Send + Sync {
    /// Save a bag under `slot`, replacing any previous save.
    fn save(&self, slot: &str, save: &SaveFile) -> Result<()>;

    /// Load the save stored under `slot`.
    fn load(&self, slot: &str) -> Result<Option<SaveFile>>;

    /// Check if a slot holds a save
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slots, sorted by name
    fn list_slots(&self) -> Result<Vec<String>>;
}

pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_string()))
    }
}
