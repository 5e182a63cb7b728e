//! Logical save format: an ordered list of `(definition id, x, y, rotation)`.
//!
//! Byte framing is left to the caller. Loading never aborts on a single bad
//! entry; the entry is skipped and reported in [`LoadReport`].

use crate::env::ItemOracle;
use crate::grid::{PlacementError, Position};
use crate::inventory::Inventory;
use crate::item::{InstanceId, ItemId, ItemInstance};
use crate::shape::Rotation;

/// One placed item in a save.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveEntry {
    pub item_definition_id: ItemId,
    pub x: i32,
    pub y: i32,
    /// Degrees, one of 0, 90, 180, 270.
    pub rotation: u16,
}

impl SaveEntry {
    pub fn new(item_definition_id: impl Into<ItemId>, x: i32, y: i32, rotation: Rotation) -> Self {
        Self {
            item_definition_id: item_definition_id.into(),
            x,
            y,
            rotation: rotation.degrees(),
        }
    }

    pub fn from_instance(item: &ItemInstance) -> Self {
        let position = item.position();
        Self::new(
            item.definition().id.clone(),
            position.x,
            position.y,
            item.rotation(),
        )
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Why a save entry was not restored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("unknown item definition")]
    UnknownDefinition,

    #[error("invalid rotation {0}")]
    InvalidRotation(u16),

    #[error("placement rejected: {0}")]
    Rejected(PlacementError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Index into the input slice.
    pub index: usize,
    pub entry: SaveEntry,
    pub reason: SkipReason,
}

/// Result of [`deserialize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Instances created and placed, in entry order.
    pub loaded: Vec<InstanceId>,
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub fn serialize<'a>(items: impl IntoIterator<Item = &'a ItemInstance>) -> Vec<SaveEntry> {
    items.into_iter().map(SaveEntry::from_instance).collect()
}

/// Spawns and places one instance per resolvable entry.
///
/// Entries whose definition is unknown, whose rotation is not a quarter turn,
/// or whose footprint collides with earlier entries are skipped. A skipped
/// entry leaves no instance behind.
pub fn deserialize<O>(entries: &[SaveEntry], oracle: &O, inventory: &mut Inventory) -> LoadReport
where
    O: ItemOracle + ?Sized,
{
    let mut report = LoadReport::default();

    for (index, entry) in entries.iter().enumerate() {
        let skip = |reason| SkippedEntry {
            index,
            entry: entry.clone(),
            reason,
        };

        let Some(definition) = oracle.definition(&entry.item_definition_id) else {
            report.skipped.push(skip(SkipReason::UnknownDefinition));
            continue;
        };
        let Ok(rotation) = Rotation::try_from(entry.rotation) else {
            report
                .skipped
                .push(skip(SkipReason::InvalidRotation(entry.rotation)));
            continue;
        };

        let id = inventory.spawn_rotated(definition, rotation);
        match inventory.place(id, entry.position()) {
            Ok(()) => report.loaded.push(id),
            Err(err) => {
                inventory.discard(id);
                report.skipped.push(skip(SkipReason::Rejected(err)));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;
    use crate::grid::GridDimensions;
    use crate::item::ItemDefinition;
    use crate::shape::ShapeMask;

    fn oracle() -> BTreeMap<ItemId, Arc<ItemDefinition>> {
        [
            ("dagger", &["#", "#"][..]),
            ("buckler", &["##", "##"][..]),
            ("hook", &["#.", "##"][..]),
        ]
        .into_iter()
        .map(|(id, rows)| {
            let shape = ShapeMask::from_rows(rows).unwrap();
            (ItemId::new(id), Arc::new(ItemDefinition::new(id, id, shape)))
        })
        .collect()
    }

    fn bag() -> Inventory {
        Inventory::with_dimensions(GridDimensions::new(6, 5))
    }

    #[test]
    fn round_trip_reproduces_entries() {
        let entries = vec![
            SaveEntry::new("dagger", 0, 0, Rotation::Deg90),
            SaveEntry::new("buckler", 3, 2, Rotation::Deg0),
            SaveEntry::new("hook", 0, 2, Rotation::Deg270),
        ];

        let mut inventory = bag();
        let report = deserialize(&entries, &oracle(), &mut inventory);
        assert!(report.is_clean());
        assert_eq!(report.loaded.len(), 3);

        assert_eq!(inventory.save_entries(), entries);
    }

    #[test]
    fn unknown_definition_is_skipped_not_fatal() {
        let entries = vec![
            SaveEntry::new("dagger", 0, 0, Rotation::Deg0),
            SaveEntry::new("cursed_idol", 2, 0, Rotation::Deg0),
            SaveEntry::new("buckler", 2, 0, Rotation::Deg0),
        ];

        let mut inventory = bag();
        let report = deserialize(&entries, &oracle(), &mut inventory);

        assert_eq!(report.loaded.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert_eq!(report.skipped[0].reason, SkipReason::UnknownDefinition);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn invalid_rotation_and_collisions_leave_no_instance() {
        let mut odd = SaveEntry::new("dagger", 5, 0, Rotation::Deg0);
        odd.rotation = 45;
        let entries = vec![
            SaveEntry::new("buckler", 0, 0, Rotation::Deg0),
            SaveEntry::new("dagger", 1, 1, Rotation::Deg0),
            odd,
        ];

        let mut inventory = bag();
        let report = deserialize(&entries, &oracle(), &mut inventory);

        assert_eq!(report.loaded.len(), 1);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Rejected(PlacementError::Occupied { .. })
        ));
        assert_eq!(report.skipped[1].reason, SkipReason::InvalidRotation(45));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.engine().grid().occupied_count(), 4);
    }
}
