//! Tag-based adjacency between linked slots and neighboring items.
//!
//! A definition declares linked-slot offsets against its base shape. For a
//! placed item each offset is rotated with the same quarter-turn mapping as
//! the shape mask, translated by the item's position, and looked up on the
//! grid. Occupants sharing at least one tag with the item are reported.

use std::collections::BTreeMap;

use crate::env::ItemLookup;
use crate::grid::{PlacementEngine, Position};
use crate::item::{InstanceId, ItemInstance};

/// Absolute cell -> neighbor occupying it.
pub type LinkedNeighbors = BTreeMap<Position, InstanceId>;

/// Absolute grid coordinates of `item`'s linked slots for its current
/// position and rotation. Coordinates may fall outside the grid.
pub fn linked_slot_positions(item: &ItemInstance) -> Vec<Position> {
    let definition = item.definition();
    let rotation = item.rotation();
    let origin = item.position();
    definition
        .linked_slots
        .iter()
        .map(|slot| {
            let (dx, dy) =
                rotation.rotate_point(slot.x, slot.y, definition.width(), definition.height());
            origin.offset(dx, dy)
        })
        .collect()
}

/// Neighbors in `item`'s linked slots whose tags intersect `item`'s tags.
///
/// Slots outside the grid, empty slots, slots occupied by `item` itself and
/// occupants unknown to `items` are skipped. Read-only.
pub fn check_linked_adjacency<L>(
    engine: &PlacementEngine,
    items: &L,
    item: &ItemInstance,
) -> LinkedNeighbors
where
    L: ItemLookup + ?Sized,
{
    let mut neighbors = LinkedNeighbors::new();
    let dimensions = engine.dimensions();

    for slot in linked_slot_positions(item) {
        if !dimensions.contains(slot) {
            continue;
        }
        let Some(occupant_id) = engine.item_at(slot) else {
            continue;
        };
        if occupant_id == item.id() {
            continue;
        }
        let Some(occupant) = items.instance(occupant_id) else {
            continue;
        };
        if item.shares_tag(occupant) {
            neighbors.insert(slot, occupant_id);
        }
    }

    neighbors
}
