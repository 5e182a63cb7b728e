//! Drag-and-drop lifecycle: `Idle -> Dragging -> {Committed | Reverted}`.
//!
//! Only `begin` lifts the item off the grid. Every way out of `Dragging`
//! ends by placing the dragged item exactly once, either at the drop target
//! or back where it came from.

use crate::error::{BagError, ErrorSeverity};
use crate::grid::{PlacementError, Position};
use crate::inventory::Inventory;
use crate::item::InstanceId;
use crate::shape::Rotation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        instance: InstanceId,
        origin: Position,
        origin_rotation: Rotation,
        /// False when the drag started from a held item (e.g. fresh loot);
        /// such an item has no origin cell to return to.
        was_placed: bool,
    },
}

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged item now sits at `position`.
    Placed {
        instance: InstanceId,
        position: Position,
    },
    /// Exactly one item blocked the target and traded places with the
    /// dragged item. `displaced_to` is `None` when the drag began off-grid:
    /// the displaced item is then left held.
    Swapped {
        instance: InstanceId,
        position: Position,
        displaced: InstanceId,
        displaced_to: Option<Position>,
    },
    /// The dragged item went back to its origin with its origin rotation
    /// (or stayed held if it never had one).
    Reverted { instance: InstanceId },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("item {0} is already being dragged")]
    AlreadyDragging(InstanceId),

    #[error("no drag in progress")]
    NotDragging,

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl BagError for DragError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DragError::AlreadyDragging(_) | DragError::NotDragging => ErrorSeverity::Validation,
            DragError::Placement(PlacementError::UnknownInstance(_)) => ErrorSeverity::Internal,
            DragError::Placement(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DragError::AlreadyDragging(_) => "DRAG_ALREADY_DRAGGING",
            DragError::NotDragging => "DRAG_NOT_DRAGGING",
            DragError::Placement(err) => err.error_code(),
        }
    }
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The instance currently held by the drag, if any.
    pub fn held(&self) -> Option<InstanceId> {
        match self {
            DragState::Dragging { instance, .. } => Some(*instance),
            DragState::Idle => None,
        }
    }

    /// `Idle -> Dragging`: lifts `id` off the grid.
    pub fn begin(&mut self, inventory: &mut Inventory, id: InstanceId) -> Result<(), DragError> {
        if let DragState::Dragging { instance, .. } = self {
            return Err(DragError::AlreadyDragging(*instance));
        }
        let item = inventory
            .instance(id)
            .ok_or(PlacementError::UnknownInstance(id))?;
        let origin = item.position();
        let origin_rotation = item.rotation();
        let was_placed = inventory.remove(id) > 0;

        *self = DragState::Dragging {
            instance: id,
            origin,
            origin_rotation,
            was_placed,
        };
        Ok(())
    }

    /// Rotates the held item by 90°. The grid is untouched while dragging.
    pub fn rotate_held(&mut self, inventory: &mut Inventory) -> Result<Rotation, DragError> {
        let id = self.held().ok_or(DragError::NotDragging)?;
        Ok(inventory.rotate(id)?)
    }

    /// Ends the drag at `target`.
    ///
    /// Places the item if it fits. Otherwise, if exactly one item blocks the
    /// target bounding box, tries a swap; anything else reverts.
    pub fn drop_at(
        &mut self,
        inventory: &mut Inventory,
        target: Position,
    ) -> Result<DropOutcome, DragError> {
        let DragState::Dragging {
            instance,
            origin,
            was_placed,
            ..
        } = *self
        else {
            return Err(DragError::NotDragging);
        };

        if inventory.can_place(instance, target) {
            inventory.place(instance, target)?;
            *self = DragState::Idle;
            return Ok(DropOutcome::Placed {
                instance,
                position: target,
            });
        }

        let blocker = inventory
            .instance(instance)
            .and_then(|item| inventory.engine().footprint_overlap(item, target));
        if let Some(displaced) = blocker {
            let swapped = try_swap(inventory, instance, target, displaced, origin, was_placed)?;
            if let Some(outcome) = swapped {
                *self = DragState::Idle;
                return Ok(outcome);
            }
        }

        self.cancel(inventory)
    }

    /// `Dragging -> Reverted`: puts the item back at its origin.
    ///
    /// The drag always ends. If the origin was taken since [`begin`](Self::begin),
    /// the item stays held and the placement error is returned.
    pub fn cancel(&mut self, inventory: &mut Inventory) -> Result<DropOutcome, DragError> {
        let DragState::Dragging {
            instance,
            origin,
            origin_rotation,
            was_placed,
        } = *self
        else {
            return Err(DragError::NotDragging);
        };

        let item_rotation = inventory
            .instance(instance)
            .map(|item| item.rotation())
            .ok_or(PlacementError::UnknownInstance(instance))?;
        // Undo rotations applied while held.
        let mut rotation = item_rotation;
        while rotation != origin_rotation {
            rotation = inventory.rotate(instance)?;
        }

        *self = DragState::Idle;
        if was_placed {
            inventory.place(instance, origin)?;
        }
        Ok(DropOutcome::Reverted { instance })
    }
}

/// Lifts `displaced`, drops `instance` at `target` and sends `displaced` to
/// the dragged item's origin. Returns `None` with the grid restored when any
/// step does not fit.
fn try_swap(
    inventory: &mut Inventory,
    instance: InstanceId,
    target: Position,
    displaced: InstanceId,
    origin: Position,
    was_placed: bool,
) -> Result<Option<DropOutcome>, PlacementError> {
    let displaced_home = inventory
        .instance(displaced)
        .map(|item| item.position())
        .ok_or(PlacementError::UnknownInstance(displaced))?;

    inventory.remove(displaced);
    if !inventory.can_place(instance, target) {
        inventory.place(displaced, displaced_home)?;
        return Ok(None);
    }
    inventory.place(instance, target)?;

    if !was_placed {
        return Ok(Some(DropOutcome::Swapped {
            instance,
            position: target,
            displaced,
            displaced_to: None,
        }));
    }

    if inventory.can_place(displaced, origin) {
        inventory.place(displaced, origin)?;
        return Ok(Some(DropOutcome::Swapped {
            instance,
            position: target,
            displaced,
            displaced_to: Some(origin),
        }));
    }

    inventory.remove(instance);
    inventory.place(displaced, displaced_home)?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::grid::GridDimensions;
    use crate::item::ItemDefinition;
    use crate::shape::ShapeMask;

    fn bag() -> Inventory {
        Inventory::with_dimensions(GridDimensions::new(6, 4))
    }

    fn spawn(bag: &mut Inventory, rows: &[&str]) -> InstanceId {
        let shape = ShapeMask::from_rows(rows).unwrap();
        bag.spawn(Arc::new(ItemDefinition::new("thing", "Thing", shape)))
    }

    #[test]
    fn drop_on_free_cells_commits() {
        let mut bag = bag();
        let id = spawn(&mut bag, &["##"]);
        bag.place(id, Position::new(0, 0)).unwrap();

        let mut drag = DragState::default();
        drag.begin(&mut bag, id).unwrap();
        assert!(!bag.is_placed(id));
        assert_eq!(
            drag.begin(&mut bag, id),
            Err(DragError::AlreadyDragging(id))
        );

        let outcome = drag.drop_at(&mut bag, Position::new(3, 2)).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Placed {
                instance: id,
                position: Position::new(3, 2)
            }
        );
        assert_eq!(drag, DragState::Idle);
        assert_eq!(bag.instance(id).unwrap().position(), Position::new(3, 2));
    }

    #[test]
    fn drop_onto_single_blocker_swaps() {
        let mut bag = bag();
        let sword = spawn(&mut bag, &["#"]);
        let shield = spawn(&mut bag, &["#"]);
        bag.place(sword, Position::new(0, 0)).unwrap();
        bag.place(shield, Position::new(4, 1)).unwrap();

        let mut drag = DragState::default();
        drag.begin(&mut bag, sword).unwrap();
        let outcome = drag.drop_at(&mut bag, Position::new(4, 1)).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Swapped {
                instance: sword,
                position: Position::new(4, 1),
                displaced: shield,
                displaced_to: Some(Position::new(0, 0)),
            }
        );
        assert_eq!(bag.engine().item_at(Position::new(4, 1)), Some(sword));
        assert_eq!(bag.engine().item_at(Position::new(0, 0)), Some(shield));
    }

    #[test]
    fn drop_onto_two_blockers_reverts() {
        let mut bag = bag();
        let plank = spawn(&mut bag, &["##"]);
        let a = spawn(&mut bag, &["#"]);
        let b = spawn(&mut bag, &["#"]);
        bag.place(plank, Position::new(0, 3)).unwrap();
        bag.place(a, Position::new(2, 0)).unwrap();
        bag.place(b, Position::new(3, 0)).unwrap();
        let before = bag.engine().clone();

        let mut drag = DragState::default();
        drag.begin(&mut bag, plank).unwrap();
        // Half turn keeps the plank horizontal over both blockers.
        drag.rotate_held(&mut bag).unwrap();
        drag.rotate_held(&mut bag).unwrap();
        let outcome = drag.drop_at(&mut bag, Position::new(2, 0)).unwrap();

        assert_eq!(outcome, DropOutcome::Reverted { instance: plank });
        assert_eq!(bag.engine(), &before);
        assert_eq!(bag.instance(plank).unwrap().rotation(), Rotation::Deg0);
    }

    #[test]
    fn swap_that_cannot_rehome_the_blocker_reverts() {
        let mut bag = bag();
        let pebble = spawn(&mut bag, &["#"]);
        let crate_ = spawn(&mut bag, &["##", "##"]);
        bag.place(pebble, Position::new(5, 3)).unwrap();
        bag.place(crate_, Position::new(0, 0)).unwrap();
        let before = bag.engine().clone();

        let mut drag = DragState::default();
        drag.begin(&mut bag, pebble).unwrap();
        // The 2x2 crate cannot fit at the pebble's corner origin.
        let outcome = drag.drop_at(&mut bag, Position::new(0, 0)).unwrap();

        assert_eq!(outcome, DropOutcome::Reverted { instance: pebble });
        assert_eq!(bag.engine(), &before);
    }

    #[test]
    fn held_item_swapped_in_leaves_blocker_held() {
        let mut bag = bag();
        let loot = spawn(&mut bag, &["#"]);
        let old = spawn(&mut bag, &["#"]);
        bag.place(old, Position::new(1, 1)).unwrap();

        let mut drag = DragState::default();
        drag.begin(&mut bag, loot).unwrap();
        let outcome = drag.drop_at(&mut bag, Position::new(1, 1)).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Swapped {
                instance: loot,
                position: Position::new(1, 1),
                displaced: old,
                displaced_to: None,
            }
        );
        assert!(!bag.is_placed(old));
        assert!(bag.contains(old));
    }

    #[test]
    fn taken_origin_ends_drag_with_item_held() {
        let mut bag = bag();
        let ring = spawn(&mut bag, &["#"]);
        let coin = spawn(&mut bag, &["#"]);
        bag.place(ring, Position::new(2, 2)).unwrap();

        let mut drag = DragState::default();
        drag.begin(&mut bag, ring).unwrap();
        bag.place(coin, Position::new(2, 2)).unwrap();

        assert!(matches!(
            drag.cancel(&mut bag),
            Err(DragError::Placement(PlacementError::Occupied { .. }))
        ));
        assert_eq!(drag, DragState::Idle);
        assert!(bag.contains(ring));
        assert!(!bag.is_placed(ring));
        drag.begin(&mut bag, ring).unwrap();
    }

    #[test]
    fn cancel_restores_origin_and_rotation() {
        let mut bag = bag();
        let id = spawn(&mut bag, &["###"]);
        bag.place(id, Position::new(1, 2)).unwrap();

        let mut drag = DragState::default();
        assert_eq!(drag.cancel(&mut bag), Err(DragError::NotDragging));
        drag.begin(&mut bag, id).unwrap();
        drag.rotate_held(&mut bag).unwrap();
        drag.rotate_held(&mut bag).unwrap();

        assert_eq!(
            drag.cancel(&mut bag),
            Ok(DropOutcome::Reverted { instance: id })
        );
        let item = bag.instance(id).unwrap();
        assert_eq!(item.rotation(), Rotation::Deg0);
        assert_eq!(
            bag.engine().grid().cells_of(id),
            vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
        );
    }

    #[test]
    fn drag_errors_classify_stale_instances_as_internal() {
        let stale = DragError::Placement(PlacementError::UnknownInstance(InstanceId(9)));
        assert_eq!(stale.severity(), ErrorSeverity::Internal);
        assert_eq!(stale.error_code(), "PLACEMENT_UNKNOWN_INSTANCE");

        assert_eq!(DragError::NotDragging.error_code(), "DRAG_NOT_DRAGGING");
        assert_eq!(
            DragError::AlreadyDragging(InstanceId(1)).severity(),
            ErrorSeverity::Validation
        );
        let blocked = DragError::from(PlacementError::Occupied {
            cell: Position::new(0, 0),
            occupant: InstanceId(2),
        });
        assert!(blocked.severity().is_recoverable());
    }
}
