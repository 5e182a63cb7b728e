//! One player's bag: the inventory, its content oracle and the drag state.
//!
//! [`BagSession`] is the single entry point a game loop talks to. Every
//! mutation is logged; rejected drops and skipped save entries are logged at
//! `warn` since they are the diagnostics players report.

use std::sync::Arc;

use bag_core::{
    BagConfig, BonusTally, DragState, DropOutcome, GridDimensions, InstanceId, Inventory,
    ItemId, ItemInstance, ItemOracle, LinkedNeighbors, LoadReport, PlacementError, Position,
    Rotation, deserialize,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::oracle::ItemOracleImpl;
use crate::repository::{SaveFile, SaveRepository};

pub struct BagSession {
    inventory: Inventory,
    oracle: Arc<ItemOracleImpl>,
    drag: DragState,
}

impl BagSession {
    pub fn new(config: &BagConfig, oracle: Arc<ItemOracleImpl>) -> Self {
        Self {
            inventory: Inventory::new(config),
            oracle,
            drag: DragState::Idle,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn oracle(&self) -> &Arc<ItemOracleImpl> {
        &self.oracle
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.inventory.dimensions()
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Creates a held instance of a catalog item.
    pub fn spawn(&mut self, item: &ItemId) -> Result<InstanceId> {
        let definition = self
            .oracle
            .definition(item)
            .ok_or_else(|| RuntimeError::UnknownDefinition(item.clone()))?;
        let id = self.inventory.spawn(definition);
        debug!(instance = %id, item = %item, "spawned item");
        Ok(id)
    }

    pub fn place(&mut self, id: InstanceId, position: Position) -> Result<()> {
        self.ensure_idle()?;
        self.inventory.place(id, position)?;
        debug!(instance = %id, %position, "placed item");
        Ok(())
    }

    /// Rotates a placed item where it stands. `Ok(false)` when it would not fit.
    pub fn rotate_in_place(&mut self, id: InstanceId) -> Result<bool> {
        self.ensure_idle()?;
        let rotated = self.inventory.rotate_in_place(id)?;
        if rotated {
            let rotation = self.instance(id)?.rotation();
            debug!(instance = %id, %rotation, "rotated item in place");
        } else {
            debug!(instance = %id, "rotation blocked");
        }
        Ok(rotated)
    }

    /// Removes the item from the grid and destroys it.
    pub fn discard(&mut self, id: InstanceId) -> Result<ItemInstance> {
        self.ensure_idle()?;
        let item = self
            .inventory
            .discard(id)
            .ok_or(PlacementError::UnknownInstance(id))?;
        debug!(instance = %id, item = %item.definition().id, "discarded item");
        Ok(item)
    }

    pub fn instance(&self, id: InstanceId) -> Result<&ItemInstance> {
        Ok(self
            .inventory
            .instance(id)
            .ok_or(PlacementError::UnknownInstance(id))?)
    }

    /// Linked neighbors of `id`, keyed by the slot cell they occupy.
    pub fn adjacency(&self, id: InstanceId) -> Result<LinkedNeighbors> {
        Ok(self
            .inventory
            .linked_neighbors(id)
            .ok_or(PlacementError::UnknownInstance(id))?)
    }

    pub fn link_bonuses(&self, id: InstanceId) -> Result<BonusTally> {
        Ok(self
            .inventory
            .link_bonuses(id)
            .ok_or(PlacementError::UnknownInstance(id))?)
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    pub fn begin_drag(&mut self, id: InstanceId) -> Result<()> {
        self.drag.begin(&mut self.inventory, id)?;
        debug!(instance = %id, "drag started");
        Ok(())
    }

    pub fn rotate_held(&mut self) -> Result<Rotation> {
        let rotation = self.drag.rotate_held(&mut self.inventory)?;
        debug!(%rotation, "rotated held item");
        Ok(rotation)
    }

    pub fn drop_at(&mut self, target: Position) -> Result<DropOutcome> {
        let outcome = self.drag.drop_at(&mut self.inventory, target)?;
        match outcome {
            DropOutcome::Placed { instance, position } => {
                debug!(instance = %instance, %position, "dropped item");
            }
            DropOutcome::Swapped {
                instance,
                displaced,
                ..
            } => {
                debug!(instance = %instance, displaced = %displaced, %target, "swapped items");
            }
            DropOutcome::Reverted { instance } => {
                warn!(instance = %instance, %target, "drop rejected, item returned");
            }
        }
        Ok(outcome)
    }

    pub fn cancel_drag(&mut self) -> Result<DropOutcome> {
        let outcome = self.drag.cancel(&mut self.inventory)?;
        debug!(?outcome, "drag cancelled");
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Save document for the placed items. Held items are not saved.
    pub fn snapshot(&self) -> SaveFile {
        SaveFile::new(self.dimensions(), self.inventory.save_entries())
    }

    pub fn save<R>(&self, repo: &R, slot: &str) -> Result<()>
    where
        R: SaveRepository + ?Sized,
    {
        self.ensure_idle()?;
        let snapshot = self.snapshot();
        repo.save(slot, &snapshot)?;
        info!(slot, items = snapshot.entries.len(), "saved bag");
        Ok(())
    }

    /// Replaces the inventory with the contents of `slot`.
    ///
    /// Any failure before the new inventory is built (missing slot, I/O,
    /// checksum, grid size) leaves the current inventory as it was. Entries
    /// that cannot be restored are skipped and listed in the report.
    pub fn load<R>(&mut self, repo: &R, slot: &str) -> Result<LoadReport>
    where
        R: SaveRepository + ?Sized,
    {
        self.ensure_idle()?;
        let save = repo
            .load(slot)?
            .ok_or_else(|| RuntimeError::SaveNotFound(slot.to_string()))?;
        let report = self.restore(&save)?;
        info!(
            slot,
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            "loaded bag"
        );
        Ok(report)
    }

    /// Replaces the inventory with the placements in `save`.
    pub fn restore(&mut self, save: &SaveFile) -> Result<LoadReport> {
        self.ensure_idle()?;
        save.verify()?;
        let current = self.dimensions();
        if save.grid != current {
            return Err(RuntimeError::GridMismatch {
                saved: save.grid,
                current,
            });
        }

        let mut restored = Inventory::with_dimensions(current);
        let report = deserialize(&save.entries, self.oracle.as_ref(), &mut restored);
        for skipped in &report.skipped {
            warn!(
                index = skipped.index,
                item = %skipped.entry.item_definition_id,
                reason = %skipped.reason,
                "skipped save entry"
            );
        }

        self.inventory = restored;
        Ok(report)
    }

    /// Grid commands wait for the drag to end so its origin stays free.
    fn ensure_idle(&self) -> Result<()> {
        match self.drag.held() {
            Some(held) => Err(RuntimeError::DragInProgress(held)),
            None => Ok(()),
        }
    }
}
