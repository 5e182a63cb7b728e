//! Inventory session: the arena that owns item instances and their grid.
//!
//! One [`Inventory`] is one logical bag. It is constructed once and passed by
//! reference to whoever needs it; nothing here is global. The grid indexes
//! instances by id while the inventory owns them, so an item can be held
//! (off-grid) without being destroyed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adjacency::{LinkedNeighbors, check_linked_adjacency};
use crate::config::BagConfig;
use crate::env::ItemLookup;
use crate::grid::{GridDimensions, PlacementEngine, PlacementError, Position};
use crate::item::{BonusTally, InstanceId, ItemDefinition, ItemInstance};
use crate::persistence::{SaveEntry, serialize};
use crate::shape::Rotation;

#[derive(Clone, Debug)]
pub struct Inventory {
    engine: PlacementEngine,
    items: BTreeMap<InstanceId, ItemInstance>,
    next_id: u32,
}

impl Inventory {
    pub fn new(config: &BagConfig) -> Self {
        Self::with_dimensions(config.dimensions())
    }

    pub fn with_dimensions(dimensions: GridDimensions) -> Self {
        Self {
            engine: PlacementEngine::new(dimensions),
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.engine.dimensions()
    }

    // ------------------------------------------------------------------
    // Instance lifecycle
    // ------------------------------------------------------------------

    /// Creates a held (off-grid) instance of `definition`.
    pub fn spawn(&mut self, definition: Arc<ItemDefinition>) -> InstanceId {
        self.spawn_rotated(definition, Rotation::Deg0)
    }

    pub fn spawn_rotated(
        &mut self,
        definition: Arc<ItemDefinition>,
        rotation: Rotation,
    ) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.items
            .insert(id, ItemInstance::new(id, definition).with_rotation(rotation));
        id
    }

    /// Removes the instance from the grid and destroys it.
    pub fn discard(&mut self, id: InstanceId) -> Option<ItemInstance> {
        self.engine.remove_item(id);
        self.items.remove(&id)
    }

    pub fn instance(&self, id: InstanceId) -> Option<&ItemInstance> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.items.contains_key(&id)
    }

    /// True while any grid cell references `id`.
    pub fn is_placed(&self, id: InstanceId) -> bool {
        self.engine.grid().contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All instances in spawn order.
    pub fn items(&self) -> impl Iterator<Item = &ItemInstance> + '_ {
        self.items.values()
    }

    pub fn placed_items(&self) -> impl Iterator<Item = &ItemInstance> + '_ {
        self.items.values().filter(|item| self.is_placed(item.id()))
    }

    pub fn held_items(&self) -> impl Iterator<Item = &ItemInstance> + '_ {
        self.items.values().filter(|item| !self.is_placed(item.id()))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn can_place(&self, id: InstanceId, position: Position) -> bool {
        self.items
            .get(&id)
            .is_some_and(|item| self.engine.can_place(item, position))
    }

    pub fn item_at(&self, position: Position) -> Option<&ItemInstance> {
        self.engine
            .item_at(position)
            .and_then(|id| self.items.get(&id))
    }

    pub fn overlap_item(&self, x: i32, y: i32, width: i32, height: i32) -> Option<&ItemInstance> {
        self.engine
            .overlap_item(x, y, width, height)
            .and_then(|id| self.items.get(&id))
    }

    /// Whether a 90° rotation of a placed item would fit where it stands.
    pub fn check_rotate_validity(&mut self, id: InstanceId) -> bool {
        match self.items.get(&id) {
            Some(item) => self.engine.check_rotate_validity(item),
            None => false,
        }
    }

    pub fn linked_neighbors(&self, id: InstanceId) -> Option<LinkedNeighbors> {
        let item = self.items.get(&id)?;
        if !self.is_placed(id) {
            return Some(LinkedNeighbors::new());
        }
        Some(check_linked_adjacency(&self.engine, &self.items, item))
    }

    /// Effects of `id` applied once per linked neighbor.
    pub fn link_bonuses(&self, id: InstanceId) -> Option<BonusTally> {
        let links = self.linked_neighbors(id)?.len();
        let mut tally = BonusTally::default();
        for effect in &self.items.get(&id)?.definition().effects {
            effect.apply(&mut tally, links);
        }
        Some(tally)
    }

    /// Sum of [`Inventory::link_bonuses`] over every placed item.
    pub fn total_link_bonuses(&self) -> BonusTally {
        let mut total = BonusTally::default();
        for item in self.placed_items() {
            if let Some(tally) = self.link_bonuses(item.id()) {
                total.merge(&tally);
            }
        }
        total
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Places a held instance. See [`PlacementEngine::place_item`].
    pub fn place(&mut self, id: InstanceId, position: Position) -> Result<(), PlacementError> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(PlacementError::UnknownInstance(id))?;
        self.engine.place_item(item, position)
    }

    /// Check-then-place convenience for input handlers.
    pub fn try_place(&mut self, id: InstanceId, position: Position) -> bool {
        self.can_place(id, position) && self.place(id, position).is_ok()
    }

    /// Lifts an instance off the grid. It stays in the inventory as held.
    pub fn remove(&mut self, id: InstanceId) -> usize {
        self.engine.remove_item(id)
    }

    /// Advances the rotation of a held instance by 90°.
    ///
    /// The grid is not touched; rotating a placed item this way leaves its
    /// cells stale until it is removed and placed again.
    pub fn rotate(&mut self, id: InstanceId) -> Result<Rotation, PlacementError> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(PlacementError::UnknownInstance(id))?;
        Ok(item.rotate())
    }

    /// Rotates a placed item by 90° around its top-left corner if the new
    /// footprint fits. Returns `Ok(false)` and changes nothing otherwise.
    pub fn rotate_in_place(&mut self, id: InstanceId) -> Result<bool, PlacementError> {
        if !self.contains(id) {
            return Err(PlacementError::UnknownInstance(id));
        }
        if !self.is_placed(id) {
            return Err(PlacementError::NotPlaced(id));
        }
        if !self.check_rotate_validity(id) {
            return Ok(false);
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or(PlacementError::UnknownInstance(id))?;
        let position = item.position();
        self.engine.remove_item(id);
        item.rotate();
        self.engine.place_item(item, position)?;
        Ok(true)
    }

    /// Empties the grid; every instance becomes held.
    pub fn clear_grid(&mut self) {
        self.engine.clear_grid();
    }

    /// Logical save entries for every placed item, in spawn order.
    pub fn save_entries(&self) -> Vec<SaveEntry> {
        serialize(self.placed_items())
    }
}

impl ItemLookup for Inventory {
    fn instance(&self, id: InstanceId) -> Option<&ItemInstance> {
        self.items.get(&id)
    }
}
