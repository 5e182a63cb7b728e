use crate::item::{InstanceId, ItemInstance};

use super::{GridDimensions, OccupancyGrid, PlacementError, Position};

/// Bounds/collision checks and the commands that write the occupancy grid.
///
/// # Discipline
///
/// Queries (`is_out_of_bounds`, `can_place`, `item_at`, `overlap_item`) are
/// total and never fail. [`PlacementEngine::place_item`] re-validates its
/// precondition and refuses with a [`PlacementError`] instead of writing a
/// partial footprint, so a rejected command leaves no trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementEngine {
    grid: OccupancyGrid,
}

impl PlacementEngine {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            grid: OccupancyGrid::new(dimensions),
        }
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// True if the `width x height` box at `(x, y)` leaves the grid.
    ///
    /// Negative sizes are treated as out of bounds.
    pub fn is_out_of_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        let dims = self.dimensions();
        width < 0
            || height < 0
            || x < 0
            || y < 0
            || x as i64 + width as i64 > dims.width as i64
            || y as i64 + height as i64 > dims.height as i64
    }

    /// Validates a placement without writing anything.
    ///
    /// Checks the rotated bounding box first, then every solid cell, and
    /// stops at the first conflict.
    pub fn check_placement(
        &self,
        item: &ItemInstance,
        position: Position,
    ) -> Result<(), PlacementError> {
        let width = item.current_width();
        let height = item.current_height();
        if self.is_out_of_bounds(
            position.x,
            position.y,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        ) {
            return Err(PlacementError::OutOfBounds {
                position,
                width,
                height,
                grid: self.dimensions(),
            });
        }

        for (i, j) in item.effective_shape().solid_cells() {
            let cell = position.offset(i as i32, j as i32);
            if let Some(occupant) = self.grid.get(cell) {
                return Err(PlacementError::Occupied { cell, occupant });
            }
        }

        Ok(())
    }

    /// True if `item`, in its current rotation, fits at `position`.
    pub fn can_place(&self, item: &ItemInstance, position: Position) -> bool {
        self.check_placement(item, position).is_ok()
    }

    /// Writes `item` into every solid cell of its rotated shape at `position`
    /// and records `position` on the item.
    ///
    /// Refuses items that are still on the grid; remove them first.
    pub fn place_item(
        &mut self,
        item: &mut ItemInstance,
        position: Position,
    ) -> Result<(), PlacementError> {
        if self.grid.contains(item.id()) {
            return Err(PlacementError::AlreadyPlaced(item.id()));
        }
        self.check_placement(item, position)?;

        let id = item.id();
        for (i, j) in item.effective_shape().solid_cells() {
            self.grid.set(position.offset(i as i32, j as i32), Some(id));
        }
        item.set_position(position);
        Ok(())
    }

    /// Clears every cell referencing `id` anywhere on the grid.
    ///
    /// Removal goes by identity, not by the item's current shape, so cells
    /// left behind by a rotation that was never re-placed are cleared too.
    pub fn remove_item(&mut self, id: InstanceId) -> usize {
        self.grid.clear_occupant(id)
    }

    /// Reports whether a 90° rotation of `item` would fit at its current
    /// position. The grid is unchanged when this returns.
    ///
    /// The item's cells are lifted, the rotated footprint is tested, and the
    /// exact same cells are written back.
    pub fn check_rotate_validity(&mut self, item: &ItemInstance) -> bool {
        let id = item.id();
        let cells = self.grid.cells_of(id);
        for cell in &cells {
            self.grid.set(*cell, None);
        }

        let mut turned = item.clone();
        turned.rotate();
        let fits = self.can_place(&turned, item.position());

        for cell in cells {
            self.grid.set(cell, Some(id));
        }
        fits
    }

    /// Returns the single item found in the `width x height` region at `(x, y)`.
    ///
    /// `None` when the region is empty, when it touches two or more distinct
    /// items, or when the size is not positive. Cells outside the grid are
    /// ignored.
    pub fn overlap_item(&self, x: i32, y: i32, width: i32, height: i32) -> Option<InstanceId> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let dims = self.dimensions();
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(dims.width as i64);
        let y1 = (y as i64 + height as i64).min(dims.height as i64);

        let mut found = None;
        for cy in y0..y1 {
            for cx in x0..x1 {
                let Some(occupant) = self.grid.get(Position::new(cx as i32, cy as i32)) else {
                    continue;
                };
                match found {
                    None => found = Some(occupant),
                    Some(existing) if existing != occupant => return None,
                    Some(_) => {}
                }
            }
        }
        found
    }

    /// Single item blocking the rotated bounding box of `item` at `position`.
    pub fn footprint_overlap(&self, item: &ItemInstance, position: Position) -> Option<InstanceId> {
        self.overlap_item(
            position.x,
            position.y,
            item.current_width().min(i32::MAX as u32) as i32,
            item.current_height().min(i32::MAX as u32) as i32,
        )
    }

    /// Bounds-checked single-cell lookup.
    pub fn item_at(&self, position: Position) -> Option<InstanceId> {
        self.grid.get(position)
    }

    /// Empties every cell. Items keep their own position and rotation.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
    }
}
