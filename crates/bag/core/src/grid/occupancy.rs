use crate::item::InstanceId;

use super::{GridDimensions, Position};

/// `width x height` array of optional item references.
///
/// A cell holds the id of the instance occupying it; several cells may hold
/// the same id. The grid indexes instances, it never owns them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    dimensions: GridDimensions,
    cells: Vec<Option<InstanceId>>,
}

impl OccupancyGrid {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.area()],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Occupant of `position`, or `None` for empty or out-of-range cells.
    #[inline]
    pub fn get(&self, position: Position) -> Option<InstanceId> {
        self.dimensions
            .index(position)
            .and_then(|index| self.cells[index])
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Writes a cell. Out-of-range positions are ignored and reported as `false`.
    pub(crate) fn set(&mut self, position: Position, occupant: Option<InstanceId>) -> bool {
        match self.dimensions.index(position) {
            Some(index) => {
                self.cells[index] = occupant;
                true
            }
            None => false,
        }
    }

    /// Clears every cell referencing `id`, returning how many were cleared.
    pub(crate) fn clear_occupant(&mut self, id: InstanceId) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == Some(id)) {
            *cell = None;
            cleared += 1;
        }
        cleared
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Every cell currently referencing `id`, in row-major order.
    pub fn cells_of(&self, id: InstanceId) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(id))
            .map(|(index, _)| self.dimensions.position(index))
            .collect()
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.cells.contains(&Some(id))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates `(position, occupant)` for every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<InstanceId>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.dimensions.position(index), *cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_cells_read_as_empty_and_ignore_writes() {
        let mut grid = OccupancyGrid::new(GridDimensions::new(3, 2));
        assert!(!grid.set(Position::new(3, 0), Some(InstanceId(1))));
        assert!(!grid.set(Position::new(-1, 0), Some(InstanceId(1))));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn clear_occupant_removes_every_reference() {
        let mut grid = OccupancyGrid::new(GridDimensions::new(3, 3));
        grid.set(Position::new(0, 0), Some(InstanceId(1)));
        grid.set(Position::new(2, 2), Some(InstanceId(1)));
        grid.set(Position::new(1, 1), Some(InstanceId(2)));

        assert_eq!(
            grid.cells_of(InstanceId(1)),
            vec![Position::new(0, 0), Position::new(2, 2)]
        );
        assert_eq!(grid.clear_occupant(InstanceId(1)), 2);
        assert!(!grid.contains(InstanceId(1)));
        assert_eq!(grid.get(Position::new(1, 1)), Some(InstanceId(2)));
    }
}
