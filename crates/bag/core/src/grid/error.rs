//! Placement errors.
//!
//! Queries never fail; these errors come from commands (`place_item`,
//! rotation in place) whose precondition does not hold. A command that
//! returns an error has not touched the grid or the item.

use crate::error::{BagError, ErrorSeverity};
use crate::item::InstanceId;

use super::{GridDimensions, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    /// The rotated bounding box does not fit inside the grid.
    #[error("{width}x{height} footprint at {position} is out of bounds (grid size: {grid})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
        grid: GridDimensions,
    },

    /// A solid cell of the footprint is already taken.
    #[error("cell {cell} is already occupied by item {occupant}")]
    Occupied { cell: Position, occupant: InstanceId },

    /// The item still references grid cells and must be removed first.
    #[error("item {0} is already on the grid")]
    AlreadyPlaced(InstanceId),

    /// The item is not on the grid.
    #[error("item {0} is not on the grid")]
    NotPlaced(InstanceId),

    /// The inventory has no instance with this id.
    #[error("unknown item instance {0}")]
    UnknownInstance(InstanceId),
}

impl BagError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        use PlacementError::*;
        match self {
            // Another layout may free the cell
            Occupied { .. } => ErrorSeverity::Recoverable,

            OutOfBounds { .. } | AlreadyPlaced(_) | NotPlaced(_) | UnknownInstance(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use PlacementError::*;
        match self {
            OutOfBounds { .. } => "PLACEMENT_OUT_OF_BOUNDS",
            Occupied { .. } => "PLACEMENT_OCCUPIED",
            AlreadyPlaced(_) => "PLACEMENT_ALREADY_PLACED",
            NotPlaced(_) => "PLACEMENT_NOT_PLACED",
            UnknownInstance(_) => "PLACEMENT_UNKNOWN_INSTANCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_is_the_only_recoverable_placement_error() {
        let id = InstanceId(3);
        let occupied = PlacementError::Occupied {
            cell: Position::new(1, 1),
            occupant: id,
        };
        assert_eq!(occupied.severity(), ErrorSeverity::Recoverable);
        assert_eq!(occupied.error_code(), "PLACEMENT_OCCUPIED");

        let out_of_bounds = PlacementError::OutOfBounds {
            position: Position::new(4, 0),
            width: 2,
            height: 1,
            grid: GridDimensions::new(5, 4),
        };
        for err in [
            out_of_bounds,
            PlacementError::AlreadyPlaced(id),
            PlacementError::NotPlaced(id),
            PlacementError::UnknownInstance(id),
        ] {
            assert_eq!(err.severity(), ErrorSeverity::Validation, "{err}");
            assert!(err.error_code().starts_with("PLACEMENT_"));
        }
    }
}
