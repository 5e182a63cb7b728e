//! Occupancy grid and the placement rules that mutate it.
//!
//! [`OccupancyGrid`] is the single source of truth for "what occupies cell
//! (x, y)". It stores instance ids, never instances: the owning
//! [`crate::inventory::Inventory`] resolves ids back to items.
//! [`PlacementEngine`] is the only type that writes to the grid.

mod coords;
mod error;
mod occupancy;
mod placement;

pub use coords::{GridDimensions, Position};
pub use error::PlacementError;
pub use occupancy::OccupancyGrid;
pub use placement::PlacementEngine;
