//! Grid placement engine for shaped, rotatable bag items.
//!
//! `bag-core` owns the canonical placement rules: shape rotation, exclusive
//! cell occupancy, swap detection and tag-based adjacency. All APIs are pure
//! and synchronous; I/O, logging and content files live in `bag-content` and
//! `bag-runtime`. Grid mutation flows through [`grid::PlacementEngine`], and
//! [`inventory::Inventory`] is the session that owns the placed instances.
pub mod adjacency;
pub mod config;
pub mod drag;
pub mod env;
pub mod error;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod persistence;
pub mod shape;

pub use adjacency::{LinkedNeighbors, check_linked_adjacency, linked_slot_positions};
pub use config::BagConfig;
pub use drag::{DragError, DragState, DropOutcome};
pub use env::{ItemLookup, ItemOracle};
pub use error::{BagError, ErrorSeverity};
pub use grid::{GridDimensions, OccupancyGrid, PlacementEngine, PlacementError, Position};
pub use inventory::Inventory;
pub use item::{
    BonusTally, DefinitionError, EffectKind, InstanceId, ItemDefinition, ItemEffect, ItemId,
    ItemInstance,
};
pub use persistence::{LoadReport, SaveEntry, SkipReason, SkippedEntry, deserialize, serialize};
pub use shape::{Rotation, ShapeError, ShapeMask};
