//! Item definitions (static content) and item instances (placed or held).
//!
//! This module contains the foundational item types:
//! - [`ItemDefinition`]: immutable content record shared by many instances
//! - [`ItemInstance`]: one placed or held item with its own position/rotation
//! - [`ItemEffect`]: link bonuses resolved once at content-load time

mod definition;
mod effect;
mod instance;

pub use definition::{DefinitionError, ItemDefinition, ItemId};
pub use effect::{BonusTally, EffectKind, ItemEffect};
pub use instance::{InstanceId, ItemInstance};
