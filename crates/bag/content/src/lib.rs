//! Data-driven bag content.
//!
//! Loads item catalogs (RON) and bag configuration (TOML) from a data
//! directory:
//! - Item definitions with shape rows, tags, linked slots and link effects
//! - Grid configuration
//!
//! Effect kinds and shapes are resolved here, once, so the engine only ever
//! sees validated `bag_core::ItemDefinition`s.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectSpec, ItemCatalog, ItemLoader, ItemSpec, LoadResult,
};
