//! Read-only views the engine consumes from its collaborators.
//!
//! - [`ItemOracle`] resolves content ids to shared definitions (content side)
//! - [`ItemLookup`] resolves instance ids to live instances (session side)

mod items;

pub use items::{ItemLookup, ItemOracle};
