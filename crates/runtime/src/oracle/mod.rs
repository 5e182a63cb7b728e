//! Runtime wrappers around static bag content.
//!
//! The data is immutable at runtime; placed items and their positions live in
//! the session's inventory.
mod items;

pub use items::ItemOracleImpl;
