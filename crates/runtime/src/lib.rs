//! Runtime layer for bag inventory sessions.
//!
//! Wraps the pure `bag-core` engine with the pieces a game needs around it:
//! content-backed oracles, save repositories and structured logging.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`BagSession`], one player's inventory plus drag state
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod oracle;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use oracle::ItemOracleImpl;
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveFile, SaveRepository,
};
pub use session::BagSession;
