//! Public API surface for runtime consumers.
mod errors;

pub use errors::{RepositoryError, Result, RuntimeError};
