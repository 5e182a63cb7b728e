//! Repository layer for save data.
//!
//! Repositories handle data that CHANGES during play: the placement list of
//! a bag, stored under a named slot. Static content (item definitions) is
//! handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod save_file;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use save_file::SaveFile;
pub use traits::{SaveRepository, validate_slot};
