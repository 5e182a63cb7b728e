//! File-based repository implementations.

mod save;

pub use save::FileSaveRepository;
