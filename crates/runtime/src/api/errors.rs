//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories and the placement engine so clients can
//! bubble them up with consistent context.
use bag_core::{
    BagError, DragError, ErrorSeverity, GridDimensions, InstanceId, ItemId, PlacementError,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Drag(#[from] DragError),

    #[error("item definition {0} is not in the catalog")]
    UnknownDefinition(ItemId),

    #[error("item {0} is being dragged")]
    DragInProgress(InstanceId),

    #[error("save slot {0:?} not found")]
    SaveNotFound(String),

    #[error("save was made for a {saved} grid but this bag is {current}")]
    GridMismatch {
        saved: GridDimensions,
        current: GridDimensions,
    },
}

/// Core errors keep their own classification. Unreadable or missing saves
/// fail only the load that hit them.
impl BagError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Placement(err) => err.severity(),
            RuntimeError::Drag(err) => err.severity(),
            RuntimeError::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Internal,
            RuntimeError::Repository(RepositoryError::InvalidSlot(_)) => {
                ErrorSeverity::Validation
            }
            RuntimeError::Repository(_) | RuntimeError::SaveNotFound(_) => {
                ErrorSeverity::Recoverable
            }
            RuntimeError::UnknownDefinition(_)
            | RuntimeError::DragInProgress(_)
            | RuntimeError::GridMismatch { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Repository(err) => match err {
                RepositoryError::LockPoisoned => "REPOSITORY_LOCK_POISONED",
                RepositoryError::Io(_) => "REPOSITORY_IO",
                RepositoryError::Json(_) => "REPOSITORY_JSON",
                RepositoryError::CorruptedData(_) => "REPOSITORY_CORRUPTED",
                RepositoryError::UnsupportedVersion { .. } => "REPOSITORY_UNSUPPORTED_VERSION",
                RepositoryError::InvalidSlot(_) => "REPOSITORY_INVALID_SLOT",
            },
            RuntimeError::Placement(err) => err.error_code(),
            RuntimeError::Drag(err) => err.error_code(),
            RuntimeError::UnknownDefinition(_) => "RUNTIME_UNKNOWN_DEFINITION",
            RuntimeError::DragInProgress(_) => "RUNTIME_DRAG_IN_PROGRESS",
            RuntimeError::SaveNotFound(_) => "RUNTIME_SAVE_NOT_FOUND",
            RuntimeError::GridMismatch { .. } => "RUNTIME_GRID_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_saves_are_recoverable() {
        let corrupted = RuntimeError::from(RepositoryError::CorruptedData("checksum".into()));
        assert!(corrupted.severity().is_recoverable());
        assert_eq!(corrupted.error_code(), "REPOSITORY_CORRUPTED");

        let missing = RuntimeError::SaveNotFound("main".into());
        assert!(missing.severity().is_recoverable());
        assert_eq!(missing.error_code(), "RUNTIME_SAVE_NOT_FOUND");

        let bad_slot = RuntimeError::from(RepositoryError::InvalidSlot("../x".into()));
        assert_eq!(bad_slot.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn poisoned_lock_is_internal() {
        let err = RuntimeError::from(RepositoryError::LockPoisoned);
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "REPOSITORY_LOCK_POISONED");
    }

    #[test]
    fn core_errors_keep_their_codes() {
        let err = RuntimeError::from(PlacementError::NotPlaced(InstanceId(4)));
        assert_eq!(err.error_code(), "PLACEMENT_NOT_PLACED");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
