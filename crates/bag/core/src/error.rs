//! Common error infrastructure for bag-core.
//!
//! Domain-specific errors (`ShapeError`, `DefinitionError`, `PlacementError`,
//! `DragError`) live next to the operations that raise them and implement
//! [`BagError`] so callers can classify them uniformly.
//!
//! Rejected placement *queries* are not errors: `can_place`, `item_at` and
//! `overlap_item` answer with `bool`/`Option`. Errors are reserved for commands
//! whose precondition was violated.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed once the bag changes
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the bag layout changes.
    ///
    /// Examples: target cell occupied, rotation blocked
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: out-of-bounds target, unknown instance, bad rotation angle
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: drag state pointing at a discarded instance
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all bag-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BagError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
