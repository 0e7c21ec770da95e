//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. `PowerError`, `SquaddieError`, `CommitError`)
//! are defined in their respective modules alongside the operations they
//! validate. This module provides the shared classification layer.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input or configuration that should be rejected
///   without retry (a power with no effect, equipping an unknown power).
/// - **Internal**: Caller misuse of the engine's own protocol (committing a
///   result twice). These indicate bugs in the caller and should be
///   investigated.
/// - **Fatal**: The engine cannot proceed (a forecast or commit referencing
///   a squaddie or power that no longer exists in the repositories).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - the caller broke the engine's usage protocol.
    Internal,

    /// Fatal error - required data is missing, the action cannot proceed.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
