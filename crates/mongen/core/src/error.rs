//! Common error infrastructure for mongen-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (e.g., `AssemblyError`) are defined in
//! their respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each pipeline has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: All types are plain data, safe for replay and testing

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry or with alternative inputs
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating a defect in the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or alternative inputs.
    ///
    /// Examples: re-rolling a demon, re-selecting chimera parts
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: species id with no template behind it
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - a contract was violated, cannot continue.
    ///
    /// Examples: zombified part reaching the assembler, introspecting a
    /// half-built chimera
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait implemented by all mongen-core error types.
///
/// Gives callers a uniform way to decide between retrying a spawn,
/// rejecting input, or treating the failure as a defect.
pub trait GenError: core::fmt::Debug {
    /// Severity classification for this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logs and metrics.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
