//! Error types for person-probe-core
//!
//! Errors fall into three groups:
//!
//! - **Check failures**: a member is missing or misbehaves (exit code 1).
//!   Checks turn these into a failed [`CheckOutcome`](crate::CheckOutcome).
//! - **Setup errors**: resolution, construction, numeric conversion (exit code 2).
//! - **Configuration errors**: loading and validating config (exit code 3).

use thiserror::Error;

use crate::numeric::NumericKind;

/// Core error type for probe operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No candidate name and no module scan produced the target type
    #[error("Missing dependency: type '{type_name}' could not be resolved (tried: {tried})")]
    MissingDependency {
        /// Simple name of the type that was looked for
        type_name: String,
        /// Every candidate tried, in order
        tried: String,
    },

    /// The resolved type could not be instantiated
    #[error("Construction error: cannot instantiate '{type_name}': {reason}")]
    Construction {
        /// Fully-qualified name of the type
        type_name: String,
        /// Why construction failed
        reason: String,
    },

    /// A value or target type outside the supported numeric kinds
    #[error("Unsupported numeric type: {0}")]
    UnsupportedNumericKind(String),

    /// An integer literal does not fit the requested numeric kind
    #[error("Numeric overflow: {value} does not fit in {kind}")]
    NumericOverflow {
        /// The literal being converted
        value: String,
        /// The requested kind
        kind: NumericKind,
    },

    /// A module refused to enumerate its types
    #[error("Module '{module}' failed to enumerate its types: {reason}")]
    ModuleEnumeration {
        /// Module name
        module: String,
        /// Reported cause
        reason: String,
    },

    /// Property or method is not declared by the type
    #[error("Member not found: {type_name}.{member}")]
    MemberNotFound {
        /// Fully-qualified name of the type
        type_name: String,
        /// Member name
        member: String,
    },

    /// A member exists but cannot take the given arguments
    #[error("Argument mismatch for {member}: {reason}")]
    ArgumentMismatch {
        /// Member name
        member: String,
        /// What did not match
        reason: String,
    },

    /// Property exists but has no setter
    #[error("Property not settable: {0}")]
    PropertyNotSettable(String),

    /// A behavioral assertion did not hold
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading configuration failed
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration is not valid TOML
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a construction error for the named type.
    pub fn construction(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a member-not-found error.
    pub fn member_not_found(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MemberNotFound {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Create an argument mismatch error.
    pub fn argument_mismatch(member: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// Create a failed-assertion error.
    pub fn check_failed(msg: impl Into<String>) -> Self {
        Self::CheckFailed(msg.into())
    }

    /// True when the error fails a single check instead of aborting the run.
    #[must_use]
    pub const fn is_check_failure(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound { .. }
                | Self::ArgumentMismatch { .. }
                | Self::PropertyNotSettable(_)
                | Self::CheckFailed(_)
        )
    }

    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MemberNotFound { .. }
            | Self::ArgumentMismatch { .. }
            | Self::PropertyNotSettable(_)
            | Self::CheckFailed(_) => 1,
            Self::MissingDependency { .. }
            | Self::Construction { .. }
            | Self::UnsupportedNumericKind(_)
            | Self::NumericOverflow { .. }
            | Self::ModuleEnumeration { .. } => 2,
            Self::InvalidConfig(_) | Self::Io(_) | Self::Parse(_) => 3,
        }
    }
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, Error>;
