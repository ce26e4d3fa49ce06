//! Common error infrastructure for map-core.
//!
//! Rendering itself is infallible: missing icons, absent cells and absent
//! blockers simply draw nothing. The only failures are precondition
//! violations from callers handing in positions on levels that do not exist.
//! Those are classified [`ErrorSeverity::Fatal`] and returned to the caller.

use crate::env::OracleError;
use crate::state::SectorPosition;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// A caller contract was broken; no recovery is attempted.
    ///
    /// Examples: viewport requested for a level that was never generated.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all map-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait MapError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for log filtering and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while computing a viewport or a text dump.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("cannot build map view for {position}: {source}")]
    Oracle {
        position: SectorPosition,
        #[source]
        source: OracleError,
    },
}

impl ViewportError {
    pub(crate) fn oracle(position: SectorPosition, source: OracleError) -> Self {
        Self::Oracle { position, source }
    }
}

impl MapError for ViewportError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ViewportError::Oracle { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ViewportError::Oracle { source, .. } => source.error_code(),
        }
    }
}
