//! Oracle access errors.

use crate::error::{ErrorSeverity, MapError};
use crate::state::LevelId;

/// Errors that occur when looking up world data through an oracle.
///
/// The renderer assumes it is only ever pointed at generated levels, so a
/// missing level is a fatal contract violation rather than something to retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// No level with this id has been generated.
    #[error("level {0} has not been generated")]
    LevelNotFound(LevelId),
}

impl MapError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            LevelNotFound(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            LevelNotFound(_) => "ORACLE_LEVEL_NOT_FOUND",
        }
    }
}
