//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use boardcount_domain::BoardCountError;
use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BoardCountError);

impl From<InfraError> for BoardCountError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BoardCountError> for InfraError {
    fn from(value: BoardCountError) -> Self {
        InfraError(value)
    }
}

trait IntoBoardCountError {
    fn into_boardcount(self) -> BoardCountError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → BoardCountError */
/* -------------------------------------------------------------------------- */

impl IntoBoardCountError for SqlError {
    fn into_boardcount(self) -> BoardCountError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => BoardCountError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        BoardCountError::Storage("database is locked".into())
                    }
                    ErrorCode::ReadOnly => {
                        BoardCountError::Storage("database is read-only".into())
                    }
                    ErrorCode::DiskFull => BoardCountError::Storage("disk is full".into()),
                    ErrorCode::NotADatabase => {
                        BoardCountError::Storage("file is not a SQLite database".into())
                    }
                    _ => BoardCountError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                BoardCountError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                BoardCountError::Storage(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                BoardCountError::Storage("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => BoardCountError::Config(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => BoardCountError::Internal("invalid SQL query".into()),
            other => BoardCountError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_boardcount())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → BoardCountError */
/* -------------------------------------------------------------------------- */

impl IntoBoardCountError for PoolError {
    fn into_boardcount(self) -> BoardCountError {
        BoardCountError::Storage(format!("connection pool: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_boardcount())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → BoardCountError */
/* -------------------------------------------------------------------------- */

impl IntoBoardCountError for IoError {
    fn into_boardcount(self) -> BoardCountError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::PermissionDenied => {
                BoardCountError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::NotFound => BoardCountError::Storage(format!("file not found: {self}")),
            _ => BoardCountError::Storage(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_boardcount())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → BoardCountError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(BoardCountError::from(value))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
