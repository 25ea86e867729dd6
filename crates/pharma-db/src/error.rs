//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                             │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  GUI layer displays a user-friendly message                         │
//! │                                                                     │
//! │  Note: get-by-id of a missing row is Ok(None), not an error.        │
//! │  Update/delete of a missing row is a silent no-op.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context. The
/// data-access layer performs no local recovery: every store-level
/// failure propagates unchanged to the caller.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Duplicate invoice number (two sales completed within the same
    ///   second share an `INV-YYYYMMDDHHMMSS` number)
    #[error("Duplicate {field}: constraint violated")]
    UniqueViolation { field: String },

    /// NOT NULL constraint violation (e.g. missing required name).
    #[error("Missing required field: {field}")]
    NotNullViolation { field: String },

    /// Attempt to compose a sale from an empty cart.
    #[error("Cannot create a sale from an empty cart")]
    EmptySale,

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (permissions, disk full)
    /// - Pool closed or exhausted
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Sale line-item blob could not be (de)serialized.
    #[error("Line item serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (UNIQUE ...)    → DbError::UniqueViolation
/// sqlx::Error::Database (NOT NULL ...)  → DbError::NotNullViolation
/// sqlx::Error::PoolTimedOut / Closed    → DbError::ConnectionFailed
/// Other                                 → DbError::QueryFailed / Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "UNIQUE constraint failed: <table>.<column>"
                // "NOT NULL constraint failed: <table>.<column>"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                    }
                } else if let Some(field) = msg.strip_prefix("NOT NULL constraint failed: ") {
                    DbError::NotNullViolation {
                        field: field.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => {
                DbError::ConnectionFailed("Connection pool exhausted".to_string())
            }

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::UniqueViolation {
            field: "sales.invoice_number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate sales.invoice_number: constraint violated"
        );

        assert_eq!(
            DbError::EmptySale.to_string(),
            "Cannot create a sale from an empty cart"
        );
    }
}
