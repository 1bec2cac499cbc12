//! Database layer for clinic records.
//!
//! The database is the authoritative store for every record kind. It is also
//! where identifier uniqueness is enforced: the allocator only suggests IDs,
//! and a clashing insert comes back as [`DbError::Duplicate`].

mod schema;
mod store;
mod departments;
mod staff;
mod patients;
mod appointments;
mod medicines;
mod medical_reports;
mod payments;
mod dashboard;

pub use schema::*;
pub use dashboard::*;

use rusqlite::{ffi, Connection, ErrorCode};
use std::path::Path;
use thiserror::Error;

use crate::ids::EntityKind;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Duplicate {kind} ID: {id}")]
    Duplicate { kind: EntityKind, id: String },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Invalid stored value: {0}")]
    Decode(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened database");
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Classify a failed write against `kind`/`id`.
///
/// Primary key clashes become [`DbError::Duplicate`]; other constraint
/// failures (foreign keys, checks) become [`DbError::Constraint`].
fn write_error(err: rusqlite::Error, kind: EntityKind, id: &str) -> DbError {
    if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
        if failure.code == ErrorCode::ConstraintViolation {
            return match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    tracing::warn!(%kind, id, "rejected duplicate identifier");
                    DbError::Duplicate {
                        kind,
                        id: id.to_string(),
                    }
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => DbError::Constraint(format!(
                    "{} {} references a missing record or is still referenced",
                    kind, id
                )),
                _ => DbError::Constraint(format!("{} {}: {}", kind, id, err)),
            };
        }
    }
    DbError::Sqlite(err)
}

/// Classify a failed write of a child row (payment item, report test result).
///
/// Any constraint failure, including a clash on the child's own key, is a
/// [`DbError::Constraint`] naming the child rather than the parent.
fn child_write_error(err: rusqlite::Error, child: &str, id: &str) -> DbError {
    if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
        if failure.code == ErrorCode::ConstraintViolation {
            tracing::warn!(child, id, "rejected child row");
            return DbError::Constraint(format!("{} {}: {}", child, id, err));
        }
    }
    DbError::Sqlite(err)
}

/// Build a LIKE pattern matching `query` literally, for use with `ESCAPE '\'`.
fn like_pattern(query: &str, leading: bool) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    if leading {
        escaped.push('%');
    }
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Parse a stored enum label.
fn decode<T>(column: &str, value: String) -> DbResult<T>
where
    T: TryFrom<String, Error = String>,
{
    T::try_from(value).map_err(|e| DbError::Decode(format!("{}: {}", column, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        // Check that tables exist
        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        for kind in EntityKind::ALL {
            assert!(tables.contains(&kind.table().to_string()), "missing {}", kind);
        }
        assert!(tables.contains(&"report_test_results".to_string()));
        assert!(tables.contains(&"payment_items".to_string()));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Max", false), "Max%");
        assert_eq!(like_pattern("moxi", true), "%moxi%");
        assert_eq!(like_pattern("50%_off", false), "50\\%\\_off%");
        assert_eq!(like_pattern("a\\b", false), "a\\\\b%");
    }

    #[test]
    fn test_open_file_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic.db");

        {
            let db = Database::open(&path).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO departments (department_id, name) VALUES ('D001', 'Radiology')",
                    [],
                )
                .unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.list_ids(EntityKind::Department).unwrap(), vec!["D001"]);
    }
}
