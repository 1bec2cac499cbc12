//! Operations shared by every record kind.

use super::{write_error, Database, DbResult};
use crate::ids::EntityKind;

impl Database {
    /// Identifiers currently stored for a kind, in ID order.
    pub fn list_ids(&self, kind: EntityKind) -> DbResult<Vec<String>> {
        let sql = format!(
            "SELECT {id} FROM {table} ORDER BY {id}",
            id = kind.id_field(),
            table = kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<Vec<String>, _>>().map_err(Into::into)
    }

    /// Suggest the next identifier for a kind from the current snapshot.
    ///
    /// The suggestion is advisory. Two callers that ask before either inserts
    /// get the same answer; the second insert fails with a duplicate error.
    pub fn suggest_next_id(&self, kind: EntityKind) -> DbResult<String> {
        let ids = self.list_ids(kind)?;
        let next = kind.scheme().next(&ids);
        tracing::debug!(%kind, existing = ids.len(), next = %next, "suggested next id");
        Ok(next)
    }

    /// Number of records of a kind.
    pub fn count(&self, kind: EntityKind) -> DbResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Whether a record with this identifier exists.
    pub fn exists(&self, kind: EntityKind, id: &str) -> DbResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
            kind.table(),
            kind.id_field()
        );
        let exists: bool = self.conn.query_row(&sql, [id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Delete a record of any kind.
    ///
    /// Child rows (report test results, payment items) go with their parent.
    /// Deleting a record that others still reference fails with a constraint
    /// error.
    pub fn delete(&self, kind: EntityKind, id: &str) -> DbResult<bool> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", kind.table(), kind.id_field());
        let rows_affected = self
            .conn
            .execute(&sql, [id])
            .map_err(|e| write_error(e, kind, id))?;
        if rows_affected > 0 {
            tracing::info!(%kind, id, "deleted record");
        }
        Ok(rows_affected > 0)
    }
}
