//! Department database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{write_error, Database, DbResult};
use crate::ids::EntityKind;
use crate::models::Department;

const COLUMNS: &str = "department_id, name, email, location, head_of_department, phone_number";

fn department_from_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        department_id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        location: row.get(3)?,
        head_of_department: row.get(4)?,
        phone_number: row.get(5)?,
    })
}

impl Database {
    /// Insert a new department.
    pub fn insert_department(&self, dept: &Department) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO departments (
                    department_id, name, email, location, head_of_department, phone_number
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    dept.department_id,
                    dept.name,
                    dept.email,
                    dept.location,
                    dept.head_of_department,
                    dept.phone_number,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Department, &dept.department_id))?;
        tracing::info!(department_id = %dept.department_id, "created department");
        Ok(())
    }

    /// Update an existing department.
    pub fn update_department(&self, dept: &Department) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE departments SET
                    name = ?2,
                    email = ?3,
                    location = ?4,
                    head_of_department = ?5,
                    phone_number = ?6,
                    updated_at = datetime('now')
                WHERE department_id = ?1
                "#,
                params![
                    dept.department_id,
                    dept.name,
                    dept.email,
                    dept.location,
                    dept.head_of_department,
                    dept.phone_number,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Department, &dept.department_id))?;
        Ok(rows_affected > 0)
    }

    /// Get a department by ID.
    pub fn get_department(&self, department_id: &str) -> DbResult<Option<Department>> {
        let sql = format!("SELECT {} FROM departments WHERE department_id = ?", COLUMNS);
        self.conn
            .query_row(&sql, [department_id], department_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// List all departments.
    pub fn list_departments(&self) -> DbResult<Vec<Department>> {
        let sql = format!("SELECT {} FROM departments ORDER BY department_id", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], department_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a department.
    pub fn delete_department(&self, department_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Department, department_id)
    }
}
