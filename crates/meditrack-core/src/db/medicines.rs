//! Medicine inventory database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{decode, like_pattern, write_error, Database, DbError, DbResult};
use crate::ids::EntityKind;
use crate::models::Medicine;

const COLUMNS: &str =
    "medicine_id, name, brand, dosage_form, unit_price, quantity_in_stock, expiry_date";

impl Database {
    /// Insert a new medicine.
    pub fn insert_medicine(&self, medicine: &Medicine) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO medicines (
                    medicine_id, name, brand, dosage_form, unit_price,
                    quantity_in_stock, expiry_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    medicine.medicine_id,
                    medicine.name,
                    medicine.brand,
                    medicine.dosage_form.as_str(),
                    medicine.unit_price,
                    medicine.quantity_in_stock,
                    medicine.expiry_date,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Medicine, &medicine.medicine_id))?;
        tracing::info!(medicine_id = %medicine.medicine_id, "added medicine");
        Ok(())
    }

    /// Update an existing medicine.
    pub fn update_medicine(&self, medicine: &Medicine) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE medicines SET
                    name = ?2,
                    brand = ?3,
                    dosage_form = ?4,
                    unit_price = ?5,
                    quantity_in_stock = ?6,
                    expiry_date = ?7,
                    updated_at = datetime('now')
                WHERE medicine_id = ?1
                "#,
                params![
                    medicine.medicine_id,
                    medicine.name,
                    medicine.brand,
                    medicine.dosage_form.as_str(),
                    medicine.unit_price,
                    medicine.quantity_in_stock,
                    medicine.expiry_date,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Medicine, &medicine.medicine_id))?;
        Ok(rows_affected > 0)
    }

    /// Get a medicine by ID.
    pub fn get_medicine(&self, medicine_id: &str) -> DbResult<Option<Medicine>> {
        let sql = format!("SELECT {} FROM medicines WHERE medicine_id = ?", COLUMNS);
        self.conn
            .query_row(&sql, [medicine_id], MedicineRow::from_row)
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// Search medicines by name or brand (substring match).
    pub fn search_medicines(&self, query: &str, limit: usize) -> DbResult<Vec<Medicine>> {
        let pattern = like_pattern(query, true);
        let sql = format!(
            r"SELECT {} FROM medicines WHERE name LIKE ?1 ESCAPE '\' OR brand LIKE ?1 ESCAPE '\' ORDER BY name LIMIT ?2",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![pattern, limit as i64], MedicineRow::from_row)?;

        let mut medicines = Vec::new();
        for row in rows {
            medicines.push(row?.try_into()?);
        }
        Ok(medicines)
    }

    /// List all medicines.
    pub fn list_medicines(&self) -> DbResult<Vec<Medicine>> {
        let sql = format!("SELECT {} FROM medicines ORDER BY medicine_id", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], MedicineRow::from_row)?;

        let mut medicines = Vec::new();
        for row in rows {
            medicines.push(row?.try_into()?);
        }
        Ok(medicines)
    }

    /// Delete a medicine.
    pub fn delete_medicine(&self, medicine_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Medicine, medicine_id)
    }
}

struct MedicineRow {
    medicine_id: String,
    name: String,
    brand: String,
    dosage_form: String,
    unit_price: f64,
    quantity_in_stock: u32,
    expiry_date: String,
}

impl MedicineRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            medicine_id: row.get(0)?,
            name: row.get(1)?,
            brand: row.get(2)?,
            dosage_form: row.get(3)?,
            unit_price: row.get(4)?,
            quantity_in_stock: row.get(5)?,
            expiry_date: row.get(6)?,
        })
    }
}

impl TryFrom<MedicineRow> for Medicine {
    type Error = DbError;

    fn try_from(row: MedicineRow) -> Result<Self, Self::Error> {
        Ok(Medicine {
            medicine_id: row.medicine_id,
            name: row.name,
            brand: row.brand,
            dosage_form: decode("dosage_form", row.dosage_form)?,
            unit_price: row.unit_price,
            quantity_in_stock: row.quantity_in_stock,
            expiry_date: row.expiry_date,
        })
    }
}
