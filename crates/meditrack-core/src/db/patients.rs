//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{decode, like_pattern, write_error, Database, DbError, DbResult};
use crate::ids::EntityKind;
use crate::models::Patient;

const COLUMNS: &str = r#"
    patient_id, name, age, address_line1, address_line2, postal_code,
    gender, contact_number, blood_type, chronic_diseases, last_visit_date
"#;

impl Database {
    /// Insert a new patient.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO patients (
                    patient_id, name, age, address_line1, address_line2, postal_code,
                    gender, contact_number, blood_type, chronic_diseases, last_visit_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    patient.patient_id,
                    patient.name,
                    patient.age,
                    patient.address_line1,
                    patient.address_line2,
                    patient.postal_code,
                    patient.gender.as_str(),
                    patient.contact_number,
                    patient.blood_type.map(|b| b.as_str()),
                    patient.chronic_diseases,
                    patient.last_visit_date,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Patient, &patient.patient_id))?;
        tracing::info!(patient_id = %patient.patient_id, "created patient");
        Ok(())
    }

    /// Update an existing patient.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE patients SET
                    name = ?2,
                    age = ?3,
                    address_line1 = ?4,
                    address_line2 = ?5,
                    postal_code = ?6,
                    gender = ?7,
                    contact_number = ?8,
                    blood_type = ?9,
                    chronic_diseases = ?10,
                    last_visit_date = ?11,
                    updated_at = datetime('now')
                WHERE patient_id = ?1
                "#,
                params![
                    patient.patient_id,
                    patient.name,
                    patient.age,
                    patient.address_line1,
                    patient.address_line2,
                    patient.postal_code,
                    patient.gender.as_str(),
                    patient.contact_number,
                    patient.blood_type.map(|b| b.as_str()),
                    patient.chronic_diseases,
                    patient.last_visit_date,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Patient, &patient.patient_id))?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, patient_id: &str) -> DbResult<Option<Patient>> {
        let sql = format!("SELECT {} FROM patients WHERE patient_id = ?", COLUMNS);
        self.conn
            .query_row(&sql, [patient_id], PatientRow::from_row)
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// Search patients by name (prefix match).
    pub fn search_patients(&self, query: &str, limit: usize) -> DbResult<Vec<Patient>> {
        let pattern = like_pattern(query, false);
        let sql = format!(
            r"SELECT {} FROM patients WHERE name LIKE ? ESCAPE '\' ORDER BY name LIMIT ?",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![pattern, limit as i64], PatientRow::from_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }

    /// List all patients.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let sql = format!("SELECT {} FROM patients ORDER BY patient_id", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], PatientRow::from_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }

    /// Delete a patient.
    pub fn delete_patient(&self, patient_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Patient, patient_id)
    }
}

/// Intermediate row struct for database mapping.
struct PatientRow {
    patient_id: String,
    name: String,
    age: u32,
    address_line1: String,
    address_line2: Option<String>,
    postal_code: String,
    gender: String,
    contact_number: String,
    blood_type: Option<String>,
    chronic_diseases: Option<String>,
    last_visit_date: Option<String>,
}

impl PatientRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            patient_id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            address_line1: row.get(3)?,
            address_line2: row.get(4)?,
            postal_code: row.get(5)?,
            gender: row.get(6)?,
            contact_number: row.get(7)?,
            blood_type: row.get(8)?,
            chronic_diseases: row.get(9)?,
            last_visit_date: row.get(10)?,
        })
    }
}

impl TryFrom<PatientRow> for Patient {
    type Error = DbError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        Ok(Patient {
            patient_id: row.patient_id,
            name: row.name,
            age: row.age,
            address_line1: row.address_line1,
            address_line2: row.address_line2,
            postal_code: row.postal_code,
            gender: decode("gender", row.gender)?,
            contact_number: row.contact_number,
            blood_type: row
                .blood_type
                .map(|b| decode("blood_type", b))
                .transpose()?,
            chronic_diseases: row.chronic_diseases,
            last_visit_date: row.last_visit_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodType, Gender};

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();

        let mut patient = Patient::new("P001".into(), "Saman Kumara".into(), 42);
        patient.gender = Gender::Male;
        patient.blood_type = Some(BloodType::ONegative);
        patient.address_line2 = Some("Kandy".into());

        db.insert_patient(&patient).unwrap();

        let retrieved = db.get_patient("P001").unwrap().unwrap();
        assert_eq!(retrieved, patient);
    }

    #[test]
    fn test_update_patient() {
        let db = setup_db();

        let mut patient = Patient::new("P001".into(), "Saman".into(), 42);
        db.insert_patient(&patient).unwrap();

        patient.age = 43;
        patient.chronic_diseases = Some("Hypertension".into());
        assert!(db.update_patient(&patient).unwrap());

        let retrieved = db.get_patient("P001").unwrap().unwrap();
        assert_eq!(retrieved.age, 43);
        assert_eq!(retrieved.chronic_diseases, Some("Hypertension".into()));
    }

    #[test]
    fn test_search_patients() {
        let db = setup_db();

        db.insert_patient(&Patient::new("P001".into(), "Max".into(), 30))
            .unwrap();
        db.insert_patient(&Patient::new("P002".into(), "Maxine".into(), 25))
            .unwrap();
        db.insert_patient(&Patient::new("P003".into(), "Luna".into(), 60))
            .unwrap();

        let results = db.search_patients("Max", 10).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|p| p.name == "Max"));
        assert!(results.iter().any(|p| p.name == "Maxine"));
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let db = setup_db();

        db.insert_patient(&Patient::new("P001".into(), "Max".into(), 30))
            .unwrap();
        db.insert_patient(&Patient::new("P002".into(), "Mary_Ann".into(), 25))
            .unwrap();

        assert!(db.search_patients("%", 10).unwrap().is_empty());
        assert!(db.search_patients("_", 10).unwrap().is_empty());

        let results = db.search_patients("Mary_", 10).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patient_id, "P002");
    }

    #[test]
    fn test_delete_patient() {
        let db = setup_db();
        db.insert_patient(&Patient::new("P001".into(), "Max".into(), 30))
            .unwrap();
        assert!(db.delete_patient("P001").unwrap());
        assert!(db.get_patient("P001").unwrap().is_none());
    }
}
