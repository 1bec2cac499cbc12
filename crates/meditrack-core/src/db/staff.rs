//! Doctor and nurse database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{decode, write_error, Database, DbError, DbResult};
use crate::ids::EntityKind;
use crate::models::{Doctor, Nurse};

const DOCTOR_COLUMNS: &str =
    "doctor_id, name, specialty, gender, contact_number, email, department_id";
const NURSE_COLUMNS: &str =
    "nurse_id, name, gender, contact_number, qualification, email, department_id";

impl Database {
    // =========================================================================
    // Doctors
    // =========================================================================

    /// Insert a new doctor.
    pub fn insert_doctor(&self, doctor: &Doctor) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO doctors (
                    doctor_id, name, specialty, gender, contact_number, email, department_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    doctor.doctor_id,
                    doctor.name,
                    doctor.specialty,
                    doctor.gender.as_str(),
                    doctor.contact_number,
                    doctor.email,
                    doctor.department_id,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Doctor, &doctor.doctor_id))?;
        tracing::info!(doctor_id = %doctor.doctor_id, "created doctor");
        Ok(())
    }

    /// Update an existing doctor.
    pub fn update_doctor(&self, doctor: &Doctor) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE doctors SET
                    name = ?2,
                    specialty = ?3,
                    gender = ?4,
                    contact_number = ?5,
                    email = ?6,
                    department_id = ?7,
                    updated_at = datetime('now')
                WHERE doctor_id = ?1
                "#,
                params![
                    doctor.doctor_id,
                    doctor.name,
                    doctor.specialty,
                    doctor.gender.as_str(),
                    doctor.contact_number,
                    doctor.email,
                    doctor.department_id,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Doctor, &doctor.doctor_id))?;
        Ok(rows_affected > 0)
    }

    /// Get a doctor by ID.
    pub fn get_doctor(&self, doctor_id: &str) -> DbResult<Option<Doctor>> {
        let sql = format!("SELECT {} FROM doctors WHERE doctor_id = ?", DOCTOR_COLUMNS);
        self.conn
            .query_row(&sql, [doctor_id], DoctorRow::from_row)
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all doctors.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let sql = format!("SELECT {} FROM doctors ORDER BY doctor_id", DOCTOR_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], DoctorRow::from_row)?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(row?.try_into()?);
        }
        Ok(doctors)
    }

    /// List the doctors in a department.
    pub fn list_doctors_in_department(&self, department_id: &str) -> DbResult<Vec<Doctor>> {
        let sql = format!(
            "SELECT {} FROM doctors WHERE department_id = ? ORDER BY doctor_id",
            DOCTOR_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([department_id], DoctorRow::from_row)?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(row?.try_into()?);
        }
        Ok(doctors)
    }

    /// Delete a doctor.
    pub fn delete_doctor(&self, doctor_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Doctor, doctor_id)
    }

    // =========================================================================
    // Nurses
    // =========================================================================

    /// Insert a new nurse.
    pub fn insert_nurse(&self, nurse: &Nurse) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO nurses (
                    nurse_id, name, gender, contact_number, qualification, email, department_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    nurse.nurse_id,
                    nurse.name,
                    nurse.gender.as_str(),
                    nurse.contact_number,
                    nurse.qualification,
                    nurse.email,
                    nurse.department_id,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Nurse, &nurse.nurse_id))?;
        tracing::info!(nurse_id = %nurse.nurse_id, "created nurse");
        Ok(())
    }

    /// Update an existing nurse.
    pub fn update_nurse(&self, nurse: &Nurse) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE nurses SET
                    name = ?2,
                    gender = ?3,
                    contact_number = ?4,
                    qualification = ?5,
                    email = ?6,
                    department_id = ?7,
                    updated_at = datetime('now')
                WHERE nurse_id = ?1
                "#,
                params![
                    nurse.nurse_id,
                    nurse.name,
                    nurse.gender.as_str(),
                    nurse.contact_number,
                    nurse.qualification,
                    nurse.email,
                    nurse.department_id,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Nurse, &nurse.nurse_id))?;
        Ok(rows_affected > 0)
    }

    /// Get a nurse by ID.
    pub fn get_nurse(&self, nurse_id: &str) -> DbResult<Option<Nurse>> {
        let sql = format!("SELECT {} FROM nurses WHERE nurse_id = ?", NURSE_COLUMNS);
        self.conn
            .query_row(&sql, [nurse_id], NurseRow::from_row)
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all nurses.
    pub fn list_nurses(&self) -> DbResult<Vec<Nurse>> {
        let sql = format!("SELECT {} FROM nurses ORDER BY nurse_id", NURSE_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], NurseRow::from_row)?;

        let mut nurses = Vec::new();
        for row in rows {
            nurses.push(row?.try_into()?);
        }
        Ok(nurses)
    }

    /// Delete a nurse.
    pub fn delete_nurse(&self, nurse_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Nurse, nurse_id)
    }
}

/// Intermediate row struct for database mapping.
struct DoctorRow {
    doctor_id: String,
    name: String,
    specialty: String,
    gender: String,
    contact_number: String,
    email: String,
    department_id: String,
}

impl DoctorRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            doctor_id: row.get(0)?,
            name: row.get(1)?,
            specialty: row.get(2)?,
            gender: row.get(3)?,
            contact_number: row.get(4)?,
            email: row.get(5)?,
            department_id: row.get(6)?,
        })
    }
}

impl TryFrom<DoctorRow> for Doctor {
    type Error = DbError;

    fn try_from(row: DoctorRow) -> Result<Self, Self::Error> {
        Ok(Doctor {
            doctor_id: row.doctor_id,
            name: row.name,
            specialty: row.specialty,
            gender: decode("gender", row.gender)?,
            contact_number: row.contact_number,
            email: row.email,
            department_id: row.department_id,
        })
    }
}

struct NurseRow {
    nurse_id: String,
    name: String,
    gender: String,
    contact_number: String,
    qualification: String,
    email: String,
    department_id: String,
}

impl NurseRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            nurse_id: row.get(0)?,
            name: row.get(1)?,
            gender: row.get(2)?,
            contact_number: row.get(3)?,
            qualification: row.get(4)?,
            email: row.get(5)?,
            department_id: row.get(6)?,
        })
    }
}

impl TryFrom<NurseRow> for Nurse {
    type Error = DbError;

    fn try_from(row: NurseRow) -> Result<Self, Self::Error> {
        Ok(Nurse {
            nurse_id: row.nurse_id,
            name: row.name,
            gender: decode("gender", row.gender)?,
            contact_number: row.contact_number,
            qualification: row.qualification,
            email: row.email,
            department_id: row.department_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Gender};

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.insert_department(&Department::new("D001".into(), "Cardiology".into()))
            .unwrap();
        db.insert_department(&Department::new("D002".into(), "Pediatrics".into()))
            .unwrap();
        db
    }

    #[test]
    fn test_doctor_round_trip() {
        let db = setup_db();

        let mut doctor = Doctor::new("DOC001".into(), "Dr. Nimal Perera".into(), "D001".into());
        doctor.specialty = "Cardiologist".into();
        doctor.gender = Gender::Male;
        db.insert_doctor(&doctor).unwrap();

        let retrieved = db.get_doctor("DOC001").unwrap().unwrap();
        assert_eq!(retrieved, doctor);
    }

    #[test]
    fn test_doctor_requires_department() {
        let db = setup_db();
        let doctor = Doctor::new("DOC001".into(), "Dr. X".into(), "D404".into());
        assert!(matches!(
            db.insert_doctor(&doctor),
            Err(DbError::Constraint(_))
        ));
    }

    #[test]
    fn test_doctors_by_department() {
        let db = setup_db();
        db.insert_doctor(&Doctor::new("DOC001".into(), "A".into(), "D001".into()))
            .unwrap();
        db.insert_doctor(&Doctor::new("DOC002".into(), "B".into(), "D002".into()))
            .unwrap();
        db.insert_doctor(&Doctor::new("DOC003".into(), "C".into(), "D001".into()))
            .unwrap();

        let cardiology = db.list_doctors_in_department("D001").unwrap();
        assert_eq!(cardiology.len(), 2);
        assert_eq!(db.list_doctors().unwrap().len(), 3);
    }

    #[test]
    fn test_nurse_update_and_delete() {
        let db = setup_db();

        let mut nurse = Nurse::new("N001".into(), "Kamala".into(), "D001".into());
        db.insert_nurse(&nurse).unwrap();

        nurse.department_id = "D002".into();
        nurse.qualification = "BSc Nursing".into();
        assert!(db.update_nurse(&nurse).unwrap());
        assert_eq!(db.get_nurse("N001").unwrap().unwrap(), nurse);

        assert!(db.delete_nurse("N001").unwrap());
        assert!(db.list_nurses().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_gender_reported() {
        let db = setup_db();
        db.conn()
            .execute(
                "INSERT INTO nurses (nurse_id, name, gender, department_id) VALUES ('N001', 'A', 'unknown', 'D001')",
                [],
            )
            .unwrap();
        assert!(matches!(db.get_nurse("N001"), Err(DbError::Decode(_))));
    }
}
