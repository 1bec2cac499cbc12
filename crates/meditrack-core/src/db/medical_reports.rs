//! Medical report database operations.
//!
//! Test results live in `report_test_results`, keyed by report and line
//! number. They are written with their report in one transaction and
//! replaced wholesale on update.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{child_write_error, write_error, Database, DbResult};
use crate::ids::EntityKind;
use crate::models::{MedicalReport, TestResult};

const COLUMNS: &str =
    "medical_report_id, report_date, patient_id, patient_name, doctor_id, notes";

fn report_from_row(row: &Row<'_>) -> rusqlite::Result<MedicalReport> {
    Ok(MedicalReport {
        medical_report_id: row.get(0)?,
        report_date: row.get(1)?,
        patient_id: row.get(2)?,
        patient_name: row.get(3)?,
        doctor_id: row.get(4)?,
        notes: row.get(5)?,
        test_results: Vec::new(),
    })
}

fn test_result_from_row(row: &Row<'_>) -> rusqlite::Result<TestResult> {
    Ok(TestResult {
        description: row.get(0)?,
        result: row.get(1)?,
        units: row.get(2)?,
        reference_range: row.get(3)?,
        stat: row.get(4)?,
    })
}

fn write_test_results(conn: &Connection, report: &MedicalReport) -> DbResult<()> {
    let mut stmt = conn.prepare(
        r#"
        INSERT INTO report_test_results (
            medical_report_id, line_no, description, result, units, reference_range, stat
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )?;
    for (i, test) in report.test_results.iter().enumerate() {
        stmt.execute(params![
            report.medical_report_id,
            (i + 1) as i64,
            test.description,
            test.result,
            test.units,
            test.reference_range,
            test.stat,
        ])
        .map_err(|e| child_write_error(e, "test result", &test.description))?;
    }
    Ok(())
}

impl Database {
    /// Insert a report together with its test results.
    pub fn insert_medical_report(&self, report: &MedicalReport) -> DbResult<()> {
        let id = &report.medical_report_id;
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            r#"
            INSERT INTO medical_reports (
                medical_report_id, report_date, patient_id, patient_name, doctor_id, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                report.medical_report_id,
                report.report_date,
                report.patient_id,
                report.patient_name,
                report.doctor_id,
                report.notes,
            ],
        )
        .map_err(|e| write_error(e, EntityKind::MedicalReport, id))?;
        write_test_results(&tx, report)?;
        tx.commit()?;

        tracing::info!(
            medical_report_id = %id,
            tests = report.test_results.len(),
            "issued medical report"
        );
        Ok(())
    }

    /// Update a report, replacing its test results.
    pub fn update_medical_report(&self, report: &MedicalReport) -> DbResult<bool> {
        let id = &report.medical_report_id;
        let tx = self.conn.unchecked_transaction()?;
        let rows_affected = tx
            .execute(
                r#"
                UPDATE medical_reports SET
                    report_date = ?2,
                    patient_id = ?3,
                    patient_name = ?4,
                    doctor_id = ?5,
                    notes = ?6,
                    updated_at = datetime('now')
                WHERE medical_report_id = ?1
                "#,
                params![
                    report.medical_report_id,
                    report.report_date,
                    report.patient_id,
                    report.patient_name,
                    report.doctor_id,
                    report.notes,
                ],
            )
            .map_err(|e| write_error(e, EntityKind::MedicalReport, id))?;
        if rows_affected == 0 {
            return Ok(false);
        }

        tx.execute(
            "DELETE FROM report_test_results WHERE medical_report_id = ?",
            [id],
        )?;
        write_test_results(&tx, report)?;
        tx.commit()?;
        Ok(true)
    }

    /// Get a report with its test results.
    pub fn get_medical_report(&self, medical_report_id: &str) -> DbResult<Option<MedicalReport>> {
        let sql = format!(
            "SELECT {} FROM medical_reports WHERE medical_report_id = ?",
            COLUMNS
        );
        let report = self
            .conn
            .query_row(&sql, [medical_report_id], report_from_row)
            .optional()?;

        match report {
            Some(mut report) => {
                report.test_results = self.load_test_results(medical_report_id)?;
                Ok(Some(report))
            }
            None => Ok(None),
        }
    }

    /// List all reports with their test results.
    pub fn list_medical_reports(&self) -> DbResult<Vec<MedicalReport>> {
        let sql = format!(
            "SELECT {} FROM medical_reports ORDER BY medical_report_id",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut reports = stmt
            .query_map([], report_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for report in &mut reports {
            report.test_results = self.load_test_results(&report.medical_report_id)?;
        }
        Ok(reports)
    }

    /// Reports issued for a patient, newest first.
    pub fn list_medical_reports_for_patient(
        &self,
        patient_id: &str,
    ) -> DbResult<Vec<MedicalReport>> {
        let sql = format!(
            "SELECT {} FROM medical_reports WHERE patient_id = ? ORDER BY report_date DESC",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut reports = stmt
            .query_map([patient_id], report_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for report in &mut reports {
            report.test_results = self.load_test_results(&report.medical_report_id)?;
        }
        Ok(reports)
    }

    /// Delete a report and its test results.
    pub fn delete_medical_report(&self, medical_report_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::MedicalReport, medical_report_id)
    }

    fn load_test_results(&self, medical_report_id: &str) -> DbResult<Vec<TestResult>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT description, result, units, reference_range, stat
            FROM report_test_results
            WHERE medical_report_id = ?
            ORDER BY line_no
            "#,
        )?;
        let rows = stmt.query_map([medical_report_id], test_result_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use crate::models::{Department, Doctor, Patient};

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.insert_department(&Department::new("D001".into(), "Pathology".into()))
            .unwrap();
        db.insert_doctor(&Doctor::new("DOC001".into(), "Dr. Fernando".into(), "D001".into()))
            .unwrap();
        db.insert_patient(&Patient::new("P001".into(), "Ruwan".into(), 51))
            .unwrap();
        db
    }

    fn test_result(description: &str, result: &str, stat: &str) -> TestResult {
        TestResult {
            description: description.into(),
            result: result.into(),
            units: "mg/dL".into(),
            reference_range: "70 - 110".into(),
            stat: stat.into(),
        }
    }

    fn make_report(id: &str, date: &str) -> MedicalReport {
        let mut report = MedicalReport::new(id.into(), "P001".into(), "DOC001".into(), date.into());
        report.patient_name = "Ruwan".into();
        report.notes = "Fasting sample".into();
        report
    }

    #[test]
    fn test_round_trip_keeps_result_order() {
        let db = setup_db();

        let mut report = make_report("MR001", "2025-02-01");
        report.test_results = vec![
            test_result("Glucose", "132", "H"),
            test_result("Cholesterol", "180", ""),
            test_result("Triglycerides", "95", ""),
        ];
        db.insert_medical_report(&report).unwrap();

        let retrieved = db.get_medical_report("MR001").unwrap().unwrap();
        assert_eq!(retrieved, report);
    }

    #[test]
    fn test_update_replaces_results() {
        let db = setup_db();

        let mut report = make_report("MR001", "2025-02-01");
        report.test_results = vec![
            test_result("Glucose", "132", "H"),
            test_result("Cholesterol", "180", ""),
        ];
        db.insert_medical_report(&report).unwrap();

        report.test_results = vec![test_result("Glucose", "101", "")];
        report.notes = "Repeat test".into();
        assert!(db.update_medical_report(&report).unwrap());

        let retrieved = db.get_medical_report("MR001").unwrap().unwrap();
        assert_eq!(retrieved.test_results.len(), 1);
        assert_eq!(retrieved.notes, "Repeat test");

        let missing = make_report("MR404", "2025-02-01");
        assert!(!db.update_medical_report(&missing).unwrap());
    }

    #[test]
    fn test_failed_insert_leaves_nothing() {
        let db = setup_db();

        let mut report = make_report("MR001", "2025-02-01");
        report.doctor_id = "DOC404".into();
        report.test_results = vec![test_result("Glucose", "132", "H")];

        assert!(matches!(
            db.insert_medical_report(&report),
            Err(DbError::Constraint(_))
        ));
        assert!(db.get_medical_report("MR001").unwrap().is_none());
        assert!(db.load_test_results("MR001").unwrap().is_empty());
    }

    #[test]
    fn test_reports_for_patient() {
        let db = setup_db();
        db.insert_medical_report(&make_report("MR001", "2025-01-10"))
            .unwrap();
        db.insert_medical_report(&make_report("MR002", "2025-03-05"))
            .unwrap();

        let reports = db.list_medical_reports_for_patient("P001").unwrap();
        let ids: Vec<&str> = reports.iter().map(|r| r.medical_report_id.as_str()).collect();
        assert_eq!(ids, vec!["MR002", "MR001"]);
        assert_eq!(db.list_medical_reports().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_cascades_results() {
        let db = setup_db();
        let mut report = make_report("MR001", "2025-02-01");
        report.test_results = vec![test_result("Glucose", "132", "H")];
        db.insert_medical_report(&report).unwrap();

        assert!(db.delete_medical_report("MR001").unwrap());
        assert!(db.load_test_results("MR001").unwrap().is_empty());
    }
}
