//! Medical report models.

use serde::{Deserialize, Serialize};

use crate::ids::{Entity, EntityKind};
use crate::validation::{validate_date, validate_required, ValidationResult};

/// One line of a lab report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    /// Test name (e.g., "Haemoglobin")
    pub description: String,
    pub result: String,
    pub units: String,
    /// Normal range as printed on the report (e.g., "13.5 - 17.5")
    pub reference_range: String,
    /// Flag column (e.g., "H", "L", or empty)
    pub stat: String,
}

/// A medical report issued by a doctor for a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalReport {
    /// Sequential ID (e.g., "MR009")
    pub medical_report_id: String,
    /// Report date (YYYY-MM-DD)
    pub report_date: String,
    pub patient_id: String,
    /// Patient name at time of issue
    pub patient_name: String,
    pub doctor_id: String,
    pub notes: String,
    pub test_results: Vec<TestResult>,
}

impl MedicalReport {
    /// Create an empty report.
    pub fn new(
        medical_report_id: String,
        patient_id: String,
        doctor_id: String,
        report_date: String,
    ) -> Self {
        Self {
            medical_report_id,
            report_date,
            patient_id,
            patient_name: String::new(),
            doctor_id,
            notes: String::new(),
            test_results: Vec::new(),
        }
    }

    /// The report form requires every field, including notes.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("medical_report_id", &self.medical_report_id)?;
        validate_date(&self.report_date)?;
        validate_required("patient_id", &self.patient_id)?;
        validate_required("doctor_id", &self.doctor_id)?;
        validate_required("notes", &self.notes)?;
        for result in &self.test_results {
            validate_required("description", &result.description)?;
        }
        Ok(())
    }

    /// Results carrying a non-empty flag.
    pub fn flagged_results(&self) -> impl Iterator<Item = &TestResult> {
        self.test_results.iter().filter(|r| !r.stat.trim().is_empty())
    }
}

impl Entity for MedicalReport {
    const KIND: EntityKind = EntityKind::MedicalReport;

    fn id(&self) -> &str {
        &self.medical_report_id
    }
}
