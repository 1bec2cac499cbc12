//! Doctor and nurse models.

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::ids::{Entity, EntityKind};
use crate::validation::{validate_email, validate_mobile_number, validate_required, ValidationResult};

/// A doctor attached to a department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Sequential ID (e.g., "DOC014")
    pub doctor_id: String,
    /// Full name
    pub name: String,
    /// Medical specialty (e.g., "Cardiologist")
    pub specialty: String,
    pub gender: Gender,
    /// Mobile number
    pub contact_number: String,
    pub email: String,
    /// Department this doctor belongs to
    pub department_id: String,
}

impl Doctor {
    /// Create a doctor with required fields.
    pub fn new(doctor_id: String, name: String, department_id: String) -> Self {
        Self {
            doctor_id,
            name,
            specialty: String::new(),
            gender: Gender::Other,
            contact_number: String::new(),
            email: String::new(),
            department_id,
        }
    }

    /// Check the fields the doctor form checks before submitting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("doctor_id", &self.doctor_id)?;
        validate_required("name", &self.name)?;
        validate_required("specialty", &self.specialty)?;
        validate_email(&self.email)?;
        validate_mobile_number(&self.contact_number)?;
        validate_required("department_id", &self.department_id)?;
        Ok(())
    }
}

impl Entity for Doctor {
    const KIND: EntityKind = EntityKind::Doctor;

    fn id(&self) -> &str {
        &self.doctor_id
    }
}

/// A nurse attached to a department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nurse {
    /// Sequential ID (e.g., "N007")
    pub nurse_id: String,
    pub name: String,
    pub gender: Gender,
    pub contact_number: String,
    /// Highest nursing qualification
    pub qualification: String,
    pub email: String,
    pub department_id: String,
}

impl Nurse {
    /// Create a nurse with required fields.
    pub fn new(nurse_id: String, name: String, department_id: String) -> Self {
        Self {
            nurse_id,
            name,
            gender: Gender::Other,
            contact_number: String::new(),
            qualification: String::new(),
            email: String::new(),
            department_id,
        }
    }

    /// Check the fields the nurse form checks before submitting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("nurse_id", &self.nurse_id)?;
        validate_required("name", &self.name)?;
        validate_required("qualification", &self.qualification)?;
        validate_email(&self.email)?;
        validate_mobile_number(&self.contact_number)?;
        validate_required("department_id", &self.department_id)?;
        Ok(())
    }
}

impl Entity for Nurse {
    const KIND: EntityKind = EntityKind::Nurse;

    fn id(&self) -> &str {
        &self.nurse_id
    }
}
