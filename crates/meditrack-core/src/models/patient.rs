//! Patient models.

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::ids::{Entity, EntityKind};
use crate::validation::{
    validate_date, validate_mobile_number, validate_name, validate_required, ValidationResult,
};

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

labeled_enum!(BloodType {
    APositive => "A+",
    ANegative => "A-",
    BPositive => "B+",
    BNegative => "B-",
    AbPositive => "AB+",
    AbNegative => "AB-",
    OPositive => "O+",
    ONegative => "O-",
});

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Sequential ID (e.g., "P023")
    pub patient_id: String,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub postal_code: String,
    pub gender: Gender,
    /// Mobile number
    pub contact_number: String,
    pub blood_type: Option<BloodType>,
    /// Free-text list of chronic conditions
    pub chronic_diseases: Option<String>,
    /// Date of last visit (YYYY-MM-DD)
    pub last_visit_date: Option<String>,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(patient_id: String, name: String, age: u32) -> Self {
        Self {
            patient_id,
            name,
            age,
            address_line1: String::new(),
            address_line2: None,
            postal_code: String::new(),
            gender: Gender::Other,
            contact_number: String::new(),
            blood_type: None,
            chronic_diseases: None,
            last_visit_date: None,
        }
    }

    /// Check the fields the patient form checks before submitting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("patient_id", &self.patient_id)?;
        validate_name(&self.name)?;
        validate_required("address_line1", &self.address_line1)?;
        validate_mobile_number(&self.contact_number)?;
        if let Some(date) = &self.last_visit_date {
            validate_date(date)?;
        }
        Ok(())
    }

    /// Single-line postal address.
    pub fn address(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref().filter(|l| !l.trim().is_empty()) {
            parts.push(line2);
        }
        if !self.postal_code.is_empty() {
            parts.push(self.postal_code.as_str());
        }
        parts.join(", ")
    }
}

impl Entity for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    fn id(&self) -> &str {
        &self.patient_id
    }
}
