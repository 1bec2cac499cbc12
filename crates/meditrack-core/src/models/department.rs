//! Department models.

use serde::{Deserialize, Serialize};

use crate::ids::{Entity, EntityKind};
use crate::validation::{
    validate_department_phone, validate_email, validate_location, validate_name,
    validate_required, ValidationResult,
};

/// A hospital department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    /// Sequential ID (e.g., "D004")
    pub department_id: String,
    /// Department name (letters and spaces)
    pub name: String,
    /// Contact email
    pub email: String,
    /// Building/floor location
    pub location: String,
    /// Name of the head of department
    pub head_of_department: String,
    /// Contact phone (mobile or 038 landline)
    pub phone_number: String,
}

impl Department {
    /// Create a department with required fields.
    pub fn new(department_id: String, name: String) -> Self {
        Self {
            department_id,
            name,
            email: String::new(),
            location: String::new(),
            head_of_department: String::new(),
            phone_number: String::new(),
        }
    }

    /// Check the fields the department form checks before submitting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("department_id", &self.department_id)?;
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_location(&self.location)?;
        validate_required("head_of_department", &self.head_of_department)?;
        validate_department_phone(&self.phone_number)?;
        Ok(())
    }
}

impl Entity for Department {
    const KIND: EntityKind = EntityKind::Department;

    fn id(&self) -> &str {
        &self.department_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn cardiology() -> Department {
        let mut dept = Department::new("D001".into(), "Cardiology".into());
        dept.email = "cardio@meditrack.lk".into();
        dept.location = "Block A".into();
        dept.head_of_department = "Dr. Silva".into();
        dept.phone_number = "0381234567".into();
        dept
    }

    #[test]
    fn test_valid_department() {
        assert!(cardiology().validate().is_ok());
    }

    #[test]
    fn test_invalid_name() {
        let mut dept = cardiology();
        dept.name = "ICU-2".into();
        assert!(matches!(
            dept.validate(),
            Err(ValidationError::Name(_))
        ));
    }

    #[test]
    fn test_missing_head() {
        let mut dept = cardiology();
        dept.head_of_department = String::new();
        assert_eq!(
            dept.validate(),
            Err(ValidationError::Required("head_of_department"))
        );
    }
}
