//! Medicine inventory models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{Entity, EntityKind};
use crate::validation::{validate_date, validate_required, ValidationError, ValidationResult};

/// Dispensing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DosageForm {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Inhaler,
    Gel,
    Cream,
}

labeled_enum!(DosageForm {
    Tablet => "Tablet",
    Capsule => "Capsule",
    Syrup => "Syrup",
    Injection => "Injection",
    Inhaler => "Inhaler",
    Gel => "Gel",
    Cream => "Cream",
});

/// A stocked medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Sequential ID (e.g., "M031")
    pub medicine_id: String,
    pub name: String,
    pub brand: String,
    pub dosage_form: DosageForm,
    /// Price per unit
    pub unit_price: f64,
    /// Units on hand
    pub quantity_in_stock: u32,
    /// Expiry date (YYYY-MM-DD)
    pub expiry_date: String,
}

impl Medicine {
    /// Create a medicine with required fields.
    pub fn new(medicine_id: String, name: String, unit_price: f64, quantity_in_stock: u32) -> Self {
        Self {
            medicine_id,
            name,
            brand: String::new(),
            dosage_form: DosageForm::Tablet,
            unit_price,
            quantity_in_stock,
            expiry_date: String::new(),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("medicine_id", &self.medicine_id)?;
        validate_required("name", &self.name)?;
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(ValidationError::Value {
                field: "unit_price",
                reason: format!("{} is not a valid price", self.unit_price),
            });
        }
        validate_date(&self.expiry_date)?;
        Ok(())
    }

    /// Whether the medicine has expired as of `today`.
    ///
    /// Returns `None` if the expiry date does not parse.
    pub fn is_expired_on(&self, today: NaiveDate) -> Option<bool> {
        let expiry = validate_date(&self.expiry_date).ok()?;
        Some(expiry < today)
    }
}

impl Entity for Medicine {
    const KIND: EntityKind = EntityKind::Medicine;

    fn id(&self) -> &str {
        &self.medicine_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        let mut med = Medicine::new("M001".into(), "Paracetamol 500mg".into(), 12.5, 100);
        med.expiry_date = "2026-01-31".into();
        assert!(med.validate().is_ok());

        med.unit_price = -1.0;
        assert!(matches!(
            med.validate(),
            Err(ValidationError::Value { field: "unit_price", .. })
        ));
    }

    #[test]
    fn test_expiry() {
        let mut med = Medicine::new("M001".into(), "Amoxicillin".into(), 30.0, 10);
        med.expiry_date = "2025-06-30".into();
        let before = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(med.is_expired_on(before), Some(false));
        assert_eq!(med.is_expired_on(after), Some(true));

        med.expiry_date = "soon".into();
        assert_eq!(med.is_expired_on(after), None);
    }
}
