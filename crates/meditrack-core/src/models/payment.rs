//! Payment models.

use serde::{Deserialize, Serialize};

use crate::ids::{Entity, EntityKind};
use crate::validation::{validate_date, validate_required, ValidationError, ValidationResult};

/// One medicine line on a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentItem {
    /// Line ID, `PD-{payment_id}-{n}`
    pub payment_details_id: String,
    pub medicine_id: String,
    pub quantity: u32,
    /// Price per unit at time of sale
    pub unit_price: f64,
    /// quantity × unit_price
    pub total_price: f64,
}

impl PaymentItem {
    /// Line ID for the `line_no`-th item (1-based) of a payment.
    pub fn details_id(payment_id: &str, line_no: usize) -> String {
        format!("PD-{}-{}", payment_id, line_no)
    }
}

/// A payment for dispensed medicines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Sequential ID (e.g., "PI023")
    pub payment_id: String,
    /// Payment date (YYYY-MM-DD)
    pub payment_date: String,
    pub patient_id: String,
    pub items: Vec<PaymentItem>,
}

impl Payment {
    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("payment_id", &self.payment_id)?;
        validate_date(&self.payment_date)?;
        validate_required("patient_id", &self.patient_id)?;
        if self.items.is_empty() {
            return Err(ValidationError::Value {
                field: "items",
                reason: "a payment needs at least one item".to_string(),
            });
        }
        Ok(())
    }
}

impl Entity for Payment {
    const KIND: EntityKind = EntityKind::Payment;

    fn id(&self) -> &str {
        &self.payment_id
    }
}
