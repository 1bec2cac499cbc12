//! Bill export for payments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ExportError, ExportResult};
use crate::db::Database;
use crate::models::{Medicine, Patient, Payment};

/// Bill for a single payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillExport {
    /// Export metadata
    pub metadata: BillMetadata,
    /// One line per payment item
    pub lines: Vec<BillLine>,
    /// Balance due
    pub total: f64,
}

/// Bill metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillMetadata {
    pub payment_id: String,
    pub payment_date: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_contact: String,
    /// Export timestamp
    pub exported_at: String,
}

/// Single line on a bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillLine {
    pub payment_details_id: String,
    pub medicine_id: String,
    /// Medicine name, or the ID if the medicine is no longer stocked
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl BillExport {
    /// Build a bill from a payment, its patient, and the medicines it names.
    pub fn from_payment(payment: &Payment, patient: &Patient, medicines: &[Medicine]) -> Self {
        let names: HashMap<&str, &str> = medicines
            .iter()
            .map(|m| (m.medicine_id.as_str(), m.name.as_str()))
            .collect();

        let lines = payment
            .items
            .iter()
            .map(|item| BillLine {
                payment_details_id: item.payment_details_id.clone(),
                medicine_id: item.medicine_id.clone(),
                name: names
                    .get(item.medicine_id.as_str())
                    .map_or_else(|| item.medicine_id.clone(), |name| name.to_string()),
                quantity: item.quantity,
                unit_price: item.unit_price,
                total_price: item.total_price,
            })
            .collect();

        Self {
            metadata: BillMetadata {
                payment_id: payment.payment_id.clone(),
                payment_date: payment.payment_date.clone(),
                patient_id: patient.patient_id.clone(),
                patient_name: patient.name.clone(),
                patient_contact: patient.contact_number.clone(),
                exported_at: chrono::Utc::now().to_rfc3339(),
            },
            lines,
            total: payment.total(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        self.push_csv_rows(&mut csv);
        csv
    }

    fn push_csv_rows(&self, csv: &mut String) {
        for line in &self.lines {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{:.2},{:.2}\n",
                escape_csv(&self.metadata.payment_id),
                escape_csv(&self.metadata.payment_date),
                escape_csv(&self.metadata.patient_id),
                escape_csv(&line.payment_details_id),
                escape_csv(&line.medicine_id),
                escape_csv(&line.name),
                line.quantity,
                line.unit_price,
                line.total_price,
            ));
        }
    }
}

const CSV_HEADER: &str =
    "payment_id,payment_date,patient_id,payment_details_id,medicine_id,medicine,quantity,unit_price,total_price\n";

/// Bills for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillBatch {
    /// Export timestamp
    pub exported_at: String,
    pub bills: Vec<BillExport>,
    /// Sum of all bill totals
    pub total: f64,
}

impl BillBatch {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format, one row per line across all bills.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        for bill in &self.bills {
            bill.push_csv_rows(&mut csv);
        }
        csv
    }
}

/// Reads payments and the records they refer to, and renders bills.
pub struct BillExporter<'a> {
    db: &'a Database,
}

impl<'a> BillExporter<'a> {
    /// Create a new bill exporter.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Bill for one payment.
    pub fn export_payment(&self, payment_id: &str) -> ExportResult<BillExport> {
        let payment = self
            .db
            .get_payment(payment_id)?
            .ok_or_else(|| ExportError::NotFound(format!("payment {}", payment_id)))?;
        self.export(&payment)
    }

    /// Bills for payments dated between `from` and `to` inclusive (YYYY-MM-DD).
    pub fn export_between(&self, from: &str, to: &str) -> ExportResult<BillBatch> {
        let mut bills = Vec::new();
        for payment in self.db.list_payments()? {
            let date = payment.payment_date.as_str();
            if date >= from && date <= to {
                bills.push(self.export(&payment)?);
            }
        }

        let total = bills.iter().map(|bill| bill.total).sum();
        tracing::debug!(from, to, bills = bills.len(), "exported bill batch");
        Ok(BillBatch {
            exported_at: chrono::Utc::now().to_rfc3339(),
            bills,
            total,
        })
    }

    fn export(&self, payment: &Payment) -> ExportResult<BillExport> {
        let patient = self
            .db
            .get_patient(&payment.patient_id)?
            .ok_or_else(|| ExportError::NotFound(format!("patient {}", payment.patient_id)))?;

        let mut medicines = Vec::new();
        for item in &payment.items {
            if let Some(medicine) = self.db.get_medicine(&item.medicine_id)? {
                medicines.push(medicine);
            }
        }

        Ok(BillExport::from_payment(payment, &patient, &medicines))
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::PaymentCart;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let mut patient = Patient::new("P001".into(), "Dilani Jayasinghe".into(), 34);
        patient.contact_number = "0771234567".into();
        db.insert_patient(&patient).unwrap();
        db.insert_medicine(&Medicine::new("M001".into(), "Amoxicillin 500mg".into(), 12.5, 100))
            .unwrap();
        db.insert_medicine(&Medicine::new("M002".into(), "Paracetamol, 500mg".into(), 2.0, 500))
            .unwrap();
        db
    }

    fn record_payment(db: &Database, payment_id: &str, date: &str) {
        let mut cart = PaymentCart::new();
        cart.add(&db.get_medicine("M001").unwrap().unwrap(), 2).unwrap();
        cart.add(&db.get_medicine("M002").unwrap().unwrap(), 10).unwrap();
        let payment = cart
            .into_payment(payment_id.into(), date.into(), "P001".into())
            .unwrap();
        db.insert_payment(&payment).unwrap();
    }

    #[test]
    fn test_bill_from_payment() {
        let db = setup_db();
        record_payment(&db, "PI001", "2025-04-01");

        let bill = BillExporter::new(&db).export_payment("PI001").unwrap();
        assert_eq!(bill.metadata.patient_name, "Dilani Jayasinghe");
        assert_eq!(bill.metadata.patient_contact, "0771234567");
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.lines[0].name, "Amoxicillin 500mg");
        assert_eq!(bill.lines[1].payment_details_id, "PD-PI001-2");
        assert_eq!(bill.total, 45.0);
    }

    #[test]
    fn test_bill_json() {
        let db = setup_db();
        record_payment(&db, "PI001", "2025-04-01");

        let json = BillExporter::new(&db)
            .export_payment("PI001")
            .unwrap()
            .to_json()
            .unwrap();
        assert!(json.contains("PD-PI001-1"));
        assert!(json.contains("Amoxicillin 500mg"));
    }

    #[test]
    fn test_bill_csv() {
        let db = setup_db();
        record_payment(&db, "PI001", "2025-04-01");

        let csv = BillExporter::new(&db).export_payment("PI001").unwrap().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3); // Header + 2 items
        assert!(lines[0].starts_with("payment_id,"));
        assert!(lines[1].ends_with(",2,12.50,25.00"));
        assert!(lines[2].contains("\"Paracetamol, 500mg\""));
    }

    #[test]
    fn test_missing_payment() {
        let db = setup_db();
        let result = BillExporter::new(&db).export_payment("PI404");
        assert!(matches!(result, Err(ExportError::NotFound(_))));
    }

    #[test]
    fn test_unstocked_medicine_named_by_id() {
        let patient = Patient::new("P001".into(), "Dilani".into(), 34);
        let payment = Payment {
            payment_id: "PI001".into(),
            payment_date: "2025-04-01".into(),
            patient_id: "P001".into(),
            items: vec![crate::models::PaymentItem {
                payment_details_id: "PD-PI001-1".into(),
                medicine_id: "M009".into(),
                quantity: 1,
                unit_price: 3.0,
                total_price: 3.0,
            }],
        };
        let bill = BillExport::from_payment(&payment, &patient, &[]);
        assert_eq!(bill.lines[0].name, "M009");
    }

    #[test]
    fn test_export_between() {
        let db = setup_db();
        record_payment(&db, "PI001", "2025-03-31");
        record_payment(&db, "PI002", "2025-04-01");
        record_payment(&db, "PI003", "2025-04-30");
        record_payment(&db, "PI004", "2025-05-01");

        let batch = BillExporter::new(&db)
            .export_between("2025-04-01", "2025-04-30")
            .unwrap();
        assert_eq!(batch.bills.len(), 2);
        assert_eq!(batch.total, 90.0);
        assert_eq!(batch.to_csv().lines().count(), 5); // Header + 2 bills × 2 items
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
