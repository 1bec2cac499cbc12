//! Dashboard aggregates.

use serde::{Deserialize, Serialize};

use super::{Database, DbResult};
use crate::ids::EntityKind;

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub patient_count: u64,
    pub doctor_count: u64,
    pub medicine_count: u64,
    pub appointment_count: u64,
    /// Sum of every payment item total
    pub total_income: f64,
}

/// Income for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    /// `YYYY-MM`
    pub month: String,
    pub income: f64,
}

impl Database {
    /// Counts and total income across the store.
    pub fn dashboard_summary(&self) -> DbResult<DashboardSummary> {
        let total_income: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(total_price), 0.0) FROM payment_items",
            [],
            |row| row.get(0),
        )?;

        Ok(DashboardSummary {
            patient_count: self.count(EntityKind::Patient)?,
            doctor_count: self.count(EntityKind::Doctor)?,
            medicine_count: self.count(EntityKind::Medicine)?,
            appointment_count: self.count(EntityKind::Appointment)?,
            total_income,
        })
    }

    /// Income grouped by the month of the payment date, oldest month first.
    pub fn monthly_income(&self) -> DbResult<Vec<MonthlyIncome>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT substr(p.payment_date, 1, 7) AS month, SUM(i.total_price)
            FROM payments p
            JOIN payment_items i ON i.payment_id = p.payment_id
            GROUP BY month
            ORDER BY month
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MonthlyIncome {
                month: row.get(0)?,
                income: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
