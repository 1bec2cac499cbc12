//! Payment database operations.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{child_write_error, write_error, Database, DbResult};
use crate::ids::EntityKind;
use crate::models::{Payment, PaymentItem};

const COLUMNS: &str = "payment_id, payment_date, patient_id";

fn payment_from_row(row: &Row<'_>) -> rusqlite::Result<Payment> {
    Ok(Payment {
        payment_id: row.get(0)?,
        payment_date: row.get(1)?,
        patient_id: row.get(2)?,
        items: Vec::new(),
    })
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<PaymentItem> {
    Ok(PaymentItem {
        payment_details_id: row.get(0)?,
        medicine_id: row.get(1)?,
        quantity: row.get(2)?,
        unit_price: row.get(3)?,
        total_price: row.get(4)?,
    })
}

fn write_items(conn: &Connection, payment: &Payment) -> DbResult<()> {
    let mut stmt = conn.prepare(
        r#"
        INSERT INTO payment_items (
            payment_details_id, payment_id, line_no, medicine_id,
            quantity, unit_price, total_price
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )?;
    for (i, item) in payment.items.iter().enumerate() {
        stmt.execute(params![
            item.payment_details_id,
            payment.payment_id,
            (i + 1) as i64,
            item.medicine_id,
            item.quantity,
            item.unit_price,
            item.total_price,
        ])
        .map_err(|e| child_write_error(e, "payment item", &item.payment_details_id))?;
    }
    Ok(())
}

impl Database {
    /// Record a payment together with its items.
    pub fn insert_payment(&self, payment: &Payment) -> DbResult<()> {
        let id = &payment.payment_id;
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO payments (payment_id, payment_date, patient_id) VALUES (?1, ?2, ?3)",
            params![payment.payment_id, payment.payment_date, payment.patient_id],
        )
        .map_err(|e| write_error(e, EntityKind::Payment, id))?;
        write_items(&tx, payment)?;
        tx.commit()?;

        tracing::info!(
            payment_id = %id,
            items = payment.items.len(),
            total = payment.total(),
            "recorded payment"
        );
        Ok(())
    }

    /// Update a payment, replacing its items.
    pub fn update_payment(&self, payment: &Payment) -> DbResult<bool> {
        let id = &payment.payment_id;
        let tx = self.conn.unchecked_transaction()?;
        let rows_affected = tx
            .execute(
                r#"
                UPDATE payments SET
                    payment_date = ?2,
                    patient_id = ?3,
                    updated_at = datetime('now')
                WHERE payment_id = ?1
                "#,
                params![payment.payment_id, payment.payment_date, payment.patient_id],
            )
            .map_err(|e| write_error(e, EntityKind::Payment, id))?;
        if rows_affected == 0 {
            return Ok(false);
        }

        tx.execute("DELETE FROM payment_items WHERE payment_id = ?", [id])?;
        write_items(&tx, payment)?;
        tx.commit()?;
        Ok(true)
    }

    /// Get a payment with its items in line order.
    pub fn get_payment(&self, payment_id: &str) -> DbResult<Option<Payment>> {
        let sql = format!("SELECT {} FROM payments WHERE payment_id = ?", COLUMNS);
        let payment = self
            .conn
            .query_row(&sql, [payment_id], payment_from_row)
            .optional()?;

        match payment {
            Some(mut payment) => {
                payment.items = self.load_payment_items(payment_id)?;
                Ok(Some(payment))
            }
            None => Ok(None),
        }
    }

    /// List all payments with their items.
    pub fn list_payments(&self) -> DbResult<Vec<Payment>> {
        let sql = format!("SELECT {} FROM payments ORDER BY payment_id", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut payments = stmt
            .query_map([], payment_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for payment in &mut payments {
            payment.items = self.load_payment_items(&payment.payment_id)?;
        }
        Ok(payments)
    }

    /// Delete a payment and its items.
    pub fn delete_payment(&self, payment_id: &str) -> DbResult<bool> {
        self.delete(EntityKind::Payment, payment_id)
    }

    fn load_payment_items(&self, payment_id: &str) -> DbResult<Vec<PaymentItem>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT payment_details_id, medicine_id, quantity, unit_price, total_price
            FROM payment_items
            WHERE payment_id = ?
            ORDER BY line_no
            "#,
        )?;
        let rows = stmt.query_map([payment_id], item_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
