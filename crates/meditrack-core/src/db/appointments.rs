//! Appointment database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{decode, write_error, Database, DbError, DbResult};
use crate::ids::EntityKind;
use crate::models::{Appointment, AppointmentStatus};

const COLUMNS: &str = r#"
    appointment_code, appointment_date, appointment_time, patient_id,
    doctor_id, appointment_type, status
"#;

impl Database {
    /// Insert a new appointment.
    pub fn insert_appointment(&self, appt: &Appointment) -> DbResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO appointments (
                    appointment_code, appointment_date, appointment_time, patient_id,
                    doctor_id, appointment_type, status
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    appt.appointment_code,
                    appt.appointment_date,
                    appt.appointment_time,
                    appt.patient_id,
                    appt.doctor_id,
                    appt.appointment_type.as_str(),
                    appt.status.as_str(),
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Appointment, &appt.appointment_code))?;
        tracing::info!(
            appointment_code = %appt.appointment_code,
            patient_id = %appt.patient_id,
            "booked appointment"
        );
        Ok(())
    }

    /// Update an existing appointment.
    pub fn update_appointment(&self, appt: &Appointment) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                r#"
                UPDATE appointments SET
                    appointment_date = ?2,
                    appointment_time = ?3,
                    patient_id = ?4,
                    doctor_id = ?5,
                    appointment_type = ?6,
                    status = ?7,
                    updated_at = datetime('now')
                WHERE appointment_code = ?1
                "#,
                params![
                    appt.appointment_code,
                    appt.appointment_date,
                    appt.appointment_time,
                    appt.patient_id,
                    appt.doctor_id,
                    appt.appointment_type.as_str(),
                    appt.status.as_str(),
                ],
            )
            .map_err(|e| write_error(e, EntityKind::Appointment, &appt.appointment_code))?;
        Ok(rows_affected > 0)
    }

    /// Change only the status of an appointment.
    pub fn set_appointment_status(
        &self,
        appointment_code: &str,
        status: AppointmentStatus,
    ) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE appointments SET status = ?2, updated_at = datetime('now')
            WHERE appointment_code = ?1
            "#,
            params![appointment_code, status.as_str()],
        )?;
        if rows_affected > 0 {
            tracing::info!(appointment_code, %status, "appointment status changed");
        }
        Ok(rows_affected > 0)
    }

    /// Get an appointment by code.
    pub fn get_appointment(&self, appointment_code: &str) -> DbResult<Option<Appointment>> {
        let sql = format!(
            "SELECT {} FROM appointments WHERE appointment_code = ?",
            COLUMNS
        );
        self.conn
            .query_row(&sql, [appointment_code], AppointmentRow::from_row)
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all appointments.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let sql = format!(
            "SELECT {} FROM appointments ORDER BY appointment_code",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], AppointmentRow::from_row)?;

        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(row?.try_into()?);
        }
        Ok(appointments)
    }

    /// Appointments on a date (YYYY-MM-DD), earliest first.
    pub fn list_appointments_on(&self, date: &str) -> DbResult<Vec<Appointment>> {
        let sql = format!(
            "SELECT {} FROM appointments WHERE appointment_date = ? ORDER BY appointment_time",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([date], AppointmentRow::from_row)?;

        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(row?.try_into()?);
        }
        Ok(appointments)
    }

    /// Delete an appointment.
    pub fn delete_appointment(&self, appointment_code: &str) -> DbResult<bool> {
        self.delete(EntityKind::Appointment, appointment_code)
    }
}

struct AppointmentRow {
    appointment_code: String,
    appointment_date: String,
    appointment_time: String,
    patient_id: String,
    doctor_id: String,
    appointment_type: String,
    status: String,
}

impl AppointmentRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            appointment_code: row.get(0)?,
            appointment_date: row.get(1)?,
            appointment_time: row.get(2)?,
            patient_id: row.get(3)?,
            doctor_id: row.get(4)?,
            appointment_type: row.get(5)?,
            status: row.get(6)?,
        })
    }
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DbError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        Ok(Appointment {
            appointment_code: row.appointment_code,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            patient_id: row.patient_id,
            doctor_id: row.doctor_id,
            appointment_type: decode("appointment_type", row.appointment_type)?,
            status: decode("status", row.status)?,
        })
    }
}
