//! Appointment models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ids::{Entity, EntityKind};
use crate::validation::{validate_date, validate_required, validate_time, ValidationResult};

/// Reason for the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AppointmentType {
    GeneralCheckup,
    FollowUp,
    Emergency,
    Consultation,
    Vaccination,
    DiagnosticTest,
    PhysicalTherapy,
    MentalHealthCounseling,
    PrenatalCheckup,
    Other,
}

labeled_enum!(AppointmentType {
    GeneralCheckup => "General Checkup",
    FollowUp => "Follow-up",
    Emergency => "Emergency",
    Consultation => "Consultation",
    Vaccination => "Vaccination",
    DiagnosticTest => "Diagnostic Test",
    PhysicalTherapy => "Physical Therapy",
    MentalHealthCounseling => "Mental Health Counseling",
    PrenatalCheckup => "Prenatal Checkup",
    Other => "Other",
});

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

labeled_enum!(AppointmentStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

/// A scheduled visit between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Sequential code (e.g., "AC012")
    pub appointment_code: String,
    /// Date (YYYY-MM-DD)
    pub appointment_date: String,
    /// Time of day (HH:MM or HH:MM:SS)
    pub appointment_time: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Create a scheduled appointment.
    pub fn new(
        appointment_code: String,
        patient_id: String,
        doctor_id: String,
        appointment_date: String,
        appointment_time: String,
    ) -> Self {
        Self {
            appointment_code,
            appointment_date,
            appointment_time,
            patient_id,
            doctor_id,
            appointment_type: AppointmentType::GeneralCheckup,
            status: AppointmentStatus::Scheduled,
        }
    }

    /// Every field is required; date and time must parse.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("appointment_code", &self.appointment_code)?;
        validate_date(&self.appointment_date)?;
        validate_time(&self.appointment_time)?;
        validate_required("patient_id", &self.patient_id)?;
        validate_required("doctor_id", &self.doctor_id)?;
        Ok(())
    }

    /// Combined start time, for calendar views.
    pub fn starts_at(&self) -> ValidationResult<NaiveDateTime> {
        let date = validate_date(&self.appointment_date)?;
        let time = validate_time(&self.appointment_time)?;
        Ok(date.and_time(time))
    }
}

impl Entity for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> &str {
        &self.appointment_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn make_appointment() -> Appointment {
        Appointment::new(
            "AC001".into(),
            "P001".into(),
            "DOC001".into(),
            "2025-03-14".into(),
            "10:30".into(),
        )
    }

    #[test]
    fn test_defaults() {
        let appt = make_appointment();
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.appointment_type, AppointmentType::GeneralCheckup);
        assert!(appt.validate().is_ok());
    }

    #[test]
    fn test_starts_at() {
        let appt = make_appointment();
        let start = appt.starts_at().unwrap();
        assert_eq!(start.to_string(), "2025-03-14 10:30:00");
    }

    #[test]
    fn test_bad_time() {
        let mut appt = make_appointment();
        appt.appointment_time = "half past ten".into();
        assert!(matches!(appt.validate(), Err(ValidationError::Time(_))));
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(AppointmentType::FollowUp.to_string(), "Follow-up");
        // The vaccination option carried a trailing space in the form
        assert_eq!(
            "Vaccination ".parse::<AppointmentType>().unwrap(),
            AppointmentType::Vaccination
        );
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"Cancelled\"");
    }
}
