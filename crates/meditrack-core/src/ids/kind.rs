//! Record kinds and their identifier schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::IdScheme;

/// The eight kinds of record managed by the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Department,
    Doctor,
    Nurse,
    Patient,
    Appointment,
    Medicine,
    MedicalReport,
    Payment,
}

impl EntityKind {
    /// All kinds, in the order the admin screens list them.
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Department,
        EntityKind::Doctor,
        EntityKind::Nurse,
        EntityKind::Patient,
        EntityKind::Appointment,
        EntityKind::Medicine,
        EntityKind::MedicalReport,
        EntityKind::Payment,
    ];

    /// Identifier scheme for this kind.
    pub const fn scheme(self) -> IdScheme {
        match self {
            EntityKind::Department => IdScheme::new("D", 3),
            EntityKind::Doctor => IdScheme::new("DOC", 3),
            EntityKind::Nurse => IdScheme::new("N", 3),
            EntityKind::Patient => IdScheme::new("P", 3),
            EntityKind::Appointment => IdScheme::new("AC", 3),
            EntityKind::Medicine => IdScheme::new("M", 3),
            EntityKind::MedicalReport => IdScheme::new("MR", 3),
            EntityKind::Payment => IdScheme::new("PI", 3),
        }
    }

    /// Name of the identifier field on records of this kind.
    pub const fn id_field(self) -> &'static str {
        match self {
            EntityKind::Department => "department_id",
            EntityKind::Doctor => "doctor_id",
            EntityKind::Nurse => "nurse_id",
            EntityKind::Patient => "patient_id",
            EntityKind::Appointment => "appointment_code",
            EntityKind::Medicine => "medicine_id",
            EntityKind::MedicalReport => "medical_report_id",
            EntityKind::Payment => "payment_id",
        }
    }

    /// Backing table name.
    pub const fn table(self) -> &'static str {
        match self {
            EntityKind::Department => "departments",
            EntityKind::Doctor => "doctors",
            EntityKind::Nurse => "nurses",
            EntityKind::Patient => "patients",
            EntityKind::Appointment => "appointments",
            EntityKind::Medicine => "medicines",
            EntityKind::MedicalReport => "medical_reports",
            EntityKind::Payment => "payments",
        }
    }

    /// Stable lowercase name, as accepted by [`EntityKind::from_str`].
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Department => "department",
            EntityKind::Doctor => "doctor",
            EntityKind::Nurse => "nurse",
            EntityKind::Patient => "patient",
            EntityKind::Appointment => "appointment",
            EntityKind::Medicine => "medicine",
            EntityKind::MedicalReport => "medical-report",
            EntityKind::Payment => "payment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known record kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "department" | "departments" => Ok(EntityKind::Department),
            "doctor" | "doctors" => Ok(EntityKind::Doctor),
            "nurse" | "nurses" => Ok(EntityKind::Nurse),
            "patient" | "patients" => Ok(EntityKind::Patient),
            "appointment" | "appointments" => Ok(EntityKind::Appointment),
            "medicine" | "medicines" => Ok(EntityKind::Medicine),
            "medical-report" | "medical-reports" | "report" => Ok(EntityKind::MedicalReport),
            "payment" | "payments" => Ok(EntityKind::Payment),
            _ => Err(UnknownEntityKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_table() {
        let prefixes: Vec<&str> = EntityKind::ALL.iter().map(|k| k.scheme().prefix).collect();
        assert_eq!(prefixes, vec!["D", "DOC", "N", "P", "AC", "M", "MR", "PI"]);
        assert!(EntityKind::ALL.iter().all(|k| k.scheme().width == 3));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("doctor".parse::<EntityKind>().unwrap(), EntityKind::Doctor);
        assert_eq!("Payments".parse::<EntityKind>().unwrap(), EntityKind::Payment);
        assert_eq!(
            "medical_report".parse::<EntityKind>().unwrap(),
            EntityKind::MedicalReport
        );
        assert!("ward".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
    }
}
