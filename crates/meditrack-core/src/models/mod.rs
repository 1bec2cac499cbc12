//! Domain models for the clinic administration records.

#[macro_use]
mod macros;

mod appointment;
mod department;
mod medical_report;
mod medicine;
mod patient;
mod payment;
mod staff;

pub use appointment::*;
pub use department::*;
pub use medical_report::*;
pub use medicine::*;
pub use patient::*;
pub use payment::*;
pub use staff::*;

use serde::{Deserialize, Serialize};

/// Gender options offered on the staff and patient forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

labeled_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), *gender);
        }
        assert!("male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_serialized_as_label() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"Female\"");
        let back: Gender = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(back, Gender::Other);
    }
}
