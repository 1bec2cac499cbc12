//! Field validation for record forms.
//!
//! Identifiers are not validated here: the allocator's suggestion is only a
//! default, and uniqueness is checked by the store on insert.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[a-zA-Z\d.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

static MOBILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+94|0)(7\d{8})$").expect("mobile pattern is valid"));

static DEPARTMENT_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+94|0)(7\d{8}|38\d{7})$").expect("department phone pattern is valid")
});

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{3,}$").expect("name pattern is valid"));

/// A field that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email address: {0}")]
    Email(String),

    #[error("Invalid phone number: {0}")]
    PhoneNumber(String),

    #[error("Invalid name: {0} (letters and spaces only, at least 3 characters)")]
    Name(String),

    #[error("Invalid location: {0} (at least 3 characters)")]
    Location(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    Date(String),

    #[error("Invalid time: {0} (expected HH:MM or HH:MM:SS)")]
    Time(String),

    #[error("Invalid {field}: {reason}")]
    Value { field: &'static str, reason: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Require a non-blank value.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !EMAIL.is_match(email) {
        return Err(ValidationError::Email(email.to_string()));
    }
    Ok(())
}

/// Sri Lankan mobile number, local (`07…`) or international (`+947…`).
pub fn validate_mobile_number(phone: &str) -> ValidationResult<()> {
    if !MOBILE_NUMBER.is_match(phone) {
        return Err(ValidationError::PhoneNumber(phone.to_string()));
    }
    Ok(())
}

/// Department phones may also be `038` landlines.
pub fn validate_department_phone(phone: &str) -> ValidationResult<()> {
    if !DEPARTMENT_PHONE.is_match(phone) {
        return Err(ValidationError::PhoneNumber(phone.to_string()));
    }
    Ok(())
}

/// Department and patient names: letters and spaces, at least 3 characters.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if !NAME.is_match(name) {
        return Err(ValidationError::Name(name.to_string()));
    }
    Ok(())
}

pub fn validate_location(location: &str) -> ValidationResult<()> {
    if location.trim().chars().count() < 3 {
        return Err(ValidationError::Location(location.to_string()));
    }
    Ok(())
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn validate_date(date: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::Date(date.to_string()))
}

/// Parse a time of day, with or without seconds.
pub fn validate_time(time: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| ValidationError::Time(time.to_string()))
}
