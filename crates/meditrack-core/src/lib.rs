//! MediTrack Core Library
//!
//! Record keeping for a hospital administration desk: departments, staff,
//! patients, appointments, medicines, medical reports and payments.
//!
//! # Architecture
//!
//! ```text
//!   Database::list_ids(kind) ──► next_id(ids, prefix, width) ──► IdField
//!            ▲                                                     │
//!            │                                            user may edit
//!            │                                                     │
//!            └──────── insert_*  ◄──── take_for_submit() ◄─────────┘
//!                  (PRIMARY KEY rejects
//!                   duplicate IDs)
//! ```
//!
//! # Core Principle
//!
//! **Suggested IDs are advisory.** The allocator reads a snapshot and never
//! reserves anything; the database is the only place uniqueness is enforced.
//!
//! # Modules
//!
//! - [`ids`]: Identifier schemes and the sequential allocator
//! - [`form`]: Identifier field state for creation forms
//! - [`models`]: Domain types (Department, Doctor, Patient, Payment, etc.)
//! - [`validation`]: Field rules applied by the entry forms
//! - [`db`]: SQLite store and dashboard aggregates
//! - [`cart`]: Payment assembly from stocked medicines
//! - [`export`]: Bill export

pub mod cart;
pub mod db;
pub mod export;
pub mod form;
pub mod ids;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use cart::{CartError, PaymentCart};
pub use db::{DashboardSummary, Database, DbError, MonthlyIncome};
pub use form::IdField;
pub use ids::{next_id, next_id_for, Entity, EntityKind, IdScheme};
pub use models::{
    Appointment, Department, Doctor, Gender, MedicalReport, Medicine, Nurse, Patient, Payment,
    PaymentItem, TestResult,
};
pub use validation::ValidationError;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MediTrackError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Duplicate ID: {0}")]
    DuplicateId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for MediTrackError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::Duplicate { id, .. } => MediTrackError::DuplicateId(id),
            other => MediTrackError::DatabaseError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for MediTrackError {
    fn from(e: serde_json::Error) -> Self {
        MediTrackError::SerializationError(e.to_string())
    }
}

impl From<validation::ValidationError> for MediTrackError {
    fn from(e: validation::ValidationError) -> Self {
        MediTrackError::InvalidInput(e.to_string())
    }
}

impl From<ids::UnknownEntityKind> for MediTrackError {
    fn from(e: ids::UnknownEntityKind) -> Self {
        MediTrackError::InvalidInput(e.to_string())
    }
}

impl From<cart::CartError> for MediTrackError {
    fn from(e: cart::CartError) -> Self {
        MediTrackError::InvalidInput(e.to_string())
    }
}

impl From<export::ExportError> for MediTrackError {
    fn from(e: export::ExportError) -> Self {
        match e {
            export::ExportError::Database(e) => e.into(),
            export::ExportError::NotFound(what) => MediTrackError::NotFound(what),
            export::ExportError::Serialization(e) => e.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for MediTrackError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MediTrackError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<MediTrackCore>, MediTrackError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(MediTrackCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<MediTrackCore>, MediTrackError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(MediTrackCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MediTrackCore {
    db: Arc<Mutex<Database>>,
}

#[uniffi::export]
impl MediTrackCore {
    // =========================================================================
    // Identifier Operations
    // =========================================================================

    /// Suggest the next ID for a record kind (e.g., "doctor" → "DOC011").
    pub fn suggest_next_id(&self, kind: String) -> Result<String, MediTrackError> {
        let kind: EntityKind = kind.parse()?;
        let db = self.db.lock()?;
        Ok(db.suggest_next_id(kind)?)
    }

    /// List the IDs currently stored for a record kind.
    pub fn list_ids(&self, kind: String) -> Result<Vec<String>, MediTrackError> {
        let kind: EntityKind = kind.parse()?;
        let db = self.db.lock()?;
        Ok(db.list_ids(kind)?)
    }

    /// Delete a record of any kind. Returns whether it existed.
    pub fn delete_entity(&self, kind: String, id: String) -> Result<bool, MediTrackError> {
        let kind: EntityKind = kind.parse()?;
        let db = self.db.lock()?;
        Ok(db.delete(kind, &id)?)
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Create a department.
    pub fn create_department(
        &self,
        department: FfiDepartment,
    ) -> Result<FfiDepartment, MediTrackError> {
        let department: Department = department.into();
        department.validate()?;
        let db = self.db.lock()?;
        db.insert_department(&department)?;
        Ok(department.into())
    }

    /// Create a patient.
    pub fn create_patient(&self, patient: FfiPatient) -> Result<FfiPatient, MediTrackError> {
        let patient = Patient::try_from(patient)?;
        patient.validate()?;
        let db = self.db.lock()?;
        db.insert_patient(&patient)?;
        Ok(patient.into())
    }

    /// Create a doctor.
    pub fn create_doctor(&self, doctor: FfiDoctor) -> Result<FfiDoctor, MediTrackError> {
        let doctor = Doctor::try_from(doctor)?;
        doctor.validate()?;
        let db = self.db.lock()?;
        db.insert_doctor(&doctor)?;
        Ok(doctor.into())
    }

    /// Create a nurse.
    pub fn create_nurse(&self, nurse: FfiNurse) -> Result<FfiNurse, MediTrackError> {
        let nurse = Nurse::try_from(nurse)?;
        nurse.validate()?;
        let db = self.db.lock()?;
        db.insert_nurse(&nurse)?;
        Ok(nurse.into())
    }

    /// Book an appointment.
    pub fn create_appointment(
        &self,
        appointment: FfiAppointment,
    ) -> Result<FfiAppointment, MediTrackError> {
        let appointment = Appointment::try_from(appointment)?;
        appointment.validate()?;
        let db = self.db.lock()?;
        db.insert_appointment(&appointment)?;
        Ok(appointment.into())
    }

    /// Add a medicine to the inventory.
    pub fn create_medicine(&self, medicine: FfiMedicine) -> Result<FfiMedicine, MediTrackError> {
        let medicine = Medicine::try_from(medicine)?;
        medicine.validate()?;
        let db = self.db.lock()?;
        db.insert_medicine(&medicine)?;
        Ok(medicine.into())
    }

    /// Issue a medical report with its test results.
    pub fn create_medical_report(
        &self,
        report: FfiMedicalReport,
    ) -> Result<FfiMedicalReport, MediTrackError> {
        let report: MedicalReport = report.into();
        report.validate()?;
        let db = self.db.lock()?;
        db.insert_medical_report(&report)?;
        Ok(report.into())
    }

    /// Record a payment for the given medicines.
    ///
    /// Lines are priced from the stored medicines and checked against
    /// stock the same way the payment screen's cart is.
    pub fn record_payment(
        &self,
        payment_id: String,
        payment_date: String,
        patient_id: String,
        lines: Vec<FfiCartLine>,
    ) -> Result<FfiPayment, MediTrackError> {
        let db = self.db.lock()?;
        let mut cart = PaymentCart::new();
        for line in &lines {
            let medicine = db.get_medicine(&line.medicine_id)?.ok_or_else(|| {
                MediTrackError::NotFound(format!("medicine {}", line.medicine_id))
            })?;
            cart.add(&medicine, line.quantity)?;
        }

        let payment = cart.into_payment(payment_id, payment_date, patient_id)?;
        payment.validate()?;
        db.insert_payment(&payment)?;
        Ok(payment.into())
    }

    // =========================================================================
    // Update Operations (return whether the record existed)
    // =========================================================================

    pub fn update_department(&self, department: FfiDepartment) -> Result<bool, MediTrackError> {
        let department: Department = department.into();
        department.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_department(&department)?)
    }

    pub fn update_patient(&self, patient: FfiPatient) -> Result<bool, MediTrackError> {
        let patient = Patient::try_from(patient)?;
        patient.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_patient(&patient)?)
    }

    pub fn update_doctor(&self, doctor: FfiDoctor) -> Result<bool, MediTrackError> {
        let doctor = Doctor::try_from(doctor)?;
        doctor.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_doctor(&doctor)?)
    }

    pub fn update_nurse(&self, nurse: FfiNurse) -> Result<bool, MediTrackError> {
        let nurse = Nurse::try_from(nurse)?;
        nurse.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_nurse(&nurse)?)
    }

    pub fn update_appointment(&self, appointment: FfiAppointment) -> Result<bool, MediTrackError> {
        let appointment = Appointment::try_from(appointment)?;
        appointment.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_appointment(&appointment)?)
    }

    pub fn update_medicine(&self, medicine: FfiMedicine) -> Result<bool, MediTrackError> {
        let medicine = Medicine::try_from(medicine)?;
        medicine.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_medicine(&medicine)?)
    }

    /// Update a report. Its test results are replaced wholesale.
    pub fn update_medical_report(&self, report: FfiMedicalReport) -> Result<bool, MediTrackError> {
        let report: MedicalReport = report.into();
        report.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_medical_report(&report)?)
    }

    /// Update a payment. Its items are replaced wholesale.
    pub fn update_payment(&self, payment: FfiPayment) -> Result<bool, MediTrackError> {
        let payment: Payment = payment.into();
        payment.validate()?;
        let db = self.db.lock()?;
        Ok(db.update_payment(&payment)?)
    }

    // =========================================================================
    // Query Operations
    // =========================================================================

    /// Search patients by name.
    pub fn search_patients(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiPatient>, MediTrackError> {
        let db = self.db.lock()?;
        let patients = db.search_patients(&query, limit as usize)?;
        Ok(patients.into_iter().map(|p| p.into()).collect())
    }

    // =========================================================================
    // Dashboard Operations
    // =========================================================================

    /// Record counts and total income.
    pub fn dashboard_summary(&self) -> Result<FfiDashboardSummary, MediTrackError> {
        let db = self.db.lock()?;
        Ok(db.dashboard_summary()?.into())
    }

    /// Income per month, oldest first.
    pub fn monthly_income(&self) -> Result<Vec<FfiMonthlyIncome>, MediTrackError> {
        let db = self.db.lock()?;
        let months = db.monthly_income()?;
        Ok(months.into_iter().map(|m| m.into()).collect())
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export the bill for a payment as JSON.
    pub fn export_bill_json(&self, payment_id: String) -> Result<String, MediTrackError> {
        let db = self.db.lock()?;
        let exporter = export::BillExporter::new(&db);
        let bill = exporter.export_payment(&payment_id)?;
        Ok(bill.to_json()?)
    }

    /// Export the bill for a payment as CSV.
    pub fn export_bill_csv(&self, payment_id: String) -> Result<String, MediTrackError> {
        let db = self.db.lock()?;
        let exporter = export::BillExporter::new(&db);
        Ok(exporter.export_payment(&payment_id)?.to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe department.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDepartment {
    pub department_id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub head_of_department: String,
    pub phone_number: String,
}

impl From<Department> for FfiDepartment {
    fn from(dept: Department) -> Self {
        Self {
            department_id: dept.department_id,
            name: dept.name,
            email: dept.email,
            location: dept.location,
            head_of_department: dept.head_of_department,
            phone_number: dept.phone_number,
        }
    }
}

impl From<FfiDepartment> for Department {
    fn from(dept: FfiDepartment) -> Self {
        Department {
            department_id: dept.department_id,
            name: dept.name,
            email: dept.email,
            location: dept.location,
            head_of_department: dept.head_of_department,
            phone_number: dept.phone_number,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub postal_code: String,
    /// "Male", "Female" or "Other"
    pub gender: String,
    pub contact_number: String,
    /// "A+", "O-", ...
    pub blood_type: Option<String>,
    pub chronic_diseases: Option<String>,
    pub last_visit_date: Option<String>,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            patient_id: patient.patient_id,
            name: patient.name,
            age: patient.age,
            address_line1: patient.address_line1,
            address_line2: patient.address_line2,
            postal_code: patient.postal_code,
            gender: patient.gender.to_string(),
            contact_number: patient.contact_number,
            blood_type: patient.blood_type.map(|b| b.to_string()),
            chronic_diseases: patient.chronic_diseases,
            last_visit_date: patient.last_visit_date,
        }
    }
}

impl TryFrom<FfiPatient> for Patient {
    type Error = MediTrackError;

    fn try_from(patient: FfiPatient) -> Result<Self, Self::Error> {
        Ok(Patient {
            patient_id: patient.patient_id,
            name: patient.name,
            age: patient.age,
            address_line1: patient.address_line1,
            address_line2: patient.address_line2,
            postal_code: patient.postal_code,
            gender: patient.gender.parse().map_err(MediTrackError::InvalidInput)?,
            contact_number: patient.contact_number,
            blood_type: patient
                .blood_type
                .map(|b| b.parse())
                .transpose()
                .map_err(MediTrackError::InvalidInput)?,
            chronic_diseases: patient.chronic_diseases,
            last_visit_date: patient.last_visit_date,
        })
    }
}

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub doctor_id: String,
    pub name: String,
    pub specialty: String,
    /// "Male", "Female" or "Other"
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub department_id: String,
}

impl From<Doctor> for FfiDoctor {
    fn from(doctor: Doctor) -> Self {
        Self {
            doctor_id: doctor.doctor_id,
            name: doctor.name,
            specialty: doctor.specialty,
            gender: doctor.gender.to_string(),
            contact_number: doctor.contact_number,
            email: doctor.email,
            department_id: doctor.department_id,
        }
    }
}

impl TryFrom<FfiDoctor> for Doctor {
    type Error = MediTrackError;

    fn try_from(doctor: FfiDoctor) -> Result<Self, Self::Error> {
        Ok(Doctor {
            doctor_id: doctor.doctor_id,
            name: doctor.name,
            specialty: doctor.specialty,
            gender: doctor.gender.parse().map_err(MediTrackError::InvalidInput)?,
            contact_number: doctor.contact_number,
            email: doctor.email,
            department_id: doctor.department_id,
        })
    }
}

/// FFI-safe nurse.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNurse {
    pub nurse_id: String,
    pub name: String,
    /// "Male", "Female" or "Other"
    pub gender: String,
    pub contact_number: String,
    pub qualification: String,
    pub email: String,
    pub department_id: String,
}

impl From<Nurse> for FfiNurse {
    fn from(nurse: Nurse) -> Self {
        Self {
            nurse_id: nurse.nurse_id,
            name: nurse.name,
            gender: nurse.gender.to_string(),
            contact_number: nurse.contact_number,
            qualification: nurse.qualification,
            email: nurse.email,
            department_id: nurse.department_id,
        }
    }
}

impl TryFrom<FfiNurse> for Nurse {
    type Error = MediTrackError;

    fn try_from(nurse: FfiNurse) -> Result<Self, Self::Error> {
        Ok(Nurse {
            nurse_id: nurse.nurse_id,
            name: nurse.name,
            gender: nurse.gender.parse().map_err(MediTrackError::InvalidInput)?,
            contact_number: nurse.contact_number,
            qualification: nurse.qualification,
            email: nurse.email,
            department_id: nurse.department_id,
        })
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub appointment_code: String,
    /// YYYY-MM-DD
    pub appointment_date: String,
    /// HH:MM
    pub appointment_time: String,
    pub patient_id: String,
    pub doctor_id: String,
    /// "General Checkup", "Follow-up", ...
    pub appointment_type: String,
    /// "Scheduled", "Completed" or "Cancelled"
    pub status: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appt: Appointment) -> Self {
        Self {
            appointment_code: appt.appointment_code,
            appointment_date: appt.appointment_date,
            appointment_time: appt.appointment_time,
            patient_id: appt.patient_id,
            doctor_id: appt.doctor_id,
            appointment_type: appt.appointment_type.to_string(),
            status: appt.status.to_string(),
        }
    }
}

impl TryFrom<FfiAppointment> for Appointment {
    type Error = MediTrackError;

    fn try_from(appt: FfiAppointment) -> Result<Self, Self::Error> {
        Ok(Appointment {
            appointment_code: appt.appointment_code,
            appointment_date: appt.appointment_date,
            appointment_time: appt.appointment_time,
            patient_id: appt.patient_id,
            doctor_id: appt.doctor_id,
            appointment_type: appt
                .appointment_type
                .parse()
                .map_err(MediTrackError::InvalidInput)?,
            status: appt.status.parse().map_err(MediTrackError::InvalidInput)?,
        })
    }
}

/// FFI-safe medicine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub medicine_id: String,
    pub name: String,
    pub brand: String,
    /// "Tablet", "Capsule", "Syrup", ...
    pub dosage_form: String,
    pub unit_price: f64,
    pub quantity_in_stock: u32,
    pub expiry_date: String,
}

impl From<Medicine> for FfiMedicine {
    fn from(medicine: Medicine) -> Self {
        Self {
            medicine_id: medicine.medicine_id,
            name: medicine.name,
            brand: medicine.brand,
            dosage_form: medicine.dosage_form.to_string(),
            unit_price: medicine.unit_price,
            quantity_in_stock: medicine.quantity_in_stock,
            expiry_date: medicine.expiry_date,
        }
    }
}

impl TryFrom<FfiMedicine> for Medicine {
    type Error = MediTrackError;

    fn try_from(medicine: FfiMedicine) -> Result<Self, Self::Error> {
        Ok(Medicine {
            medicine_id: medicine.medicine_id,
            name: medicine.name,
            brand: medicine.brand,
            dosage_form: medicine
                .dosage_form
                .parse()
                .map_err(MediTrackError::InvalidInput)?,
            unit_price: medicine.unit_price,
            quantity_in_stock: medicine.quantity_in_stock,
            expiry_date: medicine.expiry_date,
        })
    }
}

/// FFI-safe test result line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTestResult {
    pub description: String,
    pub result: String,
    pub units: String,
    pub reference_range: String,
    pub stat: String,
}

impl From<TestResult> for FfiTestResult {
    fn from(test: TestResult) -> Self {
        Self {
            description: test.description,
            result: test.result,
            units: test.units,
            reference_range: test.reference_range,
            stat: test.stat,
        }
    }
}

impl From<FfiTestResult> for TestResult {
    fn from(test: FfiTestResult) -> Self {
        TestResult {
            description: test.description,
            result: test.result,
            units: test.units,
            reference_range: test.reference_range,
            stat: test.stat,
        }
    }
}

/// FFI-safe medical report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicalReport {
    pub medical_report_id: String,
    pub report_date: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub notes: String,
    pub test_results: Vec<FfiTestResult>,
}

impl From<MedicalReport> for FfiMedicalReport {
    fn from(report: MedicalReport) -> Self {
        Self {
            medical_report_id: report.medical_report_id,
            report_date: report.report_date,
            patient_id: report.patient_id,
            patient_name: report.patient_name,
            doctor_id: report.doctor_id,
            notes: report.notes,
            test_results: report.test_results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FfiMedicalReport> for MedicalReport {
    fn from(report: FfiMedicalReport) -> Self {
        MedicalReport {
            medical_report_id: report.medical_report_id,
            report_date: report.report_date,
            patient_id: report.patient_id,
            patient_name: report.patient_name,
            doctor_id: report.doctor_id,
            notes: report.notes,
            test_results: report.test_results.into_iter().map(Into::into).collect(),
        }
    }
}

/// A medicine and quantity to bill.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCartLine {
    pub medicine_id: String,
    pub quantity: u32,
}

/// FFI-safe payment line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPaymentItem {
    pub payment_details_id: String,
    pub medicine_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl From<PaymentItem> for FfiPaymentItem {
    fn from(item: PaymentItem) -> Self {
        Self {
            payment_details_id: item.payment_details_id,
            medicine_id: item.medicine_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

impl From<FfiPaymentItem> for PaymentItem {
    fn from(item: FfiPaymentItem) -> Self {
        PaymentItem {
            payment_details_id: item.payment_details_id,
            medicine_id: item.medicine_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

/// FFI-safe payment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPayment {
    pub payment_id: String,
    pub payment_date: String,
    pub patient_id: String,
    pub items: Vec<FfiPaymentItem>,
    pub total: f64,
}

impl From<Payment> for FfiPayment {
    fn from(payment: Payment) -> Self {
        let total = payment.total();
        Self {
            payment_id: payment.payment_id,
            payment_date: payment.payment_date,
            patient_id: payment.patient_id,
            items: payment.items.into_iter().map(Into::into).collect(),
            total,
        }
    }
}

/// `total` is derived from the items and ignored here.
impl From<FfiPayment> for Payment {
    fn from(payment: FfiPayment) -> Self {
        Payment {
            payment_id: payment.payment_id,
            payment_date: payment.payment_date,
            patient_id: payment.patient_id,
            items: payment.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe dashboard summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboardSummary {
    pub patient_count: u64,
    pub doctor_count: u64,
    pub medicine_count: u64,
    pub appointment_count: u64,
    pub total_income: f64,
}

impl From<DashboardSummary> for FfiDashboardSummary {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            patient_count: summary.patient_count,
            doctor_count: summary.doctor_count,
            medicine_count: summary.medicine_count,
            appointment_count: summary.appointment_count,
            total_income: summary.total_income,
        }
    }
}

/// FFI-safe monthly income.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMonthlyIncome {
    pub month: String,
    pub income: f64,
}

impl From<MonthlyIncome> for FfiMonthlyIncome {
    fn from(month: MonthlyIncome) -> Self {
        Self {
            month: month.month,
            income: month.income,
        }
    }
}
