//! SQLite schema definition.

/// Complete database schema for the clinic records.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Departments and Staff
-- ============================================================================

CREATE TABLE IF NOT EXISTS departments (
    department_id TEXT PRIMARY KEY,              -- D001, D002, ...
    name TEXT NOT NULL,
    email TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL DEFAULT '',
    head_of_department TEXT NOT NULL DEFAULT '',
    phone_number TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS doctors (
    doctor_id TEXT PRIMARY KEY,                  -- DOC001, ...
    name TEXT NOT NULL,
    specialty TEXT NOT NULL DEFAULT '',
    gender TEXT NOT NULL,
    contact_number TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    department_id TEXT NOT NULL REFERENCES departments(department_id),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_doctors_department ON doctors(department_id);

CREATE TABLE IF NOT EXISTS nurses (
    nurse_id TEXT PRIMARY KEY,                   -- N001, ...
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    contact_number TEXT NOT NULL DEFAULT '',
    qualification TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    department_id TEXT NOT NULL REFERENCES departments(department_id),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_nurses_department ON nurses(department_id);

-- ============================================================================
-- Patients and Appointments
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    patient_id TEXT PRIMARY KEY,                 -- P001, ...
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    address_line1 TEXT NOT NULL DEFAULT '',
    address_line2 TEXT,
    postal_code TEXT NOT NULL DEFAULT '',
    gender TEXT NOT NULL,
    contact_number TEXT NOT NULL DEFAULT '',
    blood_type TEXT,                             -- A+, A-, ..., O-
    chronic_diseases TEXT,
    last_visit_date TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

CREATE TABLE IF NOT EXISTS appointments (
    appointment_code TEXT PRIMARY KEY,           -- AC001, ...
    appointment_date TEXT NOT NULL,
    appointment_time TEXT NOT NULL,
    patient_id TEXT NOT NULL REFERENCES patients(patient_id),
    doctor_id TEXT NOT NULL REFERENCES doctors(doctor_id),
    appointment_type TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Scheduled',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(appointment_date);
CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);

-- ============================================================================
-- Medicines
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicines (
    medicine_id TEXT PRIMARY KEY,                -- M001, ...
    name TEXT NOT NULL,
    brand TEXT NOT NULL DEFAULT '',
    dosage_form TEXT NOT NULL,
    unit_price REAL NOT NULL CHECK (unit_price >= 0),
    quantity_in_stock INTEGER NOT NULL DEFAULT 0 CHECK (quantity_in_stock >= 0),
    expiry_date TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Medical Reports
-- ============================================================================

CREATE TABLE IF NOT EXISTS medical_reports (
    medical_report_id TEXT PRIMARY KEY,          -- MR001, ...
    report_date TEXT NOT NULL,
    patient_id TEXT NOT NULL REFERENCES patients(patient_id),
    patient_name TEXT NOT NULL DEFAULT '',
    doctor_id TEXT NOT NULL REFERENCES doctors(doctor_id),
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS report_test_results (
    medical_report_id TEXT NOT NULL
        REFERENCES medical_reports(medical_report_id) ON DELETE CASCADE,
    line_no INTEGER NOT NULL,
    description TEXT NOT NULL,
    result TEXT NOT NULL DEFAULT '',
    units TEXT NOT NULL DEFAULT '',
    reference_range TEXT NOT NULL DEFAULT '',
    stat TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (medical_report_id, line_no)
);

-- ============================================================================
-- Payments
-- ============================================================================

CREATE TABLE IF NOT EXISTS payments (
    payment_id TEXT PRIMARY KEY,                 -- PI001, ...
    payment_date TEXT NOT NULL,
    patient_id TEXT NOT NULL REFERENCES patients(patient_id),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_payments_date ON payments(payment_date);

CREATE TABLE IF NOT EXISTS payment_items (
    payment_details_id TEXT PRIMARY KEY,         -- PD-{payment_id}-{n}
    payment_id TEXT NOT NULL REFERENCES payments(payment_id) ON DELETE CASCADE,
    line_no INTEGER NOT NULL,
    medicine_id TEXT NOT NULL REFERENCES medicines(medicine_id),
    quantity INTEGER NOT NULL CHECK (quantity >= 1),
    unit_price REAL NOT NULL,
    total_price REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_payment_items_payment ON payment_items(payment_id, line_no);
"#;
