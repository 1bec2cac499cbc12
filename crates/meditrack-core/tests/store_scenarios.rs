//! End-to-end scenarios: suggest an ID, submit the form, refresh.

use meditrack_core::cart::PaymentCart;
use meditrack_core::db::{Database, DbError};
use meditrack_core::export::BillExporter;
use meditrack_core::form::IdField;
use meditrack_core::ids::{next_id_for, EntityKind};
use meditrack_core::models::{Department, Doctor, Medicine, Patient};

fn setup_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.insert_department(&Department::new("D001".into(), "Cardiology".into()))
        .unwrap();
    db
}

fn add_doctor(db: &Database, id: &str) {
    db.insert_doctor(&Doctor::new(id.into(), format!("Dr. {}", id), "D001".into()))
        .unwrap();
}

fn doctor_field(db: &Database) -> IdField {
    IdField::from_ids(
        EntityKind::Doctor.scheme(),
        db.list_ids(EntityKind::Doctor).unwrap(),
    )
}

#[test]
fn test_doctor_form_flow() {
    let db = setup_db();
    for id in ["DOC001", "DOC002", "DOC010"] {
        add_doctor(&db, id);
    }

    let mut field = doctor_field(&db);
    assert_eq!(field.value(), "DOC011");

    // Submit without editing
    let submitted = field.take_for_submit();
    assert_eq!(submitted, "DOC011");
    add_doctor(&db, &submitted);

    // Store reloads and the view refreshes
    field.refresh(db.list_ids(EntityKind::Doctor).unwrap());
    assert_eq!(field.value(), "DOC012");
    assert_eq!(next_id_for(&db.list_doctors().unwrap()), "DOC012");
}

#[test]
fn test_user_edit_survives_refresh() {
    let db = setup_db();
    add_doctor(&db, "DOC001");

    let mut field = doctor_field(&db);
    field.edit("DOC100");

    // Another desk adds a doctor; the list refreshes under the open form
    add_doctor(&db, "DOC002");
    field.refresh(db.list_ids(EntityKind::Doctor).unwrap());

    assert_eq!(field.suggested(), "DOC003");
    assert_eq!(field.value(), "DOC100");

    let submitted = field.take_for_submit();
    add_doctor(&db, &submitted);
    field.refresh(db.list_ids(EntityKind::Doctor).unwrap());
    assert_eq!(field.value(), "DOC101");
}

#[test]
fn test_concurrent_suggestions_collide_at_the_store() {
    let db = setup_db();
    add_doctor(&db, "DOC001");

    // Two forms opened from the same snapshot
    let mut first = doctor_field(&db);
    let mut second = doctor_field(&db);
    assert_eq!(first.value(), second.value());

    add_doctor(&db, &first.take_for_submit());

    let clash = Doctor::new(second.take_for_submit(), "Dr. Late".into(), "D001".into());
    match db.insert_doctor(&clash) {
        Err(DbError::Duplicate { kind, id }) => {
            assert_eq!(kind, EntityKind::Doctor);
            assert_eq!(id, "DOC002");
        }
        other => panic!("expected duplicate error, got {:?}", other),
    }

    // After a refresh the second form gets a fresh suggestion
    second.refresh(db.list_ids(EntityKind::Doctor).unwrap());
    assert_eq!(second.value(), "DOC003");
}

#[test]
fn test_hand_entered_ids_do_not_break_numbering() {
    let db = setup_db();
    db.insert_department(&Department::new("D009".into(), "Radiology".into()))
        .unwrap();
    db.insert_department(&Department::new("ER".into(), "Emergency".into()))
        .unwrap();

    assert_eq!(db.suggest_next_id(EntityKind::Department).unwrap(), "D010");
}

#[test]
fn test_payment_to_bill() {
    let db = setup_db();
    let patient_id = db.suggest_next_id(EntityKind::Patient).unwrap();
    db.insert_patient(&Patient::new(patient_id.clone(), "Kasun".into(), 40))
        .unwrap();

    let medicine_id = db.suggest_next_id(EntityKind::Medicine).unwrap();
    let medicine = Medicine::new(medicine_id, "Metformin".into(), 4.0, 60);
    db.insert_medicine(&medicine).unwrap();

    let mut cart = PaymentCart::new();
    cart.add(&medicine, 20).unwrap();
    cart.add(&medicine, 10).unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert!(cart.add(&medicine, 31).is_err());

    let payment_id = db.suggest_next_id(EntityKind::Payment).unwrap();
    let payment = cart
        .into_payment(payment_id.clone(), "2025-05-02".into(), patient_id)
        .unwrap();
    db.insert_payment(&payment).unwrap();

    let bill = BillExporter::new(&db).export_payment(&payment_id).unwrap();
    assert_eq!(bill.total, 120.0);
    assert_eq!(bill.lines[0].payment_details_id, "PD-PI001-1");

    let summary = db.dashboard_summary().unwrap();
    assert_eq!(summary.total_income, 120.0);
    assert_eq!(db.suggest_next_id(EntityKind::Payment).unwrap(), "PI002");
}
