use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meditrack_core::export::BillExporter;
use meditrack_core::{Database, EntityKind};

mod config;

use config::{Config, DEFAULT_LOG_DIRECTIVE};

#[derive(Parser)]
#[command(name = "meditrack")]
#[command(about = "MediTrack hospital records CLI")]
struct Cli {
    /// Database file (overrides MEDITRACK_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next suggested ID for a record kind
    NextId {
        /// Record kind (department, doctor, nurse, patient, appointment,
        /// medicine, medical-report, payment)
        kind: EntityKind,
    },
    /// List the records of a kind as JSON
    List {
        /// Record kind
        kind: EntityKind,
        /// Print only the IDs
        #[arg(long)]
        ids: bool,
    },
    /// Delete a record
    Delete {
        /// Record kind
        kind: EntityKind,
        /// Record ID
        id: String,
    },
    /// Show dashboard figures and monthly income
    Dashboard,
    /// Export the bill for a payment
    Bill {
        /// Payment ID (e.g., PI001)
        payment_id: String,
        /// Print CSV instead of JSON
        #[arg(long)]
        csv: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.db);
    let db = Database::open(&config.db_path)
        .with_context(|| format!("opening database {}", config.db_path.display()))?;

    match cli.command {
        Commands::NextId { kind } => {
            println!("{}", db.suggest_next_id(kind)?);
        }
        Commands::List { kind, ids } => {
            if ids {
                for id in db.list_ids(kind)? {
                    println!("{}", id);
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&list_records(&db, kind)?)?);
            }
        }
        Commands::Delete { kind, id } => {
            if !db.delete(kind, &id)? {
                bail!("no {} with ID {}", kind, id);
            }
            println!("Deleted {} {}", kind, id);
        }
        Commands::Dashboard => {
            let summary = db.dashboard_summary()?;
            println!("Patients:     {}", summary.patient_count);
            println!("Doctors:      {}", summary.doctor_count);
            println!("Medicines:    {}", summary.medicine_count);
            println!("Appointments: {}", summary.appointment_count);
            println!("Total income: {:.2}", summary.total_income);

            let months = db.monthly_income()?;
            if !months.is_empty() {
                println!();
                for month in months {
                    println!("{}  {:>12.2}", month.month, month.income);
                }
            }
        }
        Commands::Bill { payment_id, csv } => {
            let bill = BillExporter::new(&db).export_payment(&payment_id)?;
            if csv {
                print!("{}", bill.to_csv());
            } else {
                println!("{}", bill.to_json()?);
            }
        }
    }

    Ok(())
}

/// Every record of a kind, serialized for display.
fn list_records(db: &Database, kind: EntityKind) -> anyhow::Result<serde_json::Value> {
    let value = match kind {
        EntityKind::Department => serde_json::to_value(db.list_departments()?)?,
        EntityKind::Doctor => serde_json::to_value(db.list_doctors()?)?,
        EntityKind::Nurse => serde_json::to_value(db.list_nurses()?)?,
        EntityKind::Patient => serde_json::to_value(db.list_patients()?)?,
        EntityKind::Appointment => serde_json::to_value(db.list_appointments()?)?,
        EntityKind::Medicine => serde_json::to_value(db.list_medicines()?)?,
        EntityKind::MedicalReport => serde_json::to_value(db.list_medical_reports()?)?,
        EntityKind::Payment => serde_json::to_value(db.list_payments()?)?,
    };
    Ok(value)
}
