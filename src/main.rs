//! Malama Triage - Main entrypoint.
//!
//! This is the main entry point for the Malama Triage application.
//! It initializes the logging system, loads configuration, and drives a
//! deterministic triage simulation over the hand-built containers.

mod config;
mod data_structures;
mod error;
mod sorting;
mod triage;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use data_structures::apo_ring::ApoRingError;
use error::{set_error_reporter, TriageError, TriageResult, TracingErrorReporter};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{info, warn};
use triage::{PatientFactory, TriageDesk};

/// Command line arguments for the Malama Triage simulation.
#[derive(Parser, Debug)]
#[clap(name = "Malama Triage", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a triage simulation
    Simulate {
        /// Number of patients to generate, overriding the configuration
        #[clap(short, long, value_parser)]
        patients: Option<usize>,

        /// Path to write the sorted roster as JSON
        #[clap(short, long, value_parser)]
        export: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> TriageResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TriageError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Drives one deterministic intake, assessment and discharge cycle.
fn run_simulation(
    config: &config::TriageConfig,
    patient_count: usize,
    export: Option<PathBuf>,
) -> TriageResult<()> {
    let mut factory = PatientFactory::from_config(&config.generator);
    let mut desk = TriageDesk::from_config(config)?;

    info!(patients = patient_count, "Starting intake");

    // Intake: register, record initial observations, join the triage
    // line; every third patient also needs bloods drawn.
    for admitted in 0..patient_count {
        let record = factory.create_patient();
        let nhs = record.nhs_number().to_string();

        desk.register(record)?;
        for observation in factory.initial_observations() {
            desk.record_status(&nhs, observation)?;
        }
        desk.join_triage_line(&nhs)?;

        if admitted % 3 == 0 {
            match desk.send_to_lab(&nhs) {
                Ok(()) => {}
                Err(TriageError::Lab(ApoRingError::Full)) => {
                    // Lab bottleneck: process the oldest sample first.
                    let drained = desk.collect_from_lab()?;
                    warn!(sample = %drained, "Lab at capacity, oldest sample processed");
                    desk.send_to_lab(&nhs)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    // Assessment: see everyone in arrival order; routine patients are
    // sent on to the pharmacy.
    while desk.triage_line_len() > 0 {
        let patient = desk.call_next_from_triage()?;
        if patient.priority() >= 4 {
            desk.join_pharmacy_line(patient.nhs_number())?;
        }
    }

    // Pharmacy: dispense and discharge.
    while desk.pharmacy_line_len() > 0 {
        let patient = desk.call_next_from_pharmacy()?;
        let dispensed = factory.dispense_medication();
        desk.record_status(patient.nhs_number(), dispensed)?;
        desk.discharge(patient.nhs_number())?;
    }

    // Return any remaining blood results.
    while desk.lab_occupancy() > 0 {
        desk.collect_from_lab()?;
    }

    desk.sort_roster();

    info!(
        remaining = desk.roster().len(),
        audit_entries = desk.audit().len(),
        "Simulation complete"
    );
    for record in desk.most_urgent(config.desk.urgent_display_count) {
        info!(patient = %record, "Awaiting treatment");
    }

    if let Some(path) = export {
        let json = serde_json::to_string_pretty(desk.roster())?;
        std::fs::write(&path, json)?;
        info!("Sorted roster written to {:?}", path);
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "MALAMA";
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Simulate {
        patients: None,
        export: None,
    }) {
        Command::Simulate { patients, export } => {
            info!("Starting Malama Triage simulation");

            // Load and validate configuration
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            // Initialize global configuration
            config::init_global_config(config);
            let config = config::get_global_config();
            let config = config.get();

            let patient_count = patients.unwrap_or(config.generator.intake_count);
            run_simulation(config, patient_count, export)?;

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::TriageConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(TriageError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| TriageError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(TriageError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
