//! TRUSTSHIM — Tamper-Evident Audit Chain Demo CLI
//!
//! Simulates a safety-critical device session (an infusion pump) logging
//! through a TRUSTSHIM audit chain, then verifies the produced entries.
//! The `tamper` subcommand edits one stored entry afterwards to show strict
//! verification catching what linkage-only verification cannot.
//!
//! Usage:
//!   cargo run -p demo -- session
//!   cargo run -p demo -- tamper
//!   cargo run -p demo -- session --device-id PUMP-000042

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trustshim_chain::AuditChain;
use trustshim_contracts::{ActorId, Severity, TrustShimResult};
use trustshim_verify::{ChainVerifier, VerifyMode};

// ── CLI definition ────────────────────────────────────────────────────────────

/// TRUSTSHIM — tamper-evident audit logging demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "TRUSTSHIM audit chain demo",
    long_about = "Simulates a device session logging through a TRUSTSHIM audit chain,\n\
                  then verifies chain integrity in strict and linkage-only modes."
)]
struct Cli {
    /// Device identifier used for the simulated chain.
    #[arg(long, default_value = "INFUSION-PUMP-789012")]
    device_id: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a simulated pump session and verify the resulting chain.
    Session,
    /// Log a session, tamper with one stored entry, and compare strict vs
    /// linkage-only verification.
    Tamper,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to watch appends and verification decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Session => run_session(&cli.device_id),
        Command::Tamper => run_tamper(&cli.device_id),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {e}");
        std::process::exit(1);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

/// Log the pump session and return the serialized entries.
fn log_session(device_id: &str) -> TrustShimResult<Vec<String>> {
    let chain = AuditChain::new(device_id)?;

    let events = [
        ("POST: All systems nominal", ActorId::System, Severity::Info),
        (
            "Medication loaded - Drug: Insulin, Concentration: 100U/mL",
            ActorId::Operator,
            Severity::Info,
        ),
        (
            "Infusion started - Rate: 2.5 mL/hr, Duration: 60 min",
            ActorId::Operator,
            Severity::Info,
        ),
        (
            "Occlusion detected - Pressure threshold exceeded",
            ActorId::System,
            Severity::Warning,
        ),
        (
            "Infusion paused - Safety protocol activated",
            ActorId::System,
            Severity::Critical,
        ),
        (
            "Service technician access - Calibration performed",
            ActorId::Service,
            Severity::Info,
        ),
    ];

    let mut records = Vec::with_capacity(events.len());
    for (message, actor, severity) in events {
        let entry = chain.append(message, actor, severity)?;
        println!("{}", entry.to_record());
        records.push(entry.to_record());
    }

    println!();
    println!("Entries logged:       {}", chain.sequence_number());
    println!("Chain head digest:    {}", chain.previous_hash());

    Ok(records)
}

fn run_session(device_id: &str) -> TrustShimResult<()> {
    println!("=== TRUSTSHIM - Infusion Pump Session ===\n");

    let records = log_session(device_id)?;

    let report = ChainVerifier::strict().verify(&records);
    println!(
        "Strict verification:  {}",
        if report.valid { "VALID" } else { "INVALID" }
    );

    Ok(())
}

fn run_tamper(device_id: &str) -> TrustShimResult<()> {
    println!("=== TRUSTSHIM - Tamper Detection ===\n");

    let mut records = log_session(device_id)?;

    // An attacker edits the stored record's message without recomputing
    // the digests.
    records[3] = records[3].replace("Occlusion detected", "Routine check");
    println!("\nTampered with entry 3 (message rewritten in place).\n");

    let strict = ChainVerifier::strict().verify(&records);
    match strict.failure {
        Some(failure) => println!(
            "Strict verification:       INVALID at entry {} ({:?})",
            failure.index, failure.reason
        ),
        None => println!("Strict verification:       VALID"),
    }

    let linkage = ChainVerifier::new(VerifyMode::LinkageOnly).verify(&records);
    println!(
        "Linkage-only verification: {} (stored digests still link up — this\n\
         mode cannot see content tampering, which is why strict is the default)",
        if linkage.valid { "VALID" } else { "INVALID" }
    );

    Ok(())
}
