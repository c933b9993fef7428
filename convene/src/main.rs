/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use convene::dataset::Dataset;
use convene::meeting::Schedule;
use convene::rank::rank_meetings;
use convene::scheduler::SlotScheduler;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Convene meeting scheduler.
///
/// Example:
///   convene demo/meetings.yaml --max-slots 1000
#[derive(Debug, Parser)]
#[command(
    name = "convene",
    about = "Greedy meeting-to-timeslot scheduler",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML meetings dataset.
    dataset: PathBuf,

    /// Abort once this many timeslots have been produced (safety cap for
    /// malformed input).
    #[arg(short = 'm', long = "max-slots")]
    max_slots: Option<usize>,

    /// Emit the schedule as YAML instead of the per-slot text listing.
    #[arg(short = 'y', long = "yaml", default_value_t = false)]
    yaml: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        dataset   = ?cli.dataset,
        max_slots = ?cli.max_slots,
        yaml      = cli.yaml,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Load and validate the dataset ─────────────────────────────────────────
    let dataset = Dataset::load_from_file(&cli.dataset)?;
    dataset.validate()?;

    // ── Rank, then schedule ───────────────────────────────────────────────────
    let ranks = rank_meetings(dataset.meetings());

    let mut scheduler = SlotScheduler::new();
    if let Some(limit) = cli.max_slots {
        scheduler = scheduler.with_max_slots(limit);
    }
    let schedule = scheduler.schedule(dataset.meetings(), dataset.teams(), &ranks)?;

    // ── Output sink ───────────────────────────────────────────────────────────
    if cli.yaml {
        print!("{}", serde_yaml::to_string(&schedule)?);
    } else {
        print_schedule(&schedule);
    }

    Ok(())
}

/// Per-slot text rendering of the generated schedule.
fn print_schedule(schedule: &Schedule) {
    println!("Generated schedule ({} timeslot(s)):", schedule.len());
    for (time, slot) in schedule.iter().enumerate() {
        println!("t={time}");
        for start in slot {
            println!(
                "  meeting '{}' starts with teams [{}]",
                start.meeting,
                start.teams.join(", ")
            );
        }
    }
}
