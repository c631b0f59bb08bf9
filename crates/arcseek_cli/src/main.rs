//! arcseek CLI
//!
//! Replay touch scenarios against the circular range engine and inspect the
//! resulting geometry.

use anyhow::Result;
use arcseek_core::{CircularRangeSeekBar, ProgressChange};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scenario;

use scenario::{Scenario, Step};

#[derive(Parser)]
#[command(name = "arcseek")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Circular range selector engine CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario and print every progress change
    Replay {
        /// Scenario TOML file
        scenario: PathBuf,

        /// Print changes as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Print the geometry and initial render snapshot of a scenario
    Inspect {
        /// Scenario TOML file
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay { scenario, json } => cmd_replay(&scenario, json),
        Commands::Inspect { scenario } => cmd_inspect(&scenario),
    }
}

fn cmd_replay(path: &Path, json: bool) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let mut bar = scenario.build_seek_bar()?;

    info!(
        "Replaying {} steps from {}",
        scenario.steps.len(),
        path.display()
    );

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    bar.on_change(move |_bar, change| {
        if let Ok(mut changes) = sink.lock() {
            changes.push(change);
        }
    });

    for (index, step) in scenario.steps.iter().enumerate() {
        apply_step(&mut bar, step, index)?;

        let drained: Vec<ProgressChange> = changes
            .lock()
            .map(|mut changes| changes.drain(..).collect())
            .unwrap_or_default();
        for change in drained {
            print_change(&change, json)?;
        }
    }

    let (progress1, progress2) = bar.progress();
    info!("Final range: {} - {}", progress1, progress2);
    Ok(())
}

fn apply_step(bar: &mut CircularRangeSeekBar, step: &Step, index: usize) -> Result<()> {
    match *step {
        Step::SetProgress {
            progress1,
            progress2,
        } => {
            let progress2 = progress2.unwrap_or(bar.config().max_progress - 1);
            let repaint = bar.set_progress(progress1, progress2);
            debug!("step {}: set_progress -> repaint = {}", index, repaint);
        }
        Step::SetStartAngle { degrees } => {
            let repaint = bar.set_start_angle(degrees)?;
            debug!("step {}: set_start_angle -> repaint = {}", index, repaint);
        }
        Step::SetEndAngle { degrees } => {
            let repaint = bar.set_end_angle(degrees)?;
            debug!("step {}: set_end_angle -> repaint = {}", index, repaint);
        }
        _ => {
            if let Some(event) = step.contact_event(&bar.metrics()) {
                let response = bar.handle_event(&event);
                debug!(
                    "step {}: {:?} -> consumed = {}, repaint = {}",
                    index, event, response.consumed, response.repaint
                );
                if event.is_end() {
                    debug!("step {}: gesture ended at {:?}", index, bar.progress());
                }
            }
        }
    }
    Ok(())
}

fn print_change(change: &ProgressChange, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(change)?);
    } else {
        println!(
            "{} - {}, from user: {}",
            change.progress1, change.progress2, change.from_user
        );
    }
    Ok(())
}

fn cmd_inspect(path: &Path) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let bar = scenario.build_seek_bar()?;
    let geometry = bar.geometry();

    println!("Scenario: {}", path.display());
    println!();
    println!("Geometry:");
    println!("  Max progress: {}", geometry.max_progress());
    println!("  Start angle:  {:.2}", geometry.start_angle());
    println!("  Arc span:     {:.2}", geometry.arc_span());
    println!("  Full circle:  {}", geometry.is_full_circle());
    println!();
    println!("Range:");
    println!("  Thumb 1: {} at {:.2}", bar.progress1(), bar.angle1());
    if !bar.config().use_one_thumb {
        println!("  Thumb 2: {} at {:.2}", bar.progress2(), bar.angle2());
        println!(
            "  Min thumb difference: {}",
            bar.config().effective_min_thumb_difference()
        );
    }
    println!();
    println!("Render snapshot:");
    println!("{}", serde_json::to_string_pretty(&bar.render_snapshot())?);

    Ok(())
}
