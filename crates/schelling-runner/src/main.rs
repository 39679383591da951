//! Headless runner for a single Schelling simulation.
//!
//! Usage: `schelling-runner [config.json] [report.json]`. Without arguments
//! the default configuration runs and only the summary is logged; with an
//! output path the full run report (including the frame history) is written
//! as JSON for a downstream rendering or analysis tool.

use anyhow::{Context, Result};
use schelling_core::SimConfig;
use schelling_world::{Control, Simulation};
use std::env;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => SimConfig::default(),
    };
    let report_path = args.next();

    let mut simulation = Simulation::new(config)?;
    info!("Run {}", simulation.run_id());

    let report = simulation.run_with_progress(|fraction| {
        info!("Creating simulation: {:.2}%", fraction * 100.0);
        Control::Continue
    })?;

    let (empty, group_a, group_b) = frame_counts(report.history.latest().context("empty history")?);
    info!(
        passes = report.passes,
        total_moves = report.total_moves,
        empty,
        group_a,
        group_b,
        "Run complete"
    );

    if let Some(path) = report_path {
        fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("writing report to {path}"))?;
        info!("Report written to {path}");
    }

    Ok(())
}

fn load_config(path: &str) -> Result<SimConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {path}"))
}

fn frame_counts(frame: &[Vec<u8>]) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for &cell in frame.iter().flatten() {
        match cell {
            0 => counts.0 += 1,
            1 => counts.1 += 1,
            _ => counts.2 += 1,
        }
    }
    counts
}
