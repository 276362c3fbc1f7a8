//! Transmittance sweep of a waveguide with two in-line Helmholtz resonators.
//!
//! Prints `frequency_hz<TAB>transmittance` rows on stdout, or a JSON
//! document with `--json`. Logs go to stderr; set `RUST_LOG` to adjust.
//!
//! Run with:
//!   cargo run -p hr-sweep -- --json > sweep.json

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use tmm_core::constants::area_from_radius;
use tmm_core::frequency_response::{linear_sweep, sweep};
use tmm_core::{Segment, SoundSpeeds, SweepResult, Waveguide};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Outer tube (and cavity) radius in metres.
const OUTER_RADIUS: f64 = 0.051;
/// Resonator neck radius in metres.
const NECK_RADIUS: f64 = 0.01081;
const CAVITY_LENGTH: f64 = 0.013462;
const NECK_LENGTH: f64 = 0.022;
const RESONATORS: usize = 2;

const SWEEP_START_HZ: f64 = 50.0;
const SWEEP_STOP_HZ: f64 = 995.0;
const SWEEP_STEP_HZ: f64 = 5.0;

#[derive(Debug, Parser)]
#[command(about = "Transmittance of a periodic Helmholtz-resonator waveguide")]
struct Cli {
    /// Emit the geometry and sweep as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    waveguide: &'a Waveguide,
    speeds: SoundSpeeds,
    #[serde(flatten)]
    result: &'a SweepResult,
}

fn reference_waveguide() -> Waveguide {
    let cavity = Segment::from_radius(OUTER_RADIUS, CAVITY_LENGTH);
    let neck = Segment::from_radius(NECK_RADIUS, NECK_LENGTH);
    Waveguide::periodic(&[cavity, neck], RESONATORS, cavity, area_from_radius(OUTER_RADIUS))
}

fn write_table(out: &mut impl Write, result: &SweepResult) -> io::Result<()> {
    writeln!(out, "frequency_hz\ttransmittance")?;
    for (f, tau) in result.points() {
        writeln!(out, "{f}\t{tau}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    let waveguide = reference_waveguide();
    waveguide.validate().context("reference geometry")?;
    let speeds = SoundSpeeds::default();
    let frequencies = linear_sweep(SWEEP_START_HZ, SWEEP_STOP_HZ, SWEEP_STEP_HZ);
    info!(
        segments = waveguide.segments().len(),
        exterior_area = waveguide.exterior_area,
        points = frequencies.len(),
        "sweeping {} Hz to {} Hz",
        SWEEP_START_HZ,
        SWEEP_STOP_HZ
    );

    let result = sweep(&waveguide, &frequencies, &speeds);

    let non_finite = result.transmittance.iter().filter(|t| !t.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, "sweep produced non-finite transmittance values");
    }
    if let Some((freq, tau)) = result.min_transmittance() {
        info!("deepest dip at {} Hz: transmittance {:.4}", freq, tau);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        let report = Report {
            waveguide: &waveguide,
            speeds,
            result: &result,
        };
        serde_json::to_writer_pretty(&mut out, &report).context("writing JSON report")?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &result).context("writing table")?;
    }
    out.flush().context("flushing stdout")?;

    Ok(())
}
