//! Preview retention over a synthetic timeline

use crate::util::format_keep_line;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Stream};
use retention::{SimulatedDay, Simulator};
use slotkeep_core::RetentionConfig;
use std::io::{self, Write};

/// Simulate `config.simulate.days` days starting at `start`, printing to stdout
pub fn run(config: &RetentionConfig, start: NaiveDate) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulate(config, start, &mut out)?;
    Ok(())
}

/// Write the day-by-day simulation log as each day is simulated
///
/// Returns the number of backups left after the last day.
pub fn simulate<W: Write>(
    config: &RetentionConfig,
    start: NaiveDate,
    out: &mut W,
) -> Result<usize> {
    let mut sim = Simulator::new(config, start).context("Invalid simulation settings")?;

    let heading = format!("# Simulating retention for {} days", config.simulate.days);
    writeln!(out, "{}\n", heading.if_supports_color(Stream::Stdout, |t| t.bold()))?;
    writeln!(out, "* Backups are created daily")?;
    writeln!(out, "* Retention is run every {} days\n", sim.interval_days())?;

    while let Some(day) = sim.step().context("Simulation failed")? {
        write_day(&day, out)?;
    }

    let remaining = sim.backups().len();
    writeln!(
        out,
        "{} {}",
        "Backups remaining:".if_supports_color(Stream::Stdout, |t| t.green()),
        remaining
    )?;

    Ok(remaining)
}

fn write_day<W: Write>(day: &SimulatedDay, out: &mut W) -> io::Result<()> {
    let heading = format!("# {}", day.date.format("%Y-%m-%d"));
    writeln!(out, "{}\n", heading.if_supports_color(Stream::Stdout, |t| t.bold()))?;
    writeln!(out, "* Create backup: {}", day.created)?;

    if let Some(pass) = &day.retention {
        writeln!(out, "* Run retention\n")?;
        for (name, reasons) in &pass.kept {
            writeln!(out, "{}", format_keep_line(name, reasons))?;
        }
        for name in &pass.deleted {
            writeln!(out, "Delete {}", name)?;
        }
    }

    writeln!(out)
}
