//! Apply retention to real backup files

use crate::util::{format_keep_line, plural};
use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream, Style};
use retention::{DeletionSink, PruneOutcome, Pruner};
use scanner::{collect_inputs, date_items};
use slotkeep_core::RetentionConfig;
use std::io::Write;
use std::path::PathBuf;

/// Totals across all processed groups
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneSummary {
    pub kept: usize,
    /// Deleted, or listed for deletion in dry-run mode
    pub deleted: usize,
    pub failed: usize,
    pub undated: usize,
}

/// Run retention against `paths`, printing to stdout
///
/// Fails after processing everything if any deletion failed.
pub fn run<S: DeletionSink<PathBuf>>(
    paths: &[PathBuf],
    config: &RetentionConfig,
    force: bool,
    sink: &mut S,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = execute(paths, config, force, sink, &mut out)?;

    if summary.failed > 0 {
        anyhow::bail!("{} could not be deleted", plural(summary.failed, "file"));
    }
    Ok(())
}

/// Partition every input group and delete (or list) what is not kept
///
/// Keep reasons and the delete list go to `out`; diagnostics go to stderr.
pub fn execute<S, W>(
    paths: &[PathBuf],
    config: &RetentionConfig,
    force: bool,
    sink: &mut S,
    out: &mut W,
) -> Result<PruneSummary>
where
    S: DeletionSink<PathBuf>,
    W: Write,
{
    let groups = collect_inputs(paths).context("Failed to collect backup files")?;
    let pruner = Pruner::new(config.limits());
    let mut summary = PruneSummary::default();

    for group in groups {
        if config.verbose {
            if let Some(dir) = &group.dir {
                let label = "Processing directory:";
                eprintln!(
                    "\n{} {}",
                    label.if_supports_color(Stream::Stderr, |t| t.bold()),
                    dir.display()
                );
            }
        }

        let dated = date_items(&group.files, &config.dates);
        for err in &dated.undated {
            let label = "Skipping:".if_supports_color(Stream::Stderr, |t| t.yellow());
            eprintln!("{} {}", label, err);
        }
        summary.undated += dated.undated.len();

        let plan = pruner.plan(&dated.items);
        summary.kept += plan.keep.len();

        if config.verbose {
            for (path, reasons) in plan.reasons() {
                writeln!(out, "{}", format_keep_line(&path.display().to_string(), &reasons))?;
            }
        }

        if !force {
            for path in &plan.delete {
                writeln!(out, "{}", path.display())?;
            }
            summary.deleted += plan.delete.len();
            continue;
        }

        let report = pruner.apply(&plan, sink);
        for outcome in &report.outcomes {
            match outcome {
                PruneOutcome::Deleted(path) => {
                    let label = "Deleted:".if_supports_color(Stream::Stdout, |t| t.red());
                    writeln!(out, "{} {}", label, path.display())?;
                }
                PruneOutcome::Failed { id, cause } => {
                    let style = Style::new().red().bold();
                    let label =
                        "Failed to delete".if_supports_color(Stream::Stderr, |t| t.style(style));
                    eprintln!("{} {}: {}", label, id.display(), cause);
                }
            }
        }
        summary.deleted += report.deleted_count();
        summary.failed += report.failed_count();
    }

    tracing::debug!(
        "Retention complete: kept {}, deleted {}, failed {}, undated {}",
        summary.kept,
        summary.deleted,
        summary.failed,
        summary.undated
    );

    Ok(summary)
}
