//! Text and JSON presenters.

use std::io::{self, Write};

use serde_json::json;
use tracing::warn;

use crate::interfaces::{DemoReport, RaceEntry, ResultPresenter, StepOutcome, StepResult};
use crate::output::format_duration;

/// Human-readable presenter: one `label -> value` line per step.
pub struct TextPresenter {
    verbose: bool,
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn render_step(&self, step: &StepResult) -> Option<String> {
        let value = match &step.outcome {
            StepOutcome::Value(v) => v.clone(),
            StepOutcome::Cancelled => "cancelled".to_string(),
            StepOutcome::Failed(_) => return None,
        };
        let line = if self.quiet {
            value
        } else if self.verbose {
            format!(
                "{} -> {value} ({})",
                step.label,
                format_duration(step.duration)
            )
        } else {
            format!("{} -> {value}", step.label)
        };
        Some(line)
    }

    fn render_race(race: &[RaceEntry]) -> Vec<String> {
        race.iter()
            .enumerate()
            .map(|(rank, entry)| {
                let value = entry
                    .value
                    .map_or_else(|| "cancelled".to_string(), |v| v.to_string());
                format!(
                    "race #{}: timed_square({}, {}) -> {value}",
                    rank + 1,
                    entry.x,
                    format_duration(entry.delay)
                )
            })
            .collect()
    }
}

impl ResultPresenter for TextPresenter {
    fn present_step(&self, step: &StepResult) {
        if let StepOutcome::Failed(e) = &step.outcome {
            eprintln!("Error: {}: {e}", step.label);
            return;
        }
        if let Some(line) = self.render_step(step) {
            println!("{line}");
        }
    }

    fn present_race(&self, race: &[RaceEntry]) {
        if self.quiet {
            return;
        }
        for line in Self::render_race(race) {
            println!("{line}");
        }
    }
}

/// Machine-readable presenter: the whole report as one JSON document.
pub struct JsonPresenter;

impl JsonPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the JSON document for a report.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_json(report: &DemoReport) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = report
            .steps
            .iter()
            .map(|s| {
                let (status, value, error) = match &s.outcome {
                    StepOutcome::Value(v) => ("ok", Some(v.clone()), None),
                    StepOutcome::Failed(e) => ("error", None, Some(e.to_string())),
                    StepOutcome::Cancelled => ("cancelled", None, None),
                };
                json!({
                    "label": s.label,
                    "status": status,
                    "value": value,
                    "error": error,
                    "duration_us": s.duration.as_micros() as u64,
                })
            })
            .collect();
        json!({ "steps": steps, "race": report.race })
    }

    /// Write the report as pretty JSON followed by a newline.
    pub fn write_report(report: &DemoReport, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &Self::to_json(report))?;
        writeln!(out)?;
        out.flush()
    }
}

impl Default for JsonPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPresenter for JsonPresenter {
    // Steps are emitted together in present_report.
    fn present_step(&self, _step: &StepResult) {}

    fn present_race(&self, _race: &[RaceEntry]) {}

    fn present_report(&self, report: &DemoReport) {
        let mut out = io::stdout().lock();
        if let Err(e) = Self::write_report(report, &mut out) {
            warn!(error = %e, "failed to write JSON report");
        }
    }
}
