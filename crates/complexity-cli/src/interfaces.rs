//! Demo result types and the presenter trait.

use std::time::Duration;

use serde::Serialize;

use complexity_core::ComplexityError;

/// What a single demo step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The operation returned this (already rendered) value.
    Value(String),
    /// The operation rejected its input.
    Failed(ComplexityError),
    /// The operation was abandoned before producing a value.
    Cancelled,
}

impl StepOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One labelled operation run by the demo.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Call as printed, e.g. `merge_sort([5, 3, 6, 2, 1])`.
    pub label: String,
    pub outcome: StepOutcome,
    pub duration: Duration,
}

/// One participant of the concurrent timed-square race, in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceEntry {
    pub x: i64,
    #[serde(serialize_with = "serialize_millis")]
    pub delay: Duration,
    /// `None` when the race was cancelled before this entry resumed.
    pub value: Option<i128>,
}

/// Everything a demo run produced.
#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub steps: Vec<StepResult>,
    pub race: Vec<RaceEntry>,
}

impl DemoReport {
    /// First failure among the steps, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&ComplexityError> {
        self.steps.iter().find_map(|s| match &s.outcome {
            StepOutcome::Failed(e) => Some(e),
            _ => None,
        })
    }

    /// Whether any step or race entry was cut short by cancellation.
    #[must_use]
    pub fn was_cancelled(&self) -> bool {
        self.steps.iter().any(|s| s.outcome == StepOutcome::Cancelled)
            || self.race.iter().any(|r| r.value.is_none())
    }
}

/// Trait for presenting demo results to the user.
pub trait ResultPresenter {
    /// Present one step.
    fn present_step(&self, step: &StepResult);

    /// Present the concurrent race.
    fn present_race(&self, race: &[RaceEntry]);

    /// Present a whole report.
    fn present_report(&self, report: &DemoReport) {
        for step in &report.steps {
            self.present_step(step);
        }
        self.present_race(&report.race);
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(outcome: StepOutcome) -> StepResult {
        StepResult {
            label: "op".into(),
            outcome,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn first_error_skips_successes() {
        let err = ComplexityError::InvalidArgument("n must be non-negative, got -1".into());
        let report = DemoReport {
            steps: vec![
                step(StepOutcome::Value("1".into())),
                step(StepOutcome::Failed(err.clone())),
            ],
            race: Vec::new(),
        };
        assert_eq!(report.first_error(), Some(&err));
        assert!(!report.was_cancelled());
    }

    #[test]
    fn cancelled_race_entry_marks_report() {
        let report = DemoReport {
            steps: Vec::new(),
            race: vec![RaceEntry {
                x: 4,
                delay: Duration::from_millis(10),
                value: None,
            }],
        };
        assert!(report.was_cancelled());
        assert!(report.first_error().is_none());
    }

    #[test]
    fn race_entry_serializes_delay_as_millis() {
        let entry = RaceEntry {
            x: 5,
            delay: Duration::from_millis(5),
            value: Some(25),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["delay"], 5);
        assert_eq!(json["value"], 25);
    }
}
