//! # complexity-cli
//!
//! Demo runner, output formatting, result presentation and shell completion.

pub mod completion;
pub mod demo;
pub mod interfaces;
pub mod output;
pub mod presenter;

pub use demo::{run_demo, DemoOptions};
pub use interfaces::{DemoReport, RaceEntry, ResultPresenter, StepOutcome, StepResult};
pub use presenter::{JsonPresenter, TextPresenter};
