//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a medical-themed interface for:
//! - Patient data entry
//! - Submission progress
//! - Classification results with guidance

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::MedicalTheme;
pub use worker::{PredictionOutcome, PredictionWorker, PredictionWorkerHandle};
