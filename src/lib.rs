//! # Cardioscope
//!
//! Terminal client for heart disease risk prediction.
//!
//! Collects patient clinical measurements through a form, submits them to a
//! remote prediction service and renders the returned classification with
//! contextual guidance and a desktop notification.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (patient intake/payload, prediction result, suggestions)
//! - `ports`: Trait definitions for external operations (predictor, notifier)
//! - `adapters`: Concrete implementations (reqwest HTTP client, desktop notifications)
//! - `application`: The submission workflow state machine
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{PredictionWorkflow, SubmissionState};
pub use domain::{PatientIntake, PatientPayload, PredictionResult, SuggestionBundle};

/// Result type for cardioscope operations
pub type Result<T> = std::result::Result<T, CardioscopeError>;

/// Main error type for cardioscope
#[derive(Debug, thiserror::Error)]
pub enum CardioscopeError {
    #[error("Invalid patient input: {0}")]
    Codec(#[from] domain::CodecError),

    #[error("Prediction request failed: {0}")]
    Predict(#[from] ports::PredictError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
