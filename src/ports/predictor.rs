//! Predictor port: Trait for the remote classification service.
//!
//! Abstracts the HTTP client from the application logic.

use crate::domain::{PatientPayload, PredictionResult};

/// A failed prediction request.
///
/// The workflow treats all failures uniformly (timeout, DNS, non-2xx,
/// malformed body all map to the same `Failed` transition), so the port
/// carries only a diagnostic description for the log.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct PredictError(pub String);

/// Trait for remote risk classification.
pub trait Predictor: Send + Sync {
    /// Submit a payload for classification.
    ///
    /// Blocks until the service resolves or rejects; callers run this off
    /// the UI thread.
    ///
    /// # Errors
    /// Returns [`PredictError`] on any connectivity or protocol failure.
    fn predict(&self, payload: &PatientPayload) -> Result<PredictionResult, PredictError>;
}
