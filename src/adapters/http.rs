//! HTTP adapter for the remote prediction service.

use std::time::Duration;

use crate::domain::{PatientPayload, PredictionResult};
use crate::ports::{PredictError, Predictor};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for `POST {base}/predict`.
///
/// Runs on the prediction worker thread, never on the UI thread. All
/// transport and protocol failures collapse into [`PredictError`]; the
/// workflow does not distinguish them.
pub struct HttpPredictor {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpPredictor {
    /// Create a predictor against an explicit base URL.
    ///
    /// # Errors
    /// Returns error if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PredictError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PredictError(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Create a predictor from the environment.
    ///
    /// Resolves `CARDIOSCOPE_API_URL`, falling back to the fixed local
    /// default (`http://localhost:8000`).
    ///
    /// # Errors
    /// Returns error if the underlying client cannot be built.
    pub fn from_env() -> Result<Self, PredictError> {
        let base_url =
            std::env::var("CARDIOSCOPE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The resolved prediction endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, payload: &PatientPayload) -> Result<PredictionResult, PredictError> {
        let endpoint = self.endpoint();
        tracing::debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(payload)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| PredictError(e.to_string()))?;

        response
            .json::<PredictionResult>()
            .map_err(|e| PredictError(format!("malformed response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        let predictor = HttpPredictor::new("http://localhost:8000").expect("Should build");
        assert_eq!(predictor.endpoint(), "http://localhost:8000/predict");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let predictor = HttpPredictor::new("http://example.com/").expect("Should build");
        assert_eq!(predictor.endpoint(), "http://example.com/predict");
    }
}
