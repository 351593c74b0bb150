//! Prediction result types.
//!
//! Represents the classification returned by the remote prediction service.

use serde::{Deserialize, Serialize};

/// Classification returned by `POST /predict`.
///
/// Owned by the submission state machine for the duration of one request and
/// replaced wholesale on each new submission, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Binary classification: true = heart disease detected
    pub disease: bool,

    /// Human-readable message from the service
    pub message: String,

    /// Model confidence (0.0 to 1.0), when the service reports one
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl PredictionResult {
    /// Headline shown with the classification.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.disease {
            "HEART DISEASE DETECTED"
        } else {
            "NO HEART DISEASE"
        }
    }

    /// Confidence rendered as a percentage with one decimal place,
    /// e.g. 0.873 becomes "87.3%".
    #[must_use]
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.1}%", c * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_keyed_to_classification() {
        let positive = PredictionResult {
            disease: true,
            message: "High risk".to_string(),
            confidence: None,
        };
        assert_eq!(positive.headline(), "HEART DISEASE DETECTED");

        let negative = PredictionResult {
            disease: false,
            message: "Low risk".to_string(),
            confidence: None,
        };
        assert_eq!(negative.headline(), "NO HEART DISEASE");
    }

    #[test]
    fn test_confidence_percent_one_decimal() {
        let result = PredictionResult {
            disease: false,
            message: String::new(),
            confidence: Some(0.873),
        };
        assert_eq!(result.confidence_percent().as_deref(), Some("87.3%"));

        let result = PredictionResult {
            confidence: Some(0.92),
            ..result
        };
        assert_eq!(result.confidence_percent().as_deref(), Some("92.0%"));
    }

    #[test]
    fn test_confidence_is_optional_in_response() {
        let json = r#"{"disease": true, "message": "High risk"}"#;
        let result: PredictionResult = serde_json::from_str(json).expect("Should parse");
        assert!(result.disease);
        assert!(result.confidence.is_none());
        assert!(result.confidence_percent().is_none());
    }
}
