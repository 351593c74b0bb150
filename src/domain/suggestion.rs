//! Outcome-keyed guidance shown alongside a classification.

use crate::domain::PredictionResult;

/// How urgently the guidance should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    High,
}

/// Fixed guidance bundle derived from a classification.
///
/// Stateless: regenerated on every render, never cached or mutated. Item
/// order is significant and fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBundle {
    pub title: &'static str,
    pub items: &'static [&'static str; 9],
    pub urgency: Urgency,
}

const DISEASE_ITEMS: [&str; 9] = [
    "🏥 Consult a cardiologist immediately for proper diagnosis",
    "💊 Follow prescribed medications and treatment plans",
    "🏃 Start light exercise after doctor's approval",
    "🥗 Adopt a heart-healthy diet (low sodium, low fat)",
    "🚭 Quit smoking and limit alcohol consumption",
    "😌 Manage stress through meditation or yoga",
    "📊 Monitor blood pressure and cholesterol regularly",
    "⚖ Maintain a healthy weight",
    "💤 Get adequate sleep (7-8 hours daily)",
];

const HEALTHY_ITEMS: [&str; 9] = [
    "🎉 Great news! Your heart appears healthy",
    "🏃 Continue regular physical activity (30 min/day)",
    "🥗 Maintain a balanced, nutritious diet",
    "💧 Stay hydrated (8 glasses of water daily)",
    "😊 Keep stress levels low",
    "🚭 Avoid smoking and excessive alcohol",
    "📅 Schedule regular health checkups",
    "💪 Maintain a healthy weight",
    "😴 Get quality sleep consistently",
];

/// Map a classification to its guidance bundle.
///
/// Total pure function of the `disease` flag alone; `message` and
/// `confidence` never affect the mapping.
#[must_use]
pub fn suggestions_for(result: &PredictionResult) -> SuggestionBundle {
    if result.disease {
        SuggestionBundle {
            title: "⚠ Heart Disease Risk Detected",
            items: &DISEASE_ITEMS,
            urgency: Urgency::High,
        }
    } else {
        SuggestionBundle {
            title: "✅ No Heart Disease Detected",
            items: &HEALTHY_ITEMS,
            urgency: Urgency::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(disease: bool, message: &str, confidence: Option<f64>) -> PredictionResult {
        PredictionResult {
            disease,
            message: message.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_disease_branch() {
        let bundle = suggestions_for(&result(true, "High risk", Some(0.9)));
        assert_eq!(bundle.urgency, Urgency::High);
        assert_eq!(bundle.items.len(), 9);
        assert!(bundle.items[0].contains("Consult a cardiologist immediately"));
    }

    #[test]
    fn test_healthy_branch() {
        let bundle = suggestions_for(&result(false, "Low risk", Some(0.92)));
        assert_eq!(bundle.urgency, Urgency::Low);
        assert_eq!(bundle.items.len(), 9);
        assert!(bundle.items[0].contains("Great news"));
    }

    #[test]
    fn test_mapping_depends_on_disease_flag_only() {
        let a = suggestions_for(&result(true, "one message", None));
        let b = suggestions_for(&result(true, "another message", Some(0.1)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let input = result(false, "Low risk", Some(0.5));
        assert_eq!(suggestions_for(&input), suggestions_for(&input));
    }
}
