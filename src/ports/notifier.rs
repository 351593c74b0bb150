//! Notifier port: Trait for the user-facing notification capability.
//!
//! Models the host notification surface as an injected capability so the
//! workflow never depends on a concrete desktop API; headless environments
//! substitute a no-op implementation.

use crate::domain::PredictionResult;

/// Logical channel tag: a new alert supersedes the previous one on this tag.
pub const ALERT_TAG: &str = "heart-disease-prediction";

/// Notification permission state of the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not yet asked; may be requested once, opportunistically.
    Undetermined,
    Granted,
    Denied,
}

/// A user-facing alert derived from a classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAlert {
    pub title: String,
    pub body: String,
    /// Outcome-keyed icon indicator (freedesktop icon name)
    pub icon: &'static str,
    /// When set, the notification must not auto-dismiss; the user has to
    /// dismiss it explicitly. Set only for positive disease detection.
    pub requires_interaction: bool,
}

impl RiskAlert {
    /// Build the alert for a classification outcome.
    #[must_use]
    pub fn for_result(result: &PredictionResult) -> Self {
        if result.disease {
            Self {
                title: "⚠ Heart Disease Detected".to_string(),
                body: result.message.clone(),
                icon: "dialog-warning",
                requires_interaction: true,
            }
        } else {
            Self {
                title: "✅ No Heart Disease".to_string(),
                body: result.message.clone(),
                icon: "dialog-information",
                requires_interaction: false,
            }
        }
    }
}

/// Trait for issuing best-effort, fire-and-forget alerts.
pub trait Notifier: Send {
    /// Current permission state.
    fn permission(&self) -> Permission;

    /// Ask the user for permission. Called at most once per workflow, only
    /// from the [`Permission::Undetermined`] state; never re-requested.
    fn request_permission(&mut self) -> Permission;

    /// Show an alert. Silent no-op when capability or permission is absent;
    /// never an error.
    fn show(&mut self, alert: &RiskAlert);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn permission(&self) -> Permission {
        (**self).permission()
    }

    fn request_permission(&mut self) -> Permission {
        (**self).request_permission()
    }

    fn show(&mut self, alert: &RiskAlert) {
        (**self).show(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_for_positive_detection() {
        let result = PredictionResult {
            disease: true,
            message: "High risk".to_string(),
            confidence: Some(0.9),
        };
        let alert = RiskAlert::for_result(&result);
        assert!(alert.requires_interaction);
        assert_eq!(alert.body, "High risk");
        assert!(alert.title.contains("Heart Disease Detected"));
    }

    #[test]
    fn test_alert_for_negative_detection_auto_dismisses() {
        let result = PredictionResult {
            disease: false,
            message: "Low risk".to_string(),
            confidence: None,
        };
        let alert = RiskAlert::for_result(&result);
        assert!(!alert.requires_interaction);
        assert!(alert.title.contains("No Heart Disease"));
    }
}
