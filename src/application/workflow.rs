//! Submission workflow: the lifecycle of one prediction request.
//!
//! Governs `Idle → Submitting → Succeeded | Failed` and re-entry, holds the
//! single source of truth for what the presenter renders, and dispatches the
//! notification side effect on success.

use crate::domain::PredictionResult;
use crate::ports::{Notifier, Permission, PredictError, RiskAlert};

/// Fixed user-facing message for any predictor failure. Detail goes to the
/// log only.
pub const CONNECTIVITY_ERROR: &str =
    "Failed to connect to the prediction service. Make sure it is running and try again.";

/// Monotonically increasing identifier for one submission.
///
/// A completion whose id is not the one recorded in `Submitting` is stale
/// and gets discarded, so a superseded request can never overwrite a later
/// submission's state even if the submit gating were bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// State of the current workflow instance.
///
/// Exactly one instance exists at a time. Invalid combinations (a loading
/// indicator next to a stale result) are unrepresentable: entering
/// `Submitting` replaces the whole state, clearing any prior result or
/// error immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// No submission yet; the presenter shows a placeholder prompt.
    Idle,
    /// One request in flight.
    Submitting { request: RequestId },
    /// The service resolved with a classification.
    Succeeded(PredictionResult),
    /// The service rejected; `message` is always [`CONNECTIVITY_ERROR`].
    Failed { message: String },
}

impl SubmissionState {
    /// The classification held by the state, if any.
    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// The submission state machine plus its notification side effect.
///
/// Re-entrant: a fresh submit from any non-Submitting state discards the
/// previous result and error. One in-flight request at a time; a second
/// submit while `Submitting` is a no-op.
pub struct PredictionWorkflow<N: Notifier> {
    state: SubmissionState,
    next_request: u64,
    notifier: N,
}

impl<N: Notifier> PredictionWorkflow<N> {
    /// Create a workflow, requesting notification permission once,
    /// opportunistically, if the host reports an undetermined state.
    pub fn new(mut notifier: N) -> Self {
        if notifier.permission() == Permission::Undetermined {
            let granted = notifier.request_permission();
            tracing::debug!("Notification permission requested: {:?}", granted);
        }

        Self {
            state: SubmissionState::Idle,
            next_request: 0,
            notifier,
        }
    }

    /// Current state, the single source of truth for rendering.
    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether a request is in flight. The submit affordance is disabled
    /// while this holds.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Enter `Submitting`, clearing any prior result or error immediately.
    ///
    /// Returns the id the caller must hand back via [`Self::complete`], or
    /// `None` while another request is in flight (the submit is a no-op).
    pub fn begin_submit(&mut self) -> Option<RequestId> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored: request already in flight");
            return None;
        }

        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.state = SubmissionState::Submitting { request };
        tracing::info!("Submission {} started", self.next_request);
        Some(request)
    }

    /// Apply the outcome of a request.
    ///
    /// Exactly one of `Succeeded`/`Failed` is entered per request. Outcomes
    /// for any id other than the in-flight one are discarded. On success the
    /// notification is dispatched (best-effort) before returning.
    ///
    /// Returns `true` when the state newly entered `Succeeded`, so the
    /// presenter can run its bring-into-view hook on that transition.
    pub fn complete(
        &mut self,
        request: RequestId,
        outcome: Result<PredictionResult, PredictError>,
    ) -> bool {
        match &self.state {
            SubmissionState::Submitting { request: current } if *current == request => {}
            _ => {
                tracing::warn!("Discarding stale outcome for request {:?}", request);
                return false;
            }
        }

        match outcome {
            Ok(result) => {
                if self.notifier.permission() == Permission::Granted {
                    self.notifier.show(&RiskAlert::for_result(&result));
                }
                tracing::info!(
                    "Submission {:?} succeeded: disease={}",
                    request,
                    result.disease
                );
                self.state = SubmissionState::Succeeded(result);
                true
            }
            Err(err) => {
                tracing::warn!("Submission {:?} failed: {}", request, err);
                self.state = SubmissionState::Failed {
                    message: CONNECTIVITY_ERROR.to_string(),
                };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Notifier test double recording every shown alert.
    struct RecordingNotifier {
        permission: Permission,
        requests: usize,
        shown: Vec<RiskAlert>,
    }

    impl RecordingNotifier {
        fn new(permission: Permission) -> Self {
            Self {
                permission,
                requests: 0,
                shown: Vec::new(),
            }
        }
    }

    impl Notifier for RecordingNotifier {
        fn permission(&self) -> Permission {
            self.permission
        }

        fn request_permission(&mut self) -> Permission {
            self.requests += 1;
            self.permission = Permission::Granted;
            self.permission
        }

        fn show(&mut self, alert: &RiskAlert) {
            self.shown.push(alert.clone());
        }
    }

    fn low_risk() -> PredictionResult {
        PredictionResult {
            disease: false,
            message: "Low risk".to_string(),
            confidence: Some(0.92),
        }
    }

    #[test]
    fn test_permission_requested_once_when_undetermined() {
        let workflow = PredictionWorkflow::new(RecordingNotifier::new(Permission::Undetermined));
        assert_eq!(workflow.notifier.requests, 1);

        let workflow = PredictionWorkflow::new(RecordingNotifier::new(Permission::Denied));
        assert_eq!(workflow.notifier.requests, 0);
    }

    #[test]
    fn test_success_scenario() {
        let mut workflow =
            PredictionWorkflow::new(RecordingNotifier::new(Permission::Granted));
        let request = workflow.begin_submit().expect("Should start");
        assert!(workflow.is_submitting());

        let newly = workflow.complete(request, Ok(low_risk()));
        assert!(newly);

        let result = workflow.state().result().expect("Should hold result");
        assert_eq!(result.headline(), "NO HEART DISEASE");
        assert_eq!(result.confidence_percent().as_deref(), Some("92.0%"));

        // Non-interaction-required notification was attempted.
        assert_eq!(workflow.notifier.shown.len(), 1);
        assert!(!workflow.notifier.shown[0].requires_interaction);
    }

    #[test]
    fn test_failure_maps_to_fixed_message_without_notification() {
        let mut workflow =
            PredictionWorkflow::new(RecordingNotifier::new(Permission::Granted));
        let request = workflow.begin_submit().expect("Should start");

        let newly = workflow.complete(request, Err(PredictError("connection refused".into())));
        assert!(!newly);
        assert_eq!(
            workflow.state(),
            &SubmissionState::Failed {
                message: CONNECTIVITY_ERROR.to_string()
            }
        );
        assert!(workflow.notifier.shown.is_empty());

        // The workflow is immediately resubmittable.
        assert!(workflow.begin_submit().is_some());
    }

    #[test]
    fn test_double_submit_is_noop_while_in_flight() {
        let mut workflow =
            PredictionWorkflow::new(RecordingNotifier::new(Permission::Granted));
        let first = workflow.begin_submit().expect("Should start");
        assert!(workflow.begin_submit().is_none());

        workflow.complete(first, Ok(low_risk()));
        assert!(workflow.state().result().is_some());
    }

    #[test]
    fn test_submitting_clears_prior_result() {
        let mut workflow =
            PredictionWorkflow::new(RecordingNotifier::new(Permission::Granted));
        let request = workflow.begin_submit().expect("Should start");
        workflow.complete(request, Ok(low_risk()));
        assert!(workflow.state().result().is_some());

        workflow.begin_submit().expect("Should restart");
        // No stale result alongside the loading state.
        assert!(workflow.state().result().is_none());
        assert!(workflow.is_submitting());
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut workflow =
            PredictionWorkflow::new(RecordingNotifier::new(Permission::Granted));
        let first = workflow.begin_submit().expect("Should start");

        // First request fails; a second submission starts.
        workflow.complete(first, Err(PredictError("timeout".into())));
        let second = workflow.begin_submit().expect("Should restart");

        // A late outcome from the superseded request must not apply.
        let applied = workflow.complete(
            first,
            Ok(PredictionResult {
                disease: true,
                message: "stale".to_string(),
                confidence: None,
            }),
        );
        assert!(!applied);
        assert!(workflow.is_submitting());

        let applied = workflow.complete(second, Ok(low_risk()));
        assert!(applied);
        assert!(!workflow.state().result().expect("Should hold result").disease);
    }

    #[test]
    fn test_no_notification_without_permission() {
        let mut workflow = PredictionWorkflow::new(RecordingNotifier::new(Permission::Denied));
        let request = workflow.begin_submit().expect("Should start");
        workflow.complete(request, Ok(low_risk()));
        assert!(workflow.notifier.shown.is_empty());
    }
}
