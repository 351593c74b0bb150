//! Background prediction worker.
//!
//! Runs the blocking network call off the UI thread so the interface stays
//! responsive between submit and completion. The outcome is tagged with its
//! request id so the workflow can discard superseded responses.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::RequestId;
use crate::domain::{PatientPayload, PredictionResult};
use crate::ports::{PredictError, Predictor};

/// Completed request, successful or not.
#[derive(Debug)]
pub struct PredictionOutcome {
    pub request: RequestId,
    pub result: Result<PredictionResult, PredictError>,
}

/// Handle to a running prediction worker.
pub struct PredictionWorkerHandle {
    outcome_rx: Receiver<PredictionOutcome>,
    _handle: JoinHandle<()>,
}

impl PredictionWorkerHandle {
    /// Try to receive the outcome (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<PredictionOutcome> {
        self.outcome_rx.try_recv().ok()
    }
}

/// Spawns one thread per submission; the request runs to completion, there
/// is no cancellation.
pub struct PredictionWorker;

impl PredictionWorker {
    /// Spawn a background prediction request.
    ///
    /// Returns a handle to poll for the outcome.
    pub fn spawn(
        predictor: Arc<dyn Predictor>,
        payload: PatientPayload,
        request: RequestId,
    ) -> PredictionWorkerHandle {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = predictor.predict(&payload);
            let _ = tx.send(PredictionOutcome { request, result });
        });

        PredictionWorkerHandle {
            outcome_rx: rx,
            _handle: handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct CannedPredictor {
        disease: bool,
    }

    impl Predictor for CannedPredictor {
        fn predict(&self, _payload: &PatientPayload) -> Result<PredictionResult, PredictError> {
            Ok(PredictionResult {
                disease: self.disease,
                message: "Low risk".to_string(),
                confidence: Some(0.92),
            })
        }
    }

    #[test]
    fn test_worker_reports_tagged_outcome() {
        let payload = crate::domain::PatientIntake::default()
            .encode()
            .expect("Should encode");

        let mut workflow = crate::application::PredictionWorkflow::new(
            crate::adapters::NoopNotifier,
        );
        let request = workflow.begin_submit().expect("Should start");

        let handle = PredictionWorker::spawn(
            Arc::new(CannedPredictor { disease: false }),
            payload,
            request,
        );

        // Poll like the UI loop does, with a deadline so the test cannot hang.
        let mut outcome = None;
        for _ in 0..100 {
            if let Some(o) = handle.try_recv() {
                outcome = Some(o);
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        let outcome = outcome.expect("Should complete");
        assert_eq!(outcome.request, request);
        assert!(!outcome.result.expect("Should succeed").disease);
    }
}
