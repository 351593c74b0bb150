//! Application layer: Use cases orchestrating domain and ports.

mod workflow;

pub use workflow::{
    PredictionWorkflow, RequestId, SubmissionState, CONNECTIVITY_ERROR,
};
