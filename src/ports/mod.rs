//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (prediction service,
//! notification surface).

mod notifier;
mod predictor;

pub use notifier::{Notifier, Permission, RiskAlert, ALERT_TAG};
pub use predictor::{PredictError, Predictor};
