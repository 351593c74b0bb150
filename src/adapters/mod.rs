//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external systems:
//! - `http`: reqwest client for the remote prediction service
//! - `notify`: desktop notifications via notify-rust (plus a no-op fallback)

pub mod http;
pub mod notify;

pub use http::HttpPredictor;
pub use notify::{DesktopNotifier, NoopNotifier};
