//! Domain layer: Core business types.

mod patient;
mod prediction;
mod suggestion;

pub use patient::{CodecError, FieldKind, FieldSpec, PatientIntake, PatientPayload, FIELDS};
pub use prediction::PredictionResult;
pub use suggestion::{suggestions_for, SuggestionBundle, Urgency};
