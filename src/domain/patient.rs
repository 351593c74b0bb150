//! Patient intake types for heart disease risk prediction.
//!
//! Fields follow the Cleveland heart disease dataset that the remote model
//! was trained on.

use serde::{Deserialize, Serialize};

/// Raw patient form input, one text buffer per clinical field.
///
/// Values stay textual until [`PatientIntake::encode`] coerces them into a
/// [`PatientPayload`]. Range constraints live at the edit boundary (see
/// [`FIELDS`]); the codec only parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIntake {
    /// Age in years (1-120)
    pub age: String,
    /// Sex: 1 = male, 0 = female
    pub sex: String,
    /// Chest pain type (0-3)
    pub cp: String,
    /// Resting blood pressure in mm Hg (80-200)
    pub trestbps: String,
    /// Serum cholesterol in mg/dl (100-600)
    pub chol: String,
    /// Fasting blood sugar > 120 mg/dl: 1 = yes, 0 = no
    pub fbs: String,
    /// Resting electrocardiographic results (0-2)
    pub restecg: String,
    /// Maximum heart rate achieved (60-220)
    pub thalach: String,
    /// Exercise induced angina: 1 = yes, 0 = no
    pub exang: String,
    /// ST depression induced by exercise (0-10)
    pub oldpeak: String,
    /// Slope of peak exercise ST segment (0-2)
    pub slope: String,
    /// Number of major vessels colored by fluoroscopy (0-4)
    pub ca: String,
    /// Thalassemia (0-3)
    pub thal: String,
}

impl Default for PatientIntake {
    /// Sample patient data, so the form is submittable without prior edits.
    fn default() -> Self {
        Self::from_values(&FIELDS.map(|f| f.default.to_string()))
            .expect("field table matches intake arity")
    }
}

/// The coerced, typed request body sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientPayload {
    pub age: i32,
    pub sex: i32,
    pub cp: i32,
    pub trestbps: i32,
    pub chol: i32,
    pub fbs: i32,
    pub restecg: i32,
    pub thalach: i32,
    pub exang: i32,
    pub oldpeak: f64,
    pub slope: i32,
    pub ca: i32,
    pub thal: i32,
}

/// A form field that could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: not a valid number: {value:?}")]
pub struct CodecError {
    pub field: &'static str,
    pub value: String,
}

fn parse_int(field: &'static str, raw: &str) -> Result<i32, CodecError> {
    raw.trim().parse().map_err(|_| CodecError {
        field,
        value: raw.to_string(),
    })
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, CodecError> {
    let value: f64 = raw.trim().parse().map_err(|_| CodecError {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(CodecError {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

impl PatientIntake {
    /// Coerce the raw form fields into a typed payload.
    ///
    /// Deterministic and pure: integer fields use base-10 parsing, `oldpeak`
    /// uses decimal parsing. No range re-validation happens here.
    ///
    /// # Errors
    /// Returns [`CodecError`] naming the first field that fails to parse.
    /// Malformed input is rejected outright; no NaN sentinel ever enters a
    /// payload.
    pub fn encode(&self) -> Result<PatientPayload, CodecError> {
        Ok(PatientPayload {
            age: parse_int("age", &self.age)?,
            sex: parse_int("sex", &self.sex)?,
            cp: parse_int("cp", &self.cp)?,
            trestbps: parse_int("trestbps", &self.trestbps)?,
            chol: parse_int("chol", &self.chol)?,
            fbs: parse_int("fbs", &self.fbs)?,
            restecg: parse_int("restecg", &self.restecg)?,
            thalach: parse_int("thalach", &self.thalach)?,
            exang: parse_int("exang", &self.exang)?,
            oldpeak: parse_float("oldpeak", &self.oldpeak)?,
            slope: parse_int("slope", &self.slope)?,
            ca: parse_int("ca", &self.ca)?,
            thal: parse_int("thal", &self.thal)?,
        })
    }

    /// Build an intake from values ordered as in [`FIELDS`].
    ///
    /// # Errors
    /// Returns error if the slice length is not 13.
    pub fn from_values(values: &[String]) -> Result<Self, String> {
        if values.len() != FIELDS.len() {
            return Err(format!("Expected {} fields, got {}", FIELDS.len(), values.len()));
        }

        Ok(Self {
            age: values[0].clone(),
            sex: values[1].clone(),
            cp: values[2].clone(),
            trestbps: values[3].clone(),
            chol: values[4].clone(),
            fbs: values[5].clone(),
            restecg: values[6].clone(),
            thalach: values[7].clone(),
            exang: values[8].clone(),
            oldpeak: values[9].clone(),
            slope: values[10].clone(),
            ca: values[11].clone(),
            thal: values[12].clone(),
        })
    }
}

/// How a field is edited and constrained at the form boundary.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Free numeric entry within an inclusive range.
    Numeric { min: f64, max: f64, decimal: bool },
    /// One of a fixed set of coded options, `(code, label)`.
    Choice(&'static [(&'static str, &'static str)]),
}

/// Edit-boundary metadata for one clinical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

impl FieldSpec {
    /// Validate a raw value against this field's edit-time constraints.
    ///
    /// # Errors
    /// Returns a user-facing message when the value is empty, unparseable
    /// or out of the declared domain.
    pub fn validate(&self, raw: &str) -> Result<(), String> {
        match self.kind {
            FieldKind::Numeric { min, max, .. } => {
                let value: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| format!("{}: invalid number", self.label))?;
                if value < min || value > max {
                    return Err(format!(
                        "{}: value must be between {} and {}",
                        self.label, min, max
                    ));
                }
                Ok(())
            }
            FieldKind::Choice(options) => {
                if options.iter().any(|(code, _)| *code == raw) {
                    Ok(())
                } else {
                    Err(format!("{}: not a valid option", self.label))
                }
            }
        }
    }

    /// Display label for a coded value, falling back to the raw code.
    #[must_use]
    pub fn option_label<'a>(&self, raw: &'a str) -> &'a str {
        match self.kind {
            FieldKind::Choice(options) => options
                .iter()
                .find(|(code, _)| *code == raw)
                .map_or(raw, |(_, label)| label),
            FieldKind::Numeric { .. } => raw,
        }
    }
}

const YES_NO: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

/// The thirteen clinical fields, in payload order.
pub static FIELDS: [FieldSpec; 13] = [
    FieldSpec {
        name: "age",
        label: "Age",
        hint: "years (1-120)",
        kind: FieldKind::Numeric { min: 1.0, max: 120.0, decimal: false },
        default: "45",
    },
    FieldSpec {
        name: "sex",
        label: "Sex",
        hint: "",
        kind: FieldKind::Choice(&[("1", "Male"), ("0", "Female")]),
        default: "1",
    },
    FieldSpec {
        name: "cp",
        label: "Chest Pain Type",
        hint: "",
        kind: FieldKind::Choice(&[
            ("0", "Typical Angina"),
            ("1", "Atypical Angina"),
            ("2", "Non-anginal Pain"),
            ("3", "Asymptomatic"),
        ]),
        default: "0",
    },
    FieldSpec {
        name: "trestbps",
        label: "Resting Blood Pressure",
        hint: "mm Hg (80-200)",
        kind: FieldKind::Numeric { min: 80.0, max: 200.0, decimal: false },
        default: "120",
    },
    FieldSpec {
        name: "chol",
        label: "Cholesterol",
        hint: "mg/dl (100-600)",
        kind: FieldKind::Numeric { min: 100.0, max: 600.0, decimal: false },
        default: "200",
    },
    FieldSpec {
        name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        hint: "",
        kind: FieldKind::Choice(YES_NO),
        default: "0",
    },
    FieldSpec {
        name: "restecg",
        label: "Resting ECG Results",
        hint: "",
        kind: FieldKind::Choice(&[
            ("0", "Normal"),
            ("1", "ST-T Wave Abnormality"),
            ("2", "Left Ventricular Hypertrophy"),
        ]),
        default: "0",
    },
    FieldSpec {
        name: "thalach",
        label: "Maximum Heart Rate",
        hint: "bpm (60-220)",
        kind: FieldKind::Numeric { min: 60.0, max: 220.0, decimal: false },
        default: "150",
    },
    FieldSpec {
        name: "exang",
        label: "Exercise Induced Angina",
        hint: "",
        kind: FieldKind::Choice(YES_NO),
        default: "0",
    },
    FieldSpec {
        name: "oldpeak",
        label: "ST Depression",
        hint: "oldpeak (0-10)",
        kind: FieldKind::Numeric { min: 0.0, max: 10.0, decimal: true },
        default: "0.0",
    },
    FieldSpec {
        name: "slope",
        label: "Peak Exercise ST Slope",
        hint: "",
        kind: FieldKind::Choice(&[
            ("0", "Upsloping"),
            ("1", "Flat"),
            ("2", "Downsloping"),
        ]),
        default: "0",
    },
    FieldSpec {
        name: "ca",
        label: "Major Vessels (0-4)",
        hint: "",
        kind: FieldKind::Choice(&[
            ("0", "0"),
            ("1", "1"),
            ("2", "2"),
            ("3", "3"),
            ("4", "4"),
        ]),
        default: "0",
    },
    FieldSpec {
        name: "thal",
        label: "Thalassemia",
        hint: "",
        kind: FieldKind::Choice(&[
            ("0", "Normal"),
            ("1", "Fixed Defect"),
            ("2", "Reversible Defect"),
            ("3", "Not Described"),
        ]),
        default: "2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_intake_encodes() {
        let payload = PatientIntake::default().encode().expect("Should encode");
        assert_eq!(payload.age, 45);
        assert_eq!(payload.sex, 1);
        assert_eq!(payload.cp, 0);
        assert_eq!(payload.trestbps, 120);
        assert_eq!(payload.chol, 200);
        assert_eq!(payload.thalach, 150);
        assert!((payload.oldpeak - 0.0).abs() < f64::EPSILON);
        assert_eq!(payload.thal, 2);
    }

    #[test]
    fn test_encode_is_exact_and_idempotent() {
        let mut intake = PatientIntake::default();
        intake.age = "63".to_string();
        intake.chol = "233".to_string();
        intake.oldpeak = "2.3".to_string();

        let first = intake.encode().expect("Should encode");
        let second = intake.encode().expect("Should encode");
        assert_eq!(first, second);
        assert_eq!(first.age, 63);
        assert_eq!(first.chol, 233);
        assert!((first.oldpeak - 2.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_encode_rejects_malformed_field() {
        let mut intake = PatientIntake::default();
        intake.trestbps = "abc".to_string();

        let err = intake.encode().expect_err("Should reject");
        assert_eq!(err.field, "trestbps");
    }

    #[test]
    fn test_encode_rejects_empty_field() {
        let mut intake = PatientIntake::default();
        intake.oldpeak = String::new();

        let err = intake.encode().expect_err("Should reject");
        assert_eq!(err.field, "oldpeak");
    }

    #[test]
    fn test_field_validation_ranges() {
        let age = &FIELDS[0];
        assert!(age.validate("45").is_ok());
        assert!(age.validate("0").is_err());
        assert!(age.validate("121").is_err());

        let sex = &FIELDS[1];
        assert!(sex.validate("1").is_ok());
        assert!(sex.validate("2").is_err());
    }

    #[test]
    fn test_payload_serializes_with_expected_keys() {
        let payload = PatientIntake::default().encode().expect("Should encode");
        let json = serde_json::to_value(&payload).expect("Should serialize");

        assert_eq!(json["age"], 45);
        assert_eq!(json["oldpeak"], 0.0);
        assert!(json.get("thal").is_some());
        assert_eq!(json.as_object().map(|o| o.len()), Some(13));
    }

    #[test]
    fn test_option_label_lookup() {
        let cp = &FIELDS[2];
        assert_eq!(cp.option_label("0"), "Typical Angina");
        assert_eq!(cp.option_label("3"), "Asymptomatic");
    }
}
