//! Structured prescription records.
//!
//! [`StructuredRecord`] is the interchange shape between the extractor, the
//! evaluator, and the ground-truth table. Its JSON field names are the
//! compatibility contract with the host application.

use serde::{Deserialize, Serialize};

/// A prescription recovered from raw OCR text.
///
/// Scalar fields are independently optional; `None` means the marker was
/// never seen, which is distinct from an empty value after a marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StructuredRecord {
    /// Text after the `Patient:` marker
    pub patient_name: Option<String>,
    /// Text after the `Doctor:` marker
    pub doctor_name: Option<String>,
    /// Text after the `Date:` marker, stored verbatim (not a parsed date)
    pub date: Option<String>,
    /// Drug entries in order of appearance; duplicates permitted
    #[serde(default)]
    pub drugs: Vec<DrugEntry>,
}

impl StructuredRecord {
    /// True when nothing was recognized in the source text.
    pub fn is_empty(&self) -> bool {
        self.patient_name.is_none()
            && self.doctor_name.is_none()
            && self.date.is_none()
            && self.drugs.is_empty()
    }

    /// Serialize to JSON for the host application.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON produced by this crate or a ground-truth file.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A single drug line from a prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugEntry {
    /// Drug name as written
    pub drug_name: String,
    /// Dosage as free text (e.g. "500mg"); compared by exact equality
    pub dosage: String,
    /// Remaining instructions; may be empty, never null
    pub instructions: String,
}

impl DrugEntry {
    /// Create an entry with no instructions.
    pub fn new(drug_name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            drug_name: drug_name.into(),
            dosage: dosage.into(),
            instructions: String::new(),
        }
    }

    /// Create an entry with instructions.
    pub fn with_instructions(
        drug_name: impl Into<String>,
        dosage: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            drug_name: drug_name.into(),
            dosage: dosage.into(),
            instructions: instructions.into(),
        }
    }
}
