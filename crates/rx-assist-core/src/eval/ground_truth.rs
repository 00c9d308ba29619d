//! Hand-curated ground-truth records for offline evaluation.
//!
//! Keyed by the uploaded file's name, which is how the host app looks up the
//! reference record after OCR.

use std::collections::HashMap;

use crate::models::{DrugEntry, StructuredRecord};

/// All ground-truth records, keyed by prescription file name.
pub fn ground_truths() -> HashMap<String, StructuredRecord> {
    let mut truths = HashMap::new();

    truths.insert(
        "rx_001.jpg".to_string(),
        StructuredRecord {
            patient_name: Some("Prateek Goel".into()),
            doctor_name: Some("Dr Ketan Dave".into()),
            date: Some("2024-08-15".into()),
            drugs: vec![
                DrugEntry::with_instructions("Amoxicillin", "500mg", "Take twice daily"),
                DrugEntry::with_instructions(
                    "Ibuprofen",
                    "200mg",
                    "Take after meals, three times daily",
                ),
            ],
        },
    );

    // Add more prescriptions here

    truths
}

/// Look up the ground truth for an uploaded file, if one is defined.
pub fn ground_truth_for(file_name: &str) -> Option<StructuredRecord> {
    ground_truths().remove(file_name)
}
