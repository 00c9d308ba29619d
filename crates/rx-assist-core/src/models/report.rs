//! Evaluation report model.

use serde::{Deserialize, Serialize};

/// Field-wise comparison of a predicted record against ground truth.
///
/// Drug metrics are rounded to 2 decimal places. `drugs_precision` may
/// legitimately exceed 1.0 under the greedy matching policy: a predicted
/// entry is never consumed, so it can match several ground-truth entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    /// Fuzzy similarity of patient names >= 90
    pub patient_name_correct: bool,
    /// Fuzzy similarity of doctor names >= 90
    pub doctor_name_correct: bool,
    /// Fuzzy similarity of dates >= 90
    pub date_correct: bool,
    /// Matched ground-truth entries / predicted list length
    pub drugs_precision: f64,
    /// Matched ground-truth entries / ground-truth list length
    pub drugs_recall: f64,
    /// Harmonic mean of precision and recall, 0.0 when both are 0
    pub drugs_f1: f64,
}

impl EvaluationReport {
    /// True when every scalar field matched.
    pub fn all_fields_correct(&self) -> bool {
        self.patient_name_correct && self.doctor_name_correct && self.date_correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_correct() {
        let report = EvaluationReport {
            patient_name_correct: true,
            doctor_name_correct: true,
            date_correct: true,
            drugs_precision: 1.0,
            drugs_recall: 1.0,
            drugs_f1: 1.0,
        };
        assert!(report.all_fields_correct());

        let partial = EvaluationReport {
            date_correct: false,
            ..report
        };
        assert!(!partial.all_fields_correct());
    }
}
