//! Heuristic extraction of prescription fields from raw OCR text.
//!
//! The input has no guaranteed layout, so this is an ordered rule list
//! applied per line, not a parser:
//!
//! 1. line contains `Patient:` → patient name
//! 2. line contains `Doctor:` → doctor name
//! 3. line contains `Date:` → date
//! 4. line contains a digits-then-`mg` token → drug line
//! 5. anything else is ignored
//!
//! First matching rule wins per line. A later marker line overwrites an
//! earlier one (last-write-wins). Extraction is total: text with none of the
//! markers yields an all-`None` record with an empty drug list.

use crate::models::{DrugEntry, StructuredRecord};

const PATIENT_MARKER: &str = "Patient:";
const DOCTOR_MARKER: &str = "Doctor:";
const DATE_MARKER: &str = "Date:";

/// Extract a structured record from raw prescription text.
pub fn extract(raw_text: &str) -> StructuredRecord {
    let mut record = StructuredRecord::default();

    let lines = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for line in lines {
        if let Some(value) = marker_suffix(line, PATIENT_MARKER) {
            record.patient_name = Some(value);
        } else if let Some(value) = marker_suffix(line, DOCTOR_MARKER) {
            record.doctor_name = Some(value);
        } else if let Some(value) = marker_suffix(line, DATE_MARKER) {
            record.date = Some(value);
        } else if has_dosage_token(line) {
            if let Some(entry) = parse_drug_line(line) {
                record.drugs.push(entry);
            }
        }
    }

    record
}

/// Text after the last occurrence of `marker`, trimmed.
fn marker_suffix(line: &str, marker: &str) -> Option<String> {
    line.rfind(marker)
        .map(|pos| line[pos + marker.len()..].trim().to_string())
}

/// True if the line contains digits immediately followed by `mg`
/// (case-insensitive), e.g. "500mg" or "200MG".
fn has_dosage_token(line: &str) -> bool {
    let lower = line.to_lowercase();
    let bytes = lower.as_bytes();

    let mut start = 0;
    while let Some(pos) = lower[start..].find("mg") {
        let at = start + pos;
        if at > 0 && bytes[at - 1].is_ascii_digit() {
            return true;
        }
        start = at + 1;
    }
    false
}

/// Split a drug line on commas into name, dosage, and instructions.
///
/// Lines with fewer than two comma-separated parts fail the minimum-shape
/// check and produce no entry.
fn parse_drug_line(line: &str) -> Option<DrugEntry> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 2 {
        return None;
    }

    Some(DrugEntry {
        drug_name: parts[0].trim().to_string(),
        dosage: parts[1].trim().to_string(),
        instructions: parts[2..].join(",").trim().to_string(),
    })
}
