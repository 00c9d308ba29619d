//! Rx-Assist Core Library
//!
//! Prescription structuring and offline evaluation for an OCR + LLM
//! prescription assistant.
//!
//! # Architecture
//!
//! ```text
//! Image → OCR (external) → raw text
//!                             │
//!                     extract::extract
//!                             │
//!                      StructuredRecord ──────────► host app (display,
//!                             │                     LLM formatting, Q&A)
//!              ground truth ──┤
//!        (eval::ground_truths)│  offline evaluation
//!                             ▼
//!                      eval::evaluate
//!                             │
//!                      EvaluationReport
//! ```
//!
//! Patient demographics entered in the host app's form are persisted through
//! [`db::Database`], a small SQLite store.
//!
//! # Core Principle
//!
//! **Extraction and evaluation are total.** Text with no recognizable
//! structure yields an empty record and near-zero scores, never an error.
//!
//! # Modules
//!
//! - [`extract`]: line-oriented heuristic extraction of prescription fields
//! - [`eval`]: fuzzy-matching evaluation against curated ground truth
//! - [`models`]: domain types (StructuredRecord, DrugEntry, EvaluationReport, PatientInfo)
//! - [`db`]: SQLite patient-record store

pub mod db;
pub mod eval;
pub mod extract;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use eval::{evaluate, ground_truth_for, ground_truths, similarity};
pub use extract::extract;
pub use models::{DrugEntry, EvaluationReport, PatientInfo, StructuredRecord};
