//! SQLite schema definition.

/// Complete database schema for rx-assist.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patient Information
-- ============================================================================

CREATE TABLE IF NOT EXISTS patient_info (
    local_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age TEXT,
    allergies TEXT,
    conditions TEXT,
    surgery_history TEXT,
    medications TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patient_info_name ON patient_info(name);
CREATE INDEX IF NOT EXISTS idx_patient_info_age ON patient_info(age);
"#;
