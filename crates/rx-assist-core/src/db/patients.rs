//! Patient-information database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::PatientInfo;

fn row_to_patient(row: &Row<'_>) -> rusqlite::Result<PatientInfo> {
    Ok(PatientInfo {
        local_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        allergies: row.get(3)?,
        conditions: row.get(4)?,
        surgery_history: row.get(5)?,
        medications: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

const PATIENT_COLUMNS: &str = "local_id, name, age, allergies, conditions, \
                               surgery_history, medications, created_at, updated_at";

impl Database {
    /// Insert a new patient record.
    pub fn insert_patient_info(&self, patient: &PatientInfo) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patient_info (
                local_id, name, age, allergies, conditions,
                surgery_history, medications, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                patient.local_id,
                patient.name,
                patient.age,
                patient.allergies,
                patient.conditions,
                patient.surgery_history,
                patient.medications,
                patient.created_at,
                patient.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing patient record. Returns false if no row matched.
    pub fn update_patient_info(&self, patient: &PatientInfo) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patient_info SET
                name = ?2,
                age = ?3,
                allergies = ?4,
                conditions = ?5,
                surgery_history = ?6,
                medications = ?7,
                updated_at = datetime('now')
            WHERE local_id = ?1
            "#,
            params![
                patient.local_id,
                patient.name,
                patient.age,
                patient.allergies,
                patient.conditions,
                patient.surgery_history,
                patient.medications,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient record by local ID.
    pub fn get_patient_info(&self, local_id: &str) -> DbResult<Option<PatientInfo>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patient_info WHERE local_id = ?"),
                [local_id],
                row_to_patient,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get patient records by exact name.
    pub fn get_patients_by_name(&self, name: &str) -> DbResult<Vec<PatientInfo>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patient_info WHERE name = ? ORDER BY created_at"
        ))?;

        let rows = stmt.query_map([name], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Get patient records by exact age text.
    pub fn get_patients_by_age(&self, age: &str) -> DbResult<Vec<PatientInfo>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patient_info WHERE age = ? ORDER BY name"
        ))?;

        let rows = stmt.query_map([age], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all patient records.
    pub fn list_patient_info(&self) -> DbResult<Vec<PatientInfo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patient_info ORDER BY name"))?;

        let rows = stmt.query_map([], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a patient record. Returns false if no row matched.
    pub fn delete_patient_info(&self, local_id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patient_info WHERE local_id = ?", [local_id])?;
        Ok(rows_affected > 0)
    }
}
