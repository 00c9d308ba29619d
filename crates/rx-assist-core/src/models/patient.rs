//! Patient demographic models.

use serde::{Deserialize, Serialize};

/// Patient information entered through the host app's form.
///
/// All medical-history fields are free text, matching the form they come
/// from; none of them is interpreted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientInfo {
    /// Local UUID, generated on creation
    pub local_id: String,
    /// Patient name
    pub name: String,
    /// Age as entered (free text)
    pub age: Option<String>,
    /// Known allergies
    pub allergies: Option<String>,
    /// Pre-existing conditions
    pub conditions: Option<String>,
    /// Surgery history
    pub surgery_history: Option<String>,
    /// Current medications and dosages
    pub medications: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl PatientInfo {
    /// Create a new patient record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            local_id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            age: None,
            allergies: None,
            conditions: None,
            surgery_history: None,
            medications: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = PatientInfo::new("Armande Cegna");
        assert_eq!(patient.name, "Armande Cegna");
        assert!(patient.age.is_none());
        assert_eq!(patient.local_id.len(), 36); // UUID format
        assert_eq!(patient.created_at, patient.updated_at);
    }
}
