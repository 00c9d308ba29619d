//! Parsing of model replies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response parsing errors.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

pub type ResponseResult<T> = Result<T, ResponseError>;

/// Whether a user question belongs to the assistant's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Healthcare,
    OffTopic,
}

/// Interpret the topic classifier's one-word reply.
///
/// Anything other than "healthcare" (after trimming and lowercasing) is
/// off-topic, including malformed replies.
pub fn parse_topic(reply: &str) -> Topic {
    if reply.trim().to_lowercase() == "healthcare" {
        Topic::Healthcare
    } else {
        Topic::OffTopic
    }
}

/// Prescription record as returned by the model.
///
/// Mirrors the core interchange shape; the host app converts it to its own
/// record type after parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmRecord {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub drugs: Vec<LlmDrug>,
}

/// A drug entry inside an [`LlmRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmDrug {
    pub drug_name: String,
    pub dosage: String,
    #[serde(default)]
    pub instructions: String,
}

/// Parse a structured record out of a model reply.
///
/// Chat models sometimes wrap the JSON in prose, so this locates the
/// outermost brace pair before deserializing.
pub fn parse_record_response(reply: &str) -> ResponseResult<LlmRecord> {
    let json_start = reply
        .find('{')
        .ok_or_else(|| ResponseError::InvalidFormat("No JSON object found in response".into()))?;
    let json_end = reply
        .rfind('}')
        .ok_or_else(|| ResponseError::InvalidFormat("No closing brace found in response".into()))?;

    if json_end < json_start {
        return Err(ResponseError::InvalidFormat(
            "Closing brace precedes opening brace".into(),
        ));
    }

    let record: LlmRecord = serde_json::from_str(&reply[json_start..=json_end])?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topic() {
        assert_eq!(parse_topic("healthcare"), Topic::Healthcare);
        assert_eq!(parse_topic("  Healthcare \n"), Topic::Healthcare);
        assert_eq!(parse_topic("offtopic"), Topic::OffTopic);
        assert_eq!(parse_topic("I think this is healthcare"), Topic::OffTopic);
        assert_eq!(parse_topic(""), Topic::OffTopic);
    }

    #[test]
    fn test_parse_record_response() {
        let reply = r#"{"patient_name":"John Doe","doctor_name":"Dr Smith","date":"2024-01-01","drugs":[{"drug_name":"Amoxicillin","dosage":"500mg","instructions":"take twice daily"}]}"#;

        let record = parse_record_response(reply).unwrap();
        assert_eq!(record.patient_name, Some("John Doe".into()));
        assert_eq!(record.drugs.len(), 1);
        assert_eq!(record.drugs[0].dosage, "500mg");
    }

    #[test]
    fn test_parse_record_response_with_prose() {
        let reply = r#"Here is the structured prescription:
{"patient_name":null,"doctor_name":null,"date":null,"drugs":[]}
Let me know if you need anything else."#;

        let record = parse_record_response(reply).unwrap();
        assert!(record.patient_name.is_none());
        assert!(record.drugs.is_empty());
    }

    #[test]
    fn test_parse_record_response_missing_instructions_defaults() {
        let reply = r#"{"patient_name":null,"doctor_name":null,"date":null,"drugs":[{"drug_name":"Ibuprofen","dosage":"200mg"}]}"#;

        let record = parse_record_response(reply).unwrap();
        assert_eq!(record.drugs[0].instructions, "");
    }

    #[test]
    fn test_parse_record_response_no_json() {
        let result = parse_record_response("Sorry, I could not read the prescription.");
        assert!(matches!(result, Err(ResponseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_record_response_brace_order() {
        let result = parse_record_response("} nonsense {");
        assert!(matches!(result, Err(ResponseError::InvalidFormat(_))));
    }
}
