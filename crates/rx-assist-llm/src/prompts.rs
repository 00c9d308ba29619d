//! Prompt templates for the prescription assistant.
//!
//! Written for a hosted chat model at low temperature; the classifier and
//! extraction prompts constrain the reply format so the parsers in
//! [`crate::response`] stay simple.

/// System prompt for gating questions to healthcare topics.
pub const TOPIC_CLASSIFIER_PROMPT: &str = r#"You are a healthcare topic classifier. Determine if the user's question is related to healthcare, medicine, prescriptions, or patient health.

RETURN ONLY ONE WORD: "healthcare" or "offtopic"

RULES:
- Return "healthcare" for: medications, symptoms, conditions, prescriptions, doctors, medical advice, health concerns
- Return "offtopic" for: general knowledge, geography, history, entertainment, sports, politics, unrelated questions

EXAMPLES:
User: What is this medication for? -> healthcare
User: Do I have any allergies? -> healthcare
User: What's the capital of France? -> offtopic
User: How far is the moon? -> offtopic
User: Can this drug cause drowsiness? -> healthcare"#;

/// System prompt for formatting extracted text into a patient-friendly summary.
pub const FORMATTING_SYSTEM_PROMPT: &str = r#"You are a medical transcription expert. Format the extracted prescription text into a clean, structured, patient-friendly summary.

ORGANIZE THE INFORMATION AS FOLLOWS:

**Patient Information**
- Name, age, and other details found in the text

**Prescription Details**
A markdown table of medications: | Medication | Dosage | Quantity | Instructions |

**Physician/Prescriber Information**
- Doctor, clinic, contact, prescription date

**Additional Notes**
- Special instructions, refills, etc.

RULES:
1. Use clean markdown formatting
2. Be extremely accurate - only include information found in the text
3. If information is missing, leave it blank rather than guessing
4. Make it easy for a patient to understand
5. Use professional medical terminology"#;

/// Reply shown instead of calling the model when a question is off-topic.
pub const OFF_TOPIC_REPLY: &str = "I'm designed to help with healthcare-related questions about \
    your prescriptions and medical needs. Please ask me about medications, symptoms, or your \
    health information.";

/// User prompt for the topic classifier.
pub fn make_classifier_prompt(question: &str) -> String {
    format!("User question: {}", question)
}

/// System prompt for answering a patient's question about their prescription.
pub fn make_analysis_prompt(extracted_text: &str) -> String {
    format!(
        r#"You are a helpful medical assistant. Analyze the extracted prescription text and provide helpful information to the patient.

EXTRACTED PRESCRIPTION TEXT:
{}

Please help the patient understand this prescription. Be clear, concise, and medically accurate."#,
        extracted_text
    )
}

/// User prompt asking the model for the structured JSON record shape.
pub fn make_record_prompt(extracted_text: &str) -> String {
    format!(
        r#"Convert this prescription text into JSON:

"{}"

Return a single JSON object with:
- patient_name: Patient name (null if not found)
- doctor_name: Doctor name (null if not found)
- date: Prescription date as written (null if not found)
- drugs: Array of objects with drug_name, dosage, and instructions (empty string if none)

Return only the JSON object, no other text."#,
        extracted_text
    )
}

/// User prompt for cross-checking a prescription against known allergies.
pub fn make_allergy_prompt(extracted_text: &str, known_allergies: &str) -> String {
    format!(
        r#"The patient has these known allergies:
{}

Review the prescription below and flag any medication that may conflict with those allergies. If there is no conflict, say so plainly.

EXTRACTED PRESCRIPTION TEXT:
{}"#,
        known_allergies, extracted_text
    )
}

/// User prompt for cross-checking a prescription against current medications.
pub fn make_interaction_prompt(extracted_text: &str, current_medications: &str) -> String {
    format!(
        r#"The patient currently takes:
{}

Review the prescription below and flag any potential drug interactions with those medications. If there is no interaction, say so plainly.

EXTRACTED PRESCRIPTION TEXT:
{}"#,
        current_medications, extracted_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_inputs() {
        let analysis = make_analysis_prompt("Patient: John Doe");
        assert!(analysis.contains("Patient: John Doe"));

        let classifier = make_classifier_prompt("What is this medication for?");
        assert!(classifier.contains("What is this medication for?"));

        let allergy = make_allergy_prompt("Amoxicillin, 500mg", "Penicillin");
        assert!(allergy.contains("Penicillin"));
        assert!(allergy.contains("Amoxicillin, 500mg"));
    }

    #[test]
    fn test_record_prompt_names_contract_fields() {
        let prompt = make_record_prompt("text");
        for field in ["patient_name", "doctor_name", "date", "drugs"] {
            assert!(prompt.contains(field), "missing field {}", field);
        }
    }
}
