//! LLM prompt construction and response parsing for the prescription assistant.
//!
//! The host application sends OCR'd prescription text to a hosted chat model
//! for formatting, topic-gated Q&A, and structured extraction. This crate
//! owns the prompt text and the parsing of model replies; it performs no
//! network calls or inference of its own.

pub mod prompts;
pub mod response;

pub use prompts::*;
pub use response::*;
