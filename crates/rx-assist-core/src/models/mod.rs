//! Domain models for the rx-assist system.

mod patient;
mod record;
mod report;

pub use patient::*;
pub use record::*;
pub use report::*;
