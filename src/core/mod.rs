pub mod age_gate;
pub mod engine;
pub mod form;
pub mod normalizer;

pub use crate::domain::model::{FieldConfig, FieldValue, FieldVariant, FormSubmission};
pub use crate::domain::ports::{Clock, FieldRenderer, Navigator, SubmissionSink};
pub use crate::utils::error::Result;
