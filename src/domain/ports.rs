use crate::domain::model::{FieldConfig, FieldValue, FormSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of "today" for age calculations.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Draws one labeled control. Implementations must show `value` exactly as
/// given; masking is the form's job, not the renderer's.
pub trait FieldRenderer {
    fn render_field(&self, field: &FieldConfig, value: Option<&FieldValue>) -> String;
}

/// Moves the user to another view once a submission is accepted.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<()>;
}
