use crate::domain::model::FormSubmission;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::{RegistrationError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Posts answers to a spreadsheet-backed form endpoint (a Google Forms
/// `formResponse` URL) as `application/x-www-form-urlencoded`.
pub struct GoogleFormsSink {
    client: Client,
    endpoint: String,
}

impl GoogleFormsSink {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for GoogleFormsSink {
    async fn submit(&self, submission: &FormSubmission) -> Result<()> {
        tracing::debug!(
            "Posting {} answers to: {}",
            submission.len(),
            self.endpoint
        );
        let response = self
            .client
            .post(&self.endpoint)
            .form(&submission.entries)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Form endpoint response status: {}", status);

        if !status.is_success() {
            return Err(RegistrationError::SubmissionRejected {
                status: status.as_u16(),
            });
        }

        tracing::info!("Registration delivered to form endpoint");
        Ok(())
    }
}

/// Logs the payload instead of sending it.
#[derive(Debug, Default)]
pub struct DryRunSink;

#[async_trait]
impl SubmissionSink for DryRunSink {
    async fn submit(&self, submission: &FormSubmission) -> Result<()> {
        tracing::info!("🔍 DRY RUN - {} answers would be sent", submission.len());
        for (entry, value) in &submission.entries {
            tracing::info!("  {} = {}", entry, value);
        }
        tracing::debug!("Payload: {}", serde_json::to_string(submission)?);
        Ok(())
    }
}
