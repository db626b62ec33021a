use thiserror::Error;

/// Failures that end a cart request without a server verdict.
///
/// Business rejections (`success: false`) are not errors; they are reported
/// through [`crate::AddOutcome::Rejected`] and [`crate::UpdateOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Response was not readable text: {0}")]
    InvalidResponse(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Item identifier is empty")]
    EmptyItemId,
}
