//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use exam_core::ValidationError;

/// Message shown to the user for any rejected upload.
pub const INVALID_UPLOAD_MESSAGE: &str =
    "Invalid JSON format. Please upload a valid question file.";

/// Errors emitted while loading a question file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl UploadError {
    /// The message shown to the user. The specific cause only goes to the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        INVALID_UPLOAD_MESSAGE
    }
}
