use std::path::Path;

use exam_core::{QuestionSet, lint, validate};

use crate::error::UploadError;

//
// ─── TICKETS ──────────────────────────────────────────────────────────────────
//

/// Identifies one upload. Only the most recently issued ticket may install
/// its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
    source: String,
}

impl UploadTicket {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Issues upload tickets and remembers which one is still pending.
#[derive(Debug, Default)]
pub struct UploadTracker {
    issued: u64,
    pending: Option<u64>,
}

impl UploadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload, superseding any upload still in flight.
    pub fn begin(&mut self, source: impl Into<String>) -> UploadTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        UploadTicket {
            generation: self.issued,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        self.pending == Some(ticket.generation)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forget the pending upload so its completion is discarded. Returns
    /// true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Close the upload if `ticket` is still current. Returns false for stale tickets.
    pub fn complete(&mut self, ticket: &UploadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        true
    }
}

//
// ─── LOADING ──────────────────────────────────────────────────────────────────
//

/// Validate uploaded text, logging content warnings that do not reject the set.
///
/// # Errors
///
/// Returns `UploadError::Invalid` if the text is not a valid question set.
pub fn parse_upload(raw: &str) -> Result<QuestionSet, UploadError> {
    let questions = validate(raw)?;
    for warning in lint(&questions) {
        tracing::warn!(%warning, "question can never be scored as correct");
    }
    Ok(questions)
}

/// Read and validate a question file.
///
/// # Errors
///
/// Returns `UploadError::Read` if the file cannot be read as UTF-8 text.
/// Returns `UploadError::Invalid` if its content is not a valid question set.
pub async fn read_question_file(path: impl AsRef<Path>) -> Result<QuestionSet, UploadError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_upload(&raw)
}
