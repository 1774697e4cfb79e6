use exam_core::{Clock, ExamSession, PhaseKind, QuestionSet, SessionError};

use crate::error::UploadError;
use crate::upload::{UploadTicket, UploadTracker};

/// A user action forwarded from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamIntent {
    Start,
    Select(usize),
    Next,
    Previous,
    GoTo(usize),
    Finish,
    Restart,
    Reset,
}

/// What happened to a completed upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The set was installed and the session is `Ready`.
    Loaded { questions: usize },
    /// The upload failed; the previous session is untouched.
    Rejected,
    /// A newer upload was started before this one finished.
    Discarded,
}

/// Owns the exam session and the upload boundary in front of it.
///
/// All mutation happens through this type on the UI task.
#[derive(Debug)]
pub struct ExamService {
    session: ExamSession,
    uploads: UploadTracker,
    upload_error: Option<&'static str>,
    source: Option<String>,
}

impl Default for ExamService {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl ExamService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            session: ExamSession::with_clock(clock),
            uploads: UploadTracker::new(),
            upload_error: None,
            source: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.session.phase()
    }

    /// User-facing message from the last rejected upload.
    #[must_use]
    pub fn upload_error(&self) -> Option<&'static str> {
        self.upload_error
    }

    /// Name of the file the current set came from.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploads.is_pending()
    }

    /// Install a set that was validated elsewhere (e.g. preloaded at startup).
    pub fn load(&mut self, questions: QuestionSet, source: Option<String>) {
        tracing::info!(
            source = source.as_deref().unwrap_or("<inline>"),
            questions = questions.len(),
            "question set loaded"
        );
        self.session.load(questions);
        self.source = source;
        self.upload_error = None;
    }

    /// Record a rejected upload without touching the session.
    pub fn reject(&mut self, source: &str, err: &UploadError) {
        tracing::warn!(source, error = %err, "question file rejected");
        self.upload_error = Some(err.user_message());
    }

    /// Start an upload; pass the ticket back to [`Self::complete_upload`].
    /// Clears the banner left by an earlier rejected upload.
    pub fn begin_upload(&mut self, source: impl Into<String>) -> UploadTicket {
        self.upload_error = None;
        let ticket = self.uploads.begin(source);
        tracing::debug!(source = ticket.source(), "upload started");
        ticket
    }

    /// Apply the result of an upload, unless a newer upload has started since.
    pub fn complete_upload(
        &mut self,
        ticket: &UploadTicket,
        result: Result<QuestionSet, UploadError>,
    ) -> UploadOutcome {
        if !self.uploads.complete(ticket) {
            tracing::debug!(source = ticket.source(), "discarding superseded upload");
            return UploadOutcome::Discarded;
        }

        match result {
            Ok(questions) => {
                let count = questions.len();
                self.load(questions, Some(ticket.source().to_string()));
                UploadOutcome::Loaded { questions: count }
            }
            Err(err) => {
                self.reject(ticket.source(), &err);
                UploadOutcome::Rejected
            }
        }
    }

    /// Forward a user action to the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the action is not valid in the current phase.
    pub fn dispatch(&mut self, intent: ExamIntent) -> Result<(), SessionError> {
        let from = self.session.phase();
        let result = match intent {
            ExamIntent::Start => self.session.start(),
            ExamIntent::Select(choice) => self.session.select_answer(choice),
            ExamIntent::Next => self.session.next().map(|_| ()),
            ExamIntent::Previous => self.session.previous().map(|_| ()),
            ExamIntent::GoTo(index) => self.session.go_to(index),
            ExamIntent::Finish => self.session.finish(),
            ExamIntent::Restart => self.session.restart(),
            ExamIntent::Reset => {
                if self.uploads.cancel() {
                    tracing::debug!("pending upload abandoned by reset");
                }
                self.session.reset();
                self.source = None;
                Ok(())
            }
        };

        match &result {
            Ok(()) => {
                if matches!(
                    intent,
                    ExamIntent::Start | ExamIntent::Finish | ExamIntent::Restart | ExamIntent::Reset
                ) {
                    self.upload_error = None;
                }
                tracing::debug!(?intent, %from, to = %self.session.phase(), "exam intent applied");
            }
            Err(err) => tracing::warn!(?intent, %from, error = %err, "exam intent rejected"),
        }
        result
    }
}
