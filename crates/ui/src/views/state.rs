use dioxus::prelude::*;
use services::{ExamIntent, ExamService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// Forward an intent to the service owned by the root view.
///
/// # Errors
///
/// Returns `ViewError::Unknown` if the session rejected the intent; the
/// service has already logged the cause.
pub fn dispatch(mut exam: Signal<ExamService>, intent: ExamIntent) -> Result<(), ViewError> {
    exam.write()
        .dispatch(intent)
        .map_err(|_| ViewError::Unknown)
}
