#![forbid(unsafe_code)]

pub mod error;
pub mod exam_service;
pub mod upload;

pub use exam_core::Clock;

pub use error::{INVALID_UPLOAD_MESSAGE, UploadError};
pub use exam_service::{ExamIntent, ExamService, UploadOutcome};
pub use upload::{UploadTicket, UploadTracker, parse_upload, read_question_file};
