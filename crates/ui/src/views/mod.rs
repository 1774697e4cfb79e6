mod in_progress;
mod pre_exam;
mod results;
pub mod state;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use in_progress::InProgressView;
pub use pre_exam::PreExamView;
pub use results::ResultsView;
pub use state::{ViewError, dispatch};
pub use upload::{UploadForm, UploadView};
