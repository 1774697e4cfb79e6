pub mod app;
pub mod context;
pub mod views;
pub mod vm;

pub use app::{App, ExamRoot};
pub use context::{AppContext, UiApp, build_app_context};
