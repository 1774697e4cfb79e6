use std::sync::{Arc, Mutex};

use services::{Clock, ExamService};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    /// Path shown in the upload field on launch.
    fn default_path(&self) -> Option<String>;

    /// Service prepared by the launcher (e.g. with a preloaded file). Taken once.
    fn take_prepared(&self) -> Option<ExamService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    default_path: Option<String>,
    prepared: Arc<Mutex<Option<ExamService>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            default_path: app.default_path(),
            prepared: Arc::new(Mutex::new(app.take_prepared())),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn default_path(&self) -> Option<String> {
        self.default_path.clone()
    }

    /// The prepared service on first call, a fresh one afterwards.
    #[must_use]
    pub fn take_service(&self) -> ExamService {
        self.prepared
            .lock()
            .ok()
            .and_then(|mut prepared| prepared.take())
            .unwrap_or_else(|| ExamService::new(self.clock))
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
