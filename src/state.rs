use crate::config::AppConfig;

/// Shared handler state. Deliberately thin: the corpus is re-read from disk
/// on every request, so no document snapshot or index lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
