use std::sync::Arc;

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

// No shared mutable state: every audit request loads its own dataset.
#[derive(Clone)]
pub struct AppState {
    pub cfg: AppConfig,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        Self { cfg }
    }
}
