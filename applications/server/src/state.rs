/// Shared application state
use crate::services::FlashStore;
use devroster_core::DevService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub devs: Arc<dyn DevService>,
    pub flash: Arc<FlashStore>,
}

impl AppState {
    pub fn new(devs: Arc<dyn DevService>, flash: Arc<FlashStore>) -> Self {
        Self { devs, flash }
    }
}
