//! Devroster Server Library
//!
//! HTTP controller for developer records: form binding, views, redirects with
//! flash messages, and persistence through a [`devroster_core::DevService`].
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod binding;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
pub mod view;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::FlashStore;
pub use state::AppState;
