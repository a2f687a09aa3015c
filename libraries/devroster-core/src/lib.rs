//! Devroster Core
//!
//! Domain types, the persistence contract, and error handling shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Dev` (the developer record) and `Gender`
//! - **Service Trait**: `DevService`, the persistence collaborator
//! - **Error Handling**: Unified `DevError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use devroster_core::types::{Dev, Gender};
//!
//! let dev = Dev::new(
//!     "Ada",
//!     7,
//!     "ada@example.com",
//!     Some(Gender::Female),
//!     vec!["Rust".to_string()],
//! );
//! assert_eq!(dev.id, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod service;
pub mod types;

pub use error::{DevError, Result};
pub use service::DevService;
pub use types::{Dev, DevId, Gender};
