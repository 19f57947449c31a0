/// Formrelay Core - Shared library for the formrelay contact-form relay
///
/// This crate contains the submission models, validation and sanitization
/// rules, delivery providers and the relay pipeline used by the endpoint
/// Lambda and the browser-side form controller.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;
pub use services::relay::{ContactRelay, RelayOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
