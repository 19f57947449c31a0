/// Data models for the formrelay system
pub mod config;
pub mod email;
pub mod submission;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use submission::*;
