/// Delivery providers, configuration and the relay pipeline
pub mod config;
pub mod console;
pub mod dns;
pub mod relay;
pub mod resend;
pub mod sender;
pub mod ses;
pub mod smtp;

// Re-export service traits
pub use config::ConfigProvider;
pub use dns::DomainVerifier;
pub use sender::EmailSender;
