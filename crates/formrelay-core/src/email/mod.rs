/// Outbound email construction
pub mod composer;
pub mod payload;

pub use composer::{compose_message, compose_raw};
pub use payload::build_outbound_email;
