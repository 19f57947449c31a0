/// Email composer using lettre crate
use crate::error::RelayError;
use crate::models::{EmailAddress, OutboundEmail};
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};

fn to_mailbox(addr: &EmailAddress) -> Result<Mailbox, RelayError> {
    let address = addr
        .address
        .parse()
        .map_err(|e| RelayError::Delivery(format!("Invalid email address: {}", e)))?;
    Ok(Mailbox::new(addr.name.clone(), address))
}

/// Builds a `multipart/alternative` message with text and HTML parts
pub fn compose_message(email: &OutboundEmail) -> Result<Message, RelayError> {
    let message = Message::builder()
        .from(to_mailbox(&email.from)?)
        .to(to_mailbox(&email.to)?)
        .reply_to(to_mailbox(&email.reply_to)?)
        .subject(&email.subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(email.body.text.clone()))
                .singlepart(SinglePart::html(email.body.html.clone())),
        )?;

    tracing::debug!(
        subject_len = email.subject.len(),
        "Composed contact email"
    );

    Ok(message)
}

/// Raw RFC 5322 bytes, for providers that accept a complete message
pub fn compose_raw(email: &OutboundEmail) -> Result<Vec<u8>, RelayError> {
    Ok(compose_message(email)?.formatted())
}
