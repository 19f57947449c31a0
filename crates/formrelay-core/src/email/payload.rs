/// Maps a validated submission to the outbound email payload
use crate::models::{EmailAddress, EmailBody, OutboundEmail, RelaySettings, Submission};
use crate::utils::sanitization::{escape_html, sanitize_display_name};

/// Builds the payload handed to the delivery provider
///
/// The display name is sanitized before it reaches the `From` header, every
/// user-supplied value is escaped in the HTML body, and the plain-text body
/// carries the raw values.
pub fn build_outbound_email(submission: &Submission, settings: &RelaySettings) -> OutboundEmail {
    let display_name = sanitize_display_name(&submission.name);

    OutboundEmail {
        from: EmailAddress::with_name(&settings.sender, display_name),
        to: EmailAddress::new(&settings.destination),
        reply_to: EmailAddress::new(&submission.email),
        subject: format!("{} {}", settings.subject_label, submission.subject),
        body: EmailBody {
            text: text_body(submission),
            html: html_body(submission),
        },
    }
}

fn text_body(submission: &Submission) -> String {
    format!(
        "New contact form submission\n\nName: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, submission.subject, submission.message
    )
}

fn html_body(submission: &Submission) -> String {
    let message = escape_html(&submission.message).replace('\n', "<br>");

    format!(
        concat!(
            "<h2>New contact form submission</h2>",
            "<p><strong>Name:</strong> {}</p>",
            "<p><strong>Email:</strong> {}</p>",
            "<p><strong>Subject:</strong> {}</p>",
            "<p><strong>Message:</strong></p>",
            "<p>{}</p>"
        ),
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(&submission.subject),
        message
    )
}
