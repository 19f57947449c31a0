/// Serverless fallback: hand the message to the visitor's mail client
///
/// Instead of posting, the form builds a pre-filled `mailto:` link and is
/// swapped for a confirmation panel. Going back restores an empty form.
use crate::validation::{self, FieldError, FormField, FormFields};
use serde::Serialize;
use url::form_urlencoded::byte_serialize;

/// Percent-encodes a query value, spaces as `%20`
///
/// Mail clients do not decode `+` as a space in `mailto:` headers.
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Builds the link for already-validated fields
///
/// ```
/// use formrelay_client::mailto::mailto_link;
/// use formrelay_client::FormFields;
///
/// let fields = FormFields {
///     name: "Jo".into(),
///     email: "jo@example.com".into(),
///     subject: "Hi there".into(),
///     message: "Hello".into(),
///     website: String::new(),
/// };
/// let link = mailto_link("hello@example.com", &fields);
/// assert!(link.starts_with("mailto:hello@example.com?subject=Hi%20there&body="));
/// ```
pub fn mailto_link(destination: &str, fields: &FormFields) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        fields.name, fields.email, fields.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        destination,
        encode(&fields.subject),
        encode(&body)
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum MailtoPanel {
    Form,
    Confirmation { href: String },
}

/// Form state for the mail-client fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoForm {
    destination: String,
    pub fields: FormFields,
    pub errors: Vec<FieldError>,
    pub focus: Option<FormField>,
    pub panel: MailtoPanel,
}

impl MailtoForm {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            fields: FormFields::default(),
            errors: Vec::new(),
            focus: None,
            panel: MailtoPanel::Form,
        }
    }

    /// Validates the form and, if valid, shows the confirmation panel
    ///
    /// Returns the link the page should open.
    pub fn submit(&mut self) -> Option<String> {
        self.errors.clear();
        self.focus = None;

        self.fields = self.fields.trimmed();
        self.errors = validation::validate(&self.fields);

        if let Some(first) = self.errors.first() {
            self.focus = Some(first.field);
            return None;
        }

        let href = mailto_link(&self.destination, &self.fields);
        self.panel = MailtoPanel::Confirmation { href: href.clone() };
        Some(href)
    }

    /// Returns from the confirmation panel to an empty form
    pub fn back(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
        self.focus = None;
        self.panel = MailtoPanel::Form;
    }
}
