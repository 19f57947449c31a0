/// HTML and header sanitization utilities
use crate::constants::FALLBACK_DISPLAY_NAME;

/// Escapes text for embedding in HTML content
///
/// Exactly five characters are replaced; everything else passes through:
///
/// | char | entity   |
/// |------|----------|
/// | `&`  | `&amp;`  |
/// | `<`  | `&lt;`   |
/// | `>`  | `&gt;`   |
/// | `"`  | `&quot;` |
/// | `'`  | `&#39;`  |
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & 'Jerry'</b>"), "&lt;b&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Strips a display name down to alphanumerics and spaces
///
/// Used before the name is placed in a `From` header. Line breaks, angle
/// brackets, quotes, commas and semicolons all go, so a submitted name can
/// never add headers or recipients.
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::sanitize_display_name;
///
/// assert_eq!(sanitize_display_name("Jo\r\nBcc: evil@spam.biz"), "JoBcc evilspambiz");
/// assert_eq!(sanitize_display_name("<<>>"), "Website Visitor");
/// ```
pub fn sanitize_display_name(name: &str) -> String {
    let filtered: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();

    let trimmed = filtered.trim();
    if trimmed.is_empty() {
        FALLBACK_DISPLAY_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
