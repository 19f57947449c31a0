/// Client-side text and tuning values
///
/// Field messages are shown beside the offending input; they never come
/// from the server.

// ============================================================================
// Field Validation Messages
// ============================================================================

pub const MSG_ENTER_NAME: &str = "Please enter your name.";

pub const MSG_ENTER_EMAIL: &str = "Please enter your email address.";

pub const MSG_ENTER_VALID_EMAIL: &str = "Please enter a valid email address.";

pub const MSG_ENTER_SUBJECT: &str = "Please enter a subject.";

pub const MSG_ENTER_MESSAGE: &str = "Please enter a message.";

/// Shown when a failed submission carries no server message
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong.";

// ============================================================================
// Submit Button
// ============================================================================

pub const LABEL_SENDING: &str = "Sending...";

pub const LABEL_SEND: &str = "Send Message →";

// ============================================================================
// Site
// ============================================================================

/// Key the theme preference is persisted under
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visible ratio at which an observed element is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const REVEAL_CLASS: &str = "anim-fade-up";

/// Height reserved for the sticky header when scrolling to a section
pub const STICKY_HEADER_OFFSET: f64 = 40.0;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
