/// Formrelay Client - browser-side behaviour of the contact site
///
/// The form controller is an explicit state machine driven by `submit()`
/// and the endpoint's response; `render()` projects it into a view the
/// page applies to its DOM. The `site` module holds the remaining page
/// state: theme, mobile navigation and scroll reveal.
pub mod constants;
pub mod controller;
pub mod error;
pub mod mailto;
pub mod site;
pub mod transport;
pub mod validation;

pub use controller::{FormController, FormModel, FormState, FormView, render};
pub use error::ClientError;
pub use transport::{HttpTransport, SubmitTransport};
pub use validation::{FieldError, FormField, FormFields};
