//! Common test utilities for client integration tests
#![allow(dead_code)]

use formrelay_client::{FormController, FormField, HttpTransport};
use wiremock::MockServer;

pub async fn controller_for(server: &MockServer) -> FormController<HttpTransport> {
    let transport = HttpTransport::for_origin(&server.uri()).unwrap();
    FormController::new(transport)
}

pub fn fill<T: formrelay_client::SubmitTransport>(controller: &mut FormController<T>) {
    controller.set_field(FormField::Name, "Jo");
    controller.set_field(FormField::Email, "jo@example.com");
    controller.set_field(FormField::Subject, "Hi");
    controller.set_field(FormField::Message, "Hello");
}
