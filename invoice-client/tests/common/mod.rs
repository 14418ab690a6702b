//! Common test utilities for invoice-client integration tests.

#![allow(dead_code)]

use std::net::TcpListener;
use wiremock::{Request, Respond, ResponseTemplate};

/// Responds with the exact bytes of the incoming request body.
pub struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_bytes(request.body.clone())
    }
}

/// A base URL nothing is listening on.
///
/// Binds an ephemeral port and releases it so connections are refused.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
