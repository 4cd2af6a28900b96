//! Shared test utilities for command testing.
//!
//! Provides a harness wired to a wiremock server plus mock builders and
//! fixtures for the SSH key endpoints.

use std::sync::Arc;

use ionc_core::config::MemoryConfig;
use ionc_core::iostreams::TestOutput;
use ionc_core::prompter::StubPrompter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// User id of the logged-in test account.
pub const TEST_USER_ID: &str = "42";
/// Session token of the logged-in test account.
pub const TEST_TOKEN: &str = "test_token";

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
    /// Stub prompter for providing test answers.
    pub prompter: Arc<StubPrompter>,
}

impl TestHarness {
    /// Create a harness logged in as the test user, non-interactive.
    pub async fn new() -> Self {
        Self::with_config(
            MemoryConfig::new()
                .with_user(TEST_USER_ID, "me@example.com")
                .with_token(TEST_TOKEN),
        )
        .await
    }

    /// Create a harness logged in as the test user with prompting available.
    pub async fn interactive() -> Self {
        Self::new().await.into_interactive()
    }

    /// Create a harness with a custom `MemoryConfig`.
    ///
    /// The API URL always points at the harness's mock server.
    pub async fn with_config(config: MemoryConfig) -> Self {
        let server = MockServer::start().await;
        let (factory, output) = Factory::test();
        let (factory, prompter) = factory.with_stub_prompter();
        let factory = factory.with_config(Box::new(config.with_api_url(&server.uri())));

        Self {
            factory,
            output,
            server,
            prompter,
        }
    }

    /// Make stdin and stdout look like a terminal and allow prompts.
    #[must_use]
    pub fn into_interactive(mut self) -> Self {
        self.factory.io.set_stdin_tty(true);
        self.factory.io.set_stdout_tty(true);
        self.factory.io.set_never_prompt(false);
        self
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }

    /// Number of requests the mock server has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |reqs| reqs.len())
    }
}

// --- Wiremock helpers ---

/// Wrap a payload in the API's success envelope.
pub fn api_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "meta": { "status": 200, "version": "2.0.0-sdlc" },
        "data": data,
    })
}

/// Wrap a message in the API's error envelope.
pub fn api_error(status: u16, message: &str) -> serde_json::Value {
    serde_json::json!({
        "meta": { "status": status, "version": "2.0.0-sdlc" },
        "error": { "type": "ApiError", "message": message },
    })
}

/// Build a single key fixture.
pub fn ssh_key_fixture(id: &str, fingerprint: &str, name: &str, annotation: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "pubkey": format!("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAI{id} {annotation}"),
        "fingerprint": fingerprint,
        "name": name,
        "annotation": annotation,
        "created": "2024-01-15T10:00:00Z",
        "updated": "2024-01-15T10:00:00Z",
    })
}

/// Mount a mock for the test user's key list, expected `times` times.
pub async fn mock_list_ssh_keys(server: &MockServer, body: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{TEST_USER_ID}/sshkeys")))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .named("list ssh keys")
        .mount(server)
        .await;
}

/// Mount a mock for deleting one of the test user's keys, expected `times` times.
pub async fn mock_delete_ssh_key(server: &MockServer, key_id: &str, status: u16, times: u64) {
    let template = if status == 204 {
        ResponseTemplate::new(status)
    } else {
        ResponseTemplate::new(status).set_body_json(api_error(status, "Key not found."))
    };
    Mock::given(method("DELETE"))
        .and(path(format!("/users/{TEST_USER_ID}/sshkeys/{key_id}")))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(template)
        .expect(times)
        .named("delete ssh key")
        .mount(server)
        .await;
}

/// Mount a guard asserting no DELETE request reaches the server.
pub async fn expect_no_delete(server: &MockServer) {
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .named("no delete")
        .mount(server)
        .await;
}
