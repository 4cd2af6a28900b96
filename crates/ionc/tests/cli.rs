//! End-to-end tests for the `ionc` binary.
//!
//! Each test runs the compiled binary against an isolated config directory
//! and, where the API is needed, a wiremock server.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an `ionc` command isolated from the user's environment.
fn ionc(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ionc").expect("binary should be built");
    cmd.env("IONC_CONFIG_DIR", config_dir)
        .env_remove("IONC_TOKEN")
        .env_remove("IONC_API_URL")
        .env_remove("IONC_PROMPT_DISABLED")
        .env_remove("IONC_DEBUG");
    cmd
}

fn write_config(dir: &Path, api_url: &str) {
    let content = format!("user:\n  id: \"42\"\n  email: me@example.com\nurls:\n  api: {api_url}\n");
    std::fs::write(dir.join("config.yml"), content).expect("config should be written");
}

/// Run a blocking assertion without stalling the mock server's runtime.
async fn run_blocking<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("command task should not panic");
}

// --- Argument parsing ---

#[test]
fn test_should_show_key_id_in_delete_help() {
    let dir = tempfile::tempdir().unwrap();
    ionc(dir.path())
        .args(["ssh", "delete", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY_ID"));
}

#[test]
fn test_should_reject_empty_key_id() {
    let dir = tempfile::tempdir().unwrap();
    ionc(dir.path())
        .args(["ssh", "delete", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY_ID"));
}

#[test]
fn test_should_print_version() {
    let dir = tempfile::tempdir().unwrap();
    ionc(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ionc "));
}

// --- Failure modes without network ---

#[test]
fn test_should_exit_with_auth_code_when_not_logged_in() {
    let dir = tempfile::tempdir().unwrap();
    ionc(dir.path())
        .args(["ssh", "delete", "abc123"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
fn test_should_require_key_id_without_terminal() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "http://127.0.0.1:9");
    ionc(dir.path())
        .env("IONC_TOKEN", "tok")
        .args(["ssh", "delete"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "KEY_ID required when not running interactively",
        ));
}

#[test]
fn test_should_report_unreadable_config_as_auth_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.yml"), "user: [unterminated\n").unwrap();
    ionc(dir.path())
        .args(["ssh", "delete", "abc123"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unable to load configuration"));
}

// --- Against a mock API ---

#[tokio::test(flavor = "multi_thread")]
async fn test_should_delete_key_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/42/sshkeys/abc123"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &server.uri());
    let config_dir = dir.path().to_path_buf();

    run_blocking(move || {
        ionc(&config_dir)
            .env("IONC_TOKEN", "tok")
            .args(["ssh", "delete", "abc123"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Your public key (abc123) has been deleted.",
            ));
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_should_exit_with_auth_code_on_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "Token expired." }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &server.uri());
    let config_dir = dir.path().to_path_buf();

    run_blocking(move || {
        ionc(&config_dir)
            .env("IONC_TOKEN", "tok")
            .args(["ssh", "delete", "abc123"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("Token expired."));
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_should_list_keys_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/42/sshkeys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": { "status": 200 },
            "data": [
                { "id": "k1", "fingerprint": "AA:BB", "name": "laptop", "annotation": "me@host" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &server.uri());
    let config_dir = dir.path().to_path_buf();

    run_blocking(move || {
        ionc(&config_dir)
            .env("IONC_TOKEN", "tok")
            .args(["ssh", "ls", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"id\": \"k1\""));
    })
    .await;
}
