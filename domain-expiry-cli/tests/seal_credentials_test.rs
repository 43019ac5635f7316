//! Tests for the `seal-credentials` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use domain_expiry_core::{crypto, SealedVault};

fn seal(input: &str, passphrase: Option<&str>) -> std::process::Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_seal-credentials"));
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG");
    match passphrase {
        Some(p) => command.env("DOMAIN_EXPIRY_PASSPHRASE", p),
        None => command.env_remove("DOMAIN_EXPIRY_PASSPHRASE"),
    };

    let mut child = command.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn sealed_output_opens_with_same_passphrase() {
    let output = seal(
        r#"{"api_user": "alice", "api_key": "0123456789abcdef", "client_ip": "203.0.113.7"}"#,
        Some("correct horse"),
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("0123456789abcdef"));

    let vault: SealedVault = serde_json::from_str(&stdout).unwrap();
    let credentials = crypto::open_credentials(&vault, "correct horse").unwrap();
    assert_eq!(credentials.api_user, "alice");
    assert_eq!(credentials.api_key, "0123456789abcdef");
}

#[test]
fn missing_passphrase_fails() {
    let output = seal(r#"{"api_user": "a", "api_key": "k", "client_ip": "1.2.3.4"}"#, None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_credentials_are_not_sealed() {
    let output = seal(r#"{"api_user": "a", "api_key": "k"}"#, Some("pw"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
