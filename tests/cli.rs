use assert_cmd::Command;
use predicates::prelude::*;

fn sdwan_status() -> Command {
    let mut cmd = Command::cargo_bin("sdwan-status").unwrap();
    cmd.env_remove("SDWAN_ORCH_URL");
    cmd.env_remove("SDWAN_ORCH_API_KEY");
    cmd
}

#[test]
fn missing_auth_is_a_usage_error() {
    sdwan_status()
        .args(["--url", "orchestrator.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "either --username or --api-key must be provided",
        ));
}

#[test]
fn missing_url_is_a_usage_error() {
    sdwan_status()
        .args(["--api-key", "key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

// An API key attaches without a network round trip, so pointing at a closed
// local port exercises the non-fatal tier: every fetch fails, is reported on
// stdout, and the run still exits 0.
#[test]
fn fetch_failures_are_non_fatal_with_api_key_auth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appliances.json");

    sdwan_status()
        .args([
            "--url",
            "https://127.0.0.1:1",
            "--api-key",
            "key",
            "--export",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error getting orchestrator info:"))
        .stdout(predicate::str::contains("Error retrieving appliances:"));

    // Export still runs for the (empty) degraded list.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn connector_failure_is_fatal() {
    sdwan_status()
        .args([
            "--url",
            "https://127.0.0.1:1",
            "--username",
            "admin",
            "--password",
            "secret",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("✗ Error:"))
        .stdout(predicate::str::contains("Logging in as user: admin"));
}
