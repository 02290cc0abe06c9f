use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Stdio;
use std::time::Duration;

fn yt_smoke() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("yt-smoke"))
}

#[test]
fn test_invalid_base_url_exits_with_config_error() {
    yt_smoke()
        .args(["--profile", "simple", "--base-url", "ftp://example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ftp://example.com"));
}

#[test]
fn test_unsupported_report_extension_exits_with_config_error() {
    yt_smoke()
        .args(["--profile", "simple", "--report", "run.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("report"));
}

#[test]
fn test_failed_run_exits_zero_without_strict() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/youtube/search");
        then.status(500).body("boom");
    });

    yt_smoke()
        .args(["--profile", "simple", "--base-url", &server.base_url()])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("❌ 500 Internal Server Error"));
}

#[test]
fn test_failed_run_exits_two_with_strict() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/youtube/search");
        then.status(500).body("boom");
    });

    yt_smoke()
        .args(["--profile", "simple", "--base-url", &server.base_url(), "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("🎯 Results: 0/1 tests passed"));
}

#[test]
fn test_passing_run_exits_zero_with_strict() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/youtube/search");
        then.status(200).json_body(json!({"videos": [], "cached": false}));
    });

    yt_smoke()
        .args(["--profile", "simple", "--base-url", &server.base_url(), "--strict"])
        .assert()
        .success();
}

#[test]
fn test_closed_stdout_does_not_crash() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/youtube/search");
        then.status(200)
            .json_body(json!({"videos": [], "cached": false}))
            .delay(Duration::from_millis(300));
    });

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin!("yt-smoke"))
        .args(["--profile", "simple", "--base-url", &server.base_url()])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // 關閉讀取端，之後的輸出都會遇到 broken pipe
    drop(child.stdout.take());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}
