//! End-to-end tests for the ado-npmrc binary

mod common;

use base64::Engine;
use common::{ORG_FEED, ORG_KEY, PROJECT_FEED, Workspace, token};
use predicates::prelude::*;

fn encoded_token() -> String {
    base64::engine::general_purpose::STANDARD.encode(token())
}

#[test]
fn test_writes_credentials_for_explicit_url() {
    let ws = Workspace::new();

    ws.command()
        .args(["--pat", &token(), "--url", ORG_FEED])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated 1 feed"));

    assert_eq!(
        ws.read_target(),
        format!(
            "{ORG_KEY}:username=VssSessionToken\n{ORG_KEY}:_password={}\n{ORG_KEY}:email=not-used@example.com\n",
            encoded_token()
        )
    );
}

#[test]
fn test_second_run_is_idempotent() {
    let ws = Workspace::new();
    ws.write_target("; my settings\nsave-exact=true\n");

    for _ in 0..2 {
        ws.command()
            .args(["--pat", &token(), "--url", ORG_FEED, PROJECT_FEED])
            .assert()
            .success();
    }

    let content = ws.read_target();
    assert!(content.starts_with("; my settings\nsave-exact=true\n"));
    assert_eq!(content.lines().count(), 2 + 6);
}

#[test]
fn test_discovers_feeds_from_project_npmrc() {
    let ws = Workspace::new();
    ws.write_project_npmrc(&format!(
        "registry={ORG_FEED}\n@scope:registry=https://registry.npmjs.org/\n"
    ));

    ws.command().args(["--pat", &token()]).assert().success();

    let content = ws.read_target();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains(&format!("{ORG_KEY}:username=VssSessionToken")));
    assert!(!content.contains("registry.npmjs.org"));
}

#[test]
fn test_token_from_environment() {
    let ws = Workspace::new();

    ws.command()
        .env("AZURE_DEVOPS_PAT", token())
        .args(["--url", ORG_FEED])
        .assert()
        .success();

    assert!(ws.read_target().contains(&encoded_token()));
}

#[test]
fn test_invalid_token_fails() {
    let ws = Workspace::new();

    ws.command()
        .args(["--pat", "abc", "--url", ORG_FEED])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("personal access token is invalid"));

    assert!(!ws.target().exists());
}

#[test]
fn test_invalid_url_names_offending_input() {
    let ws = Workspace::new();

    ws.command()
        .args([
            "--pat",
            &token(),
            "--url",
            ORG_FEED,
            "https://registry.npmjs.org/",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("https://registry.npmjs.org/"))
        .stderr(predicate::str::contains("_packaging/{feed}/npm/registry/"));

    assert!(!ws.target().exists());
}

#[test]
fn test_missing_project_npmrc_fails() {
    let ws = Workspace::new();

    ws.command()
        .args(["--pat", &token()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_project_npmrc_without_feeds_fails() {
    let ws = Workspace::new();
    ws.write_project_npmrc("registry=https://registry.npmjs.org/\n");

    ws.command()
        .args(["--pat", &token()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn test_tilde_target_expands_to_home() {
    let ws = Workspace::new();

    ws.bare_command()
        .args(["--pat", &token(), "--url", ORG_FEED, "--target", "~/nested/.npmrc"])
        .assert()
        .success();

    assert!(ws.path().join("nested/.npmrc").exists());
}

#[test]
fn test_missing_token_without_terminal_fails() {
    let ws = Workspace::new();

    ws.command()
        .args(["--url", ORG_FEED])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "https://dev.azure.com/myorg/_usersSettings/tokens",
        ))
        .stderr(predicate::str::contains("prompt failed"));

    assert!(!ws.target().exists());
}

#[test]
fn test_discovers_feeds_with_inline_comments() {
    let ws = Workspace::new();
    ws.write_project_npmrc(&format!("registry={ORG_FEED} ; company feed\n"));

    ws.command().args(["--pat", &token()]).assert().success();

    assert!(
        ws.read_target()
            .contains(&format!("{ORG_KEY}:username=VssSessionToken"))
    );
}
