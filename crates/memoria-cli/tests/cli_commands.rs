use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("memoria"));
    cmd.env("HOME", home)
        .env_remove("MEMORIA_ADDR")
        .env_remove("MEMORIA_SERVER_URL")
        .env_remove("MEMORIA_PASSWORD");
    cmd
}

#[test]
fn login_persists_identity_across_commands() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let login = server
        .mock("POST", "/api/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "password": "pass"
        })))
        .with_status(200)
        .with_body(json!({"id": "42", "username": "alice"}).to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "login",
            "--username",
            "alice",
            "--password",
            "pass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Logged in!"))
        .stdout(predicate::str::contains("Signed in as alice (id 42)"));
    login.assert();

    let config_path = home_dir.path().join(".memoria").join("config.json");
    let contents = fs::read_to_string(&config_path).expect("config written");
    assert!(contents.contains("\"username\": \"alice\""));
    assert!(!contents.contains("pass\""));

    base_cmd(home_dir.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"42\""));

    base_cmd(home_dir.path())
        .args(["home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as alice"));

    base_cmd(home_dir.path())
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out alice"));

    base_cmd(home_dir.path())
        .args(["whoami"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[test]
fn register_reports_account_created() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let register = server
        .mock("POST", "/api/register")
        .with_status(201)
        .with_body(json!({"id": 9, "username": "bob"}).to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .env("MEMORIA_PASSWORD", "hunter2")
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "register",
            "--username",
            "bob",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Account created!"));
    register.assert();
}

#[test]
fn rejected_login_shows_server_message() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/api/login")
        .with_status(401)
        .with_body(json!({"message": "bad password"}).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "login",
            "--username",
            "alice",
            "--password",
            "nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: bad password"));

    assert!(!home_dir.path().join(".memoria").join("config.json").exists());
}

#[test]
fn short_credentials_fail_without_request() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let any = server.mock("POST", Matcher::Any).expect(0).create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "login",
            "--username",
            "alice",
            "--password",
            "abc",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Validation Error: Username must be 3+ chars and password 4+.",
        ));
    any.assert();
}

#[test]
fn server_url_comes_from_config() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let login = server
        .mock("POST", "/api/login")
        .with_status(200)
        .with_body(json!({"id": "1", "username": "dana"}).to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args(["config", "set-server", &server.url()])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(server.url()));

    base_cmd(home_dir.path())
        .args([
            "--insecure",
            "login",
            "--username",
            "dana",
            "--password",
            "pass",
        ])
        .assert()
        .success();
    login.assert();
}
