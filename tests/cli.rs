use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

/// Binary with config and data dirs pointed at a scratch directory
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scriptblox").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_DATA_HOME", home.path().join(".local/share"))
        .env_remove("SCRIPTBLOX_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn dry_run_prints_url() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "--base-url",
            "http://example.test/api",
            "fetch",
            "--page",
            "2",
            "--mode",
            "free",
            "--verified",
            "true",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains(
            "http://example.test/api/script/fetch?page=2&mode=free&verified=1",
        ));
}

#[test]
fn dry_run_rejects_large_page_size() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["fetch", "--max", "21", "--dry-run"])
        .assert()
        .code(2)
        .stderr(contains("max"));
}

#[test]
fn env_overrides_default_base_url() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .env("SCRIPTBLOX_API_URL", "http://mirror.test/api")
        .args(["fetch", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("http://mirror.test/api/script/fetch"));
}

#[test]
fn base_url_flag_wins_over_env() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .env("SCRIPTBLOX_API_URL", "http://mirror.test/api")
        .args(["--base-url", "http://flag.test/api", "fetch", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("http://flag.test/api/script/fetch"))
        .stdout(contains("mirror.test").not());
}

#[test]
fn dry_run_encodes_exclude() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "--base-url",
            "http://example.test/api",
            "fetch",
            "--exclude",
            "a&b=c",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("script/fetch?exclude=a%26b%3Dc"));
}

#[test]
fn fetch_json_output() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/script/fetch")
        .with_status(200)
        .with_body(r#"{"result":{"scripts":[{"title":"Fly Script"}]}}"#)
        .expect(1)
        .create();

    cmd(&home)
        .args(["--base-url", &server.url(), "fetch", "--json"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"Fly Script\""));
    mock.assert();
}

#[test]
fn fetch_table_output() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/script/fetch")
        .with_status(200)
        .with_body(r#"{"result":{"scripts":[{"title":"Fly Script","views":7}]}}"#)
        .create();

    cmd(&home)
        .args(["--base-url", &server.url(), "fetch"])
        .assert()
        .success()
        .stdout(contains("Fly Script"))
        .stdout(contains("1 scripts returned"));
}

#[test]
fn fetch_server_error_exits_one() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/script/fetch")
        .with_status(500)
        .create();

    cmd(&home)
        .args(["--base-url", &server.url(), "fetch"])
        .assert()
        .code(1)
        .stderr(contains("status 500"));
}

#[test]
fn config_init_writes_file_once() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("Configuration file created"));

    let path = home.path().join(".config/scriptblox/config.toml");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("base_url"));

    cmd(&home)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(contains("already exists"));

    cmd(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_reflects_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config/scriptblox");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.toml"),
        "[api]\nbase_url = \"http://from-file.test/api\"\n",
    )
    .unwrap();

    cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("http://from-file.test/api"));
}
