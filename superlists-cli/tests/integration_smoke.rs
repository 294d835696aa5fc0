//! Smoke tests to verify command wiring

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's environment and any .env file
fn superlists(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("superlists").unwrap();
    cmd.current_dir(dir)
        .env_remove("DATABASE_URL")
        .env_remove("SUPERLISTS_BIND")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("lists.db").display())
}

// === Help ===

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    superlists(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("lists"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    superlists(dir.path())
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

// === Config ===

#[test]
fn test_config_path_uses_flag() {
    let dir = TempDir::new().unwrap();
    superlists(dir.path())
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    superlists(dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:8000"))
        .stdout(predicate::str::contains("sqlite://superlists.db"));
}

#[test]
fn test_config_show_reads_file_and_env() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[server]\nbind = \"0.0.0.0:8080\"\n",
    )
    .unwrap();

    superlists(dir.path())
        .env("DATABASE_URL", "sqlite://from-env.db")
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("sqlite://from-env.db"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[database]\nmax_connections = 0\n").unwrap();

    superlists(dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_connections"));
}

// === Migrate and lists ===

#[test]
fn test_migrate_then_status() {
    let dir = TempDir::new().unwrap();
    let url = database_url(&dir);

    superlists(dir.path())
        .args(["migrate", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied 5 migration(s)"));

    superlists(dir.path())
        .args(["migrate", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied 0 migration(s)"));

    superlists(dir.path())
        .args(["migrate", "--status", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("item_list_fk"))
        .stdout(predicate::str::contains("pending").not());
}

#[test]
fn test_lists_on_empty_database() {
    let dir = TempDir::new().unwrap();
    let url = database_url(&dir);

    superlists(dir.path())
        .args(["migrate", "--database-url", &url])
        .assert()
        .success();

    superlists(dir.path())
        .args(["lists", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("no lists"));
}

#[test]
fn test_lists_rejects_bad_id() {
    let dir = TempDir::new().unwrap();
    superlists(dir.path())
        .args(["lists", "not-a-number"])
        .assert()
        .failure();
}
