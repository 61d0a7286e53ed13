// End-to-end tests for the zk-image binary against a scratch notebook.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn zk_image(notebook: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zk-image").unwrap();
    cmd.env("ZK_NOTEBOOK_DIR", notebook);
    cmd
}

fn write_photo(dir: &Path) -> std::path::PathBuf {
    let photo = dir.join("cat.png");
    fs::write(&photo, b"\x89PNG fake image bytes").unwrap();
    photo
}

fn insert(notebook: &Path, photo: &Path, description: &str, source: Option<&str>) -> String {
    let mut cmd = zk_image(notebook);
    cmd.arg("insert")
        .arg(photo)
        .args(["--description", description]);
    if let Some(source) = source {
        cmd.args(["--source", source]);
    }

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .strip_prefix("Inserted image with ID: ")
        .and_then(|rest| rest.split_whitespace().next())
        .expect("confirmation line")
        .to_string();
    assert!(stdout.contains(&format!("and description: \"{}\"", description)));
    id
}

fn search_json(notebook: &Path, term: &str) -> Vec<Value> {
    let output = zk_image(notebook)
        .args(["search", term, "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    value.as_array().unwrap().clone()
}

#[test]
fn missing_notebook_env_is_fatal() {
    Command::cargo_bin("zk-image")
        .unwrap()
        .env_remove("ZK_NOTEBOOK_DIR")
        .args(["search", "cat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ZK_NOTEBOOK_DIR environment variable not set.",
        ));
}

#[test]
fn insert_creates_row_and_file() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());

    let id = insert(notebook.path(), &photo, "a cat photo", Some("camera"));

    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));

    let stored = notebook.path().join("images").join(format!("{}.jpg", id));
    assert_eq!(fs::read(stored).unwrap(), fs::read(&photo).unwrap());
    assert!(notebook.path().join("images").join("db.sqlite").exists());

    let results = search_json(notebook.path(), "cat");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], id.as_str());
    assert_eq!(results[0]["description"], "a cat photo");
    assert_eq!(results[0]["source"], "camera");
    assert!(results[0]["createdAt"].is_string());
}

#[test]
fn search_by_source_substring() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());
    let id = insert(notebook.path(), &photo, "whiteboard", Some("team offsite"));

    let results = search_json(notebook.path(), "offs");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], id.as_str());
}

#[test]
fn search_without_matches() {
    let notebook = TempDir::new().unwrap();

    zk_image(notebook.path())
        .args(["search", "nothing", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n");

    zk_image(notebook.path())
        .args(["search", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created At"));
}

#[test]
fn plain_search_renders_table() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());
    let id = insert(notebook.path(), &photo, "a cat photo", None);

    zk_image(notebook.path())
        .args(["search", "cat", "--format", "something-else"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("│ Description"))
        .stdout(predicate::str::contains("┌"));
}

#[test]
fn insert_prompts_until_description_given() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());

    zk_image(notebook.path())
        .arg("insert")
        .arg(&photo)
        .write_stdin("\n   \na sunset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("and description: \"a sunset\""));

    let results = search_json(notebook.path(), "sunset");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["source"], Value::Null);
}

#[test]
fn insert_without_any_description_fails() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());

    zk_image(notebook.path())
        .arg("insert")
        .arg(&photo)
        .args(["--description", ""])
        .write_stdin("\n\n")
        .assert()
        .failure();

    assert!(search_json(notebook.path(), "").is_empty());
}

#[test]
fn insert_missing_file_fails() {
    let notebook = TempDir::new().unwrap();

    zk_image(notebook.path())
        .args(["insert", "does-not-exist.png", "--description", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.png"));
}

#[test]
fn delete_removes_row_and_file() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());
    let id = insert(notebook.path(), &photo, "a cat photo", None);
    let stored = notebook.path().join("images").join(format!("{}.jpg", id));
    assert!(stored.exists());

    zk_image(notebook.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout("");

    assert!(!stored.exists());
    assert!(search_json(notebook.path(), "cat").is_empty());
}

#[test]
fn delete_reads_id_from_stdin() {
    let notebook = TempDir::new().unwrap();
    let photo = write_photo(notebook.path());
    let id = insert(notebook.path(), &photo, "a cat photo", None);

    zk_image(notebook.path())
        .arg("delete")
        .write_stdin(format!("{}\n", id))
        .assert()
        .success();

    assert!(search_json(notebook.path(), "cat").is_empty());
}

#[test]
fn delete_unknown_id_is_silent() {
    let notebook = TempDir::new().unwrap();

    zk_image(notebook.path())
        .args(["delete", "zzzzzzzzzzzzzzzz"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn delete_without_id_fails_before_touching_storage() {
    let notebook = TempDir::new().unwrap();

    zk_image(notebook.path())
        .arg("delete")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID of the image has to be provided"));

    assert!(!notebook.path().join("images").exists());
}

#[test]
fn notebook_flag_overrides_environment() {
    let env_notebook = TempDir::new().unwrap();
    let flag_notebook = TempDir::new().unwrap();
    let photo = write_photo(env_notebook.path());

    zk_image(env_notebook.path())
        .arg("--notebook")
        .arg(flag_notebook.path())
        .arg("insert")
        .arg(&photo)
        .args(["--description", "elsewhere"])
        .assert()
        .success();

    assert!(flag_notebook.path().join("images").join("db.sqlite").exists());
    assert!(!env_notebook.path().join("images").exists());
}

#[test]
fn version_flag() {
    Command::cargo_bin("zk-image")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("zk-image"));
}
