#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn anvil_cmd(site: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("anvil"));
    cmd.env_remove("ANVIL_LOG")
        .env("NO_COLOR", "1")
        .arg("--root")
        .arg(site);
    cmd
}

fn write(site: &Path, relative: &str, content: &str) {
    let path = site.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "themes/default/views/home.php", "home");
    write(root, "themes/dark/views/home.blade.php", "dark home");
    write(root, "modules/blog/views/post.php", "post");
    write(
        root,
        "menus.json",
        r#"[
            {"slug": "main", "links": [
                {"id": 1, "title": "Home", "url": "/"},
                {"id": 2, "title": "Blog", "url": "/blog"},
                {"id": 3, "title": "Archive", "url": "/blog/archive", "parent_id": 2},
                {"id": 4, "title": "Admin", "url": "/admin", "required_power": 100}
            ]},
            {"slug": "footer", "links": []}
        ]"#,
    );
    temp
}

#[test]
fn test_resolve_module_view() {
    let site = site();
    anvil_cmd(site.path())
        .args(["resolve", "blog::post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modules/blog/views/post.php"));
}

#[test]
fn test_resolve_uses_theme_flag() {
    let site = site();
    anvil_cmd(site.path())
        .args(["resolve", "home", "--theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("themes/dark/views/home.blade.php"));
}

#[test]
fn test_resolve_extra_location_takes_priority() {
    let site = site();
    write(site.path(), "custom/post.php", "override");
    let custom = site.path().join("custom");

    anvil_cmd(site.path())
        .args(["resolve", "blog::post", "--location"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom/post.php"));
}

#[test]
fn test_resolve_missing_view_fails_with_attempts() {
    let site = site();
    anvil_cmd(site.path())
        .args(["resolve", "blog::missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("partials/blog/missing.blade.php"));
}

#[test]
fn test_config_file_changes_theme() {
    let site = site();
    write(site.path(), "anvil.toml", "theme = \"dark\"\n");

    anvil_cmd(site.path())
        .args(["resolve", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("themes/dark/views/home.blade.php"));

    anvil_cmd(site.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = dark"));
}

#[test]
fn test_candidates_lists_search_order() {
    let site = site();
    anvil_cmd(site.path())
        .args(["candidates", "blog::post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("partials/blog"))
        .stdout(predicate::str::contains("found"));
}

#[test]
fn test_menu_text_output() {
    let site = site();
    anvil_cmd(site.path())
        .args(["menu", "main", "--power", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive"))
        .stdout(predicate::str::contains("Admin").not());
}

#[test]
fn test_menu_json_output() {
    let site = site();
    let output = anvil_cmd(site.path())
        .args(["menu", "main", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let root: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(root["children"].as_array().unwrap().len(), 3);
    assert_eq!(root["children"][1]["children"][0]["title"], "Archive");
    assert_eq!(root["children"][1]["attributes"]["li.class"], "dropdown");
}

#[test]
fn test_missing_menu_policy() {
    let site = site();
    anvil_cmd(site.path())
        .args(["menu", "sidebar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));

    write(site.path(), "anvil.toml", "missing_menu = \"error\"\n");
    anvil_cmd(site.path())
        .args(["menu", "sidebar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Menu not found: sidebar"));
}

#[test]
fn test_menus_lists_slugs() {
    let site = site();
    anvil_cmd(site.path())
        .arg("menus")
        .assert()
        .success()
        .stdout(predicate::str::diff("main\nfooter\n"));
}
