#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{ACME_MANIFEST, docsite_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

fn write_manifest(dir: &std::path::Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("manifest.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn render_html_to_stdout() {
    let dir = tempdir().unwrap();
    let manifest = write_manifest(dir.path(), ACME_MANIFEST);

    docsite_cmd()
        .env_remove("DOCSITE_API_KEY")
        .arg("render")
        .arg(&manifest)
        .args(["--year", "2031"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("© 2031 All rights reserved."))
        .stdout(predicate::str::contains("onclick=\"window.print()\""));
}

#[test]
fn render_text_outline_lists_but_skips_unknown_sections() {
    let dir = tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r##"{
          "name": "Acme",
          "tagline": "",
          "theme": {"primary": "#000", "secondary": "#fff", "accent": "#f50", "fontStyle": "classic"},
          "sections": [
            {"type": "about", "title": "About us", "content": "We fly."},
            {"type": "gallery", "title": "Photos"},
            {"type": "contact", "title": "Say hi"}
          ]
        }"##,
    );

    docsite_cmd()
        .arg("render")
        .arg(&manifest)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nav: about | gallery | contact [Contact]"))
        .stdout(predicate::str::contains("#section-2 contact Say hi"))
        .stdout(predicate::str::contains("#section-1").not())
        .stdout(predicate::str::contains("Photos").not());
}

#[test]
fn render_json_keeps_unrecognized_section_tags() {
    let dir = tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r##"{
          "name": "Acme",
          "tagline": "Drones",
          "theme": {"primary": "#000", "secondary": "#fff", "accent": "#f50", "fontStyle": "tech"},
          "sections": [{"type": "gallery", "title": "Photos"}, {"type": "about"}]
        }"##,
    );

    docsite_cmd()
        .arg("render")
        .arg(&manifest)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"gallery\""))
        .stdout(predicate::str::contains("unknown").not());
}

#[test]
fn render_reads_manifest_from_stdin() {
    docsite_cmd()
        .args(["render", "-", "--format", "json"])
        .write_stdin(ACME_MANIFEST)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fontStyle\": \"tech\""));
}

#[test]
fn render_rejects_invalid_theme_color() {
    let dir = tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r##"{
          "name": "Acme",
          "tagline": "Drones",
          "theme": {"primary": "red", "secondary": "#fff", "accent": "#f50", "fontStyle": "tech"},
          "sections": []
        }"##,
    );

    docsite_cmd()
        .arg("render")
        .arg(&manifest)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("theme.primary is not a hex color"));
}

#[test]
fn render_uses_year_from_config() {
    let dir = tempdir().unwrap();
    let manifest = write_manifest(dir.path(), ACME_MANIFEST);
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[render]\nyear = 2040\n").unwrap();

    docsite_cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("© 2040 All rights reserved."));
}
