use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn docs_landing() -> assert_cmd::Command {
    cargo_bin_cmd!("docs-landing")
}

#[test]
fn render_writes_page_with_defaults() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("build").join("index.html");

    docs_landing()
        .current_dir(temp.path())
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Landing page written to"));

    let html = std::fs::read_to_string(&out).expect("rendered page");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Welcome | SunCulture Documentation"));
    assert!(html.contains("href=\"/docs/amt/intro\""));
    assert!(html.contains("IoT Platform"));
}

#[test]
fn render_uses_site_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("site.toml");
    std::fs::write(
        &config,
        "title = \"Field Ops Docs\"\ntagline = \"Runbooks and references\"\n",
    )
    .expect("write config");

    docs_landing()
        .args(["render", "--out", "-", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Field Ops Docs"))
        .stdout(predicate::str::contains("Runbooks and references"));
}

#[test]
fn render_rejects_broken_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("site.toml");
    std::fs::write(&config, "title = [").expect("write config");
    let out = temp.path().join("index.html");

    docs_landing()
        .args(["render", "--config"])
        .arg(&config)
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load site config"));

    assert!(!out.exists());
}

#[test]
fn check_reports_catalog_summary() {
    let temp = TempDir::new().expect("temp dir");

    docs_landing()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "OK: 7 applications (1 in production), 3 quick-link groups",
        ));
}

#[test]
fn list_prints_one_line_per_application() {
    let output = docs_landing().arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();

    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("TypeScript, Express +2"));
    assert!(stdout.contains("Coming Soon"));
}

#[test]
fn list_json_emits_catalog() {
    let output = docs_landing().args(["list", "--json"]).assert().success();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("valid json");

    let apps = parsed.as_array().expect("array");
    assert_eq!(apps.len(), 7);
    assert_eq!(apps[0]["title"], "AMT Backend");
    assert_eq!(apps[0]["status"], "Production");
    assert_eq!(apps[1]["status"], "Coming Soon");
    assert_eq!(apps[0]["features"].as_array().map(Vec::len), Some(5));
}
