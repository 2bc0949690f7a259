mod support_single;

use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use support_single::{expect_success, run_lurebuster, spawn_http_server};

#[test]
fn e2e_test_mode_sends_one_request() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_lurebuster(
        dir.path(),
        [
            "--url",
            url.as_str(),
            "--test",
            "--no-progress",
            "--output-format",
            "json",
        ],
    )?;
    expect_success(&output)?;

    let summary: Value = serde_json::from_slice(&output.stdout)
        .map_err(|err| format!("summary is not JSON: {}", err))?;
    if summary["requests_sent"] != Value::from(1) || summary["successful"] != Value::from(1) {
        return Err(format!("Unexpected summary: {}", summary));
    }
    if summary["state"] != Value::from("completed") {
        return Err(format!("Unexpected state: {}", summary["state"]));
    }
    Ok(())
}

#[test]
fn e2e_small_run_with_overrides() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let templates = dir.path().join("templates.json");
    let templates_arg = templates.to_string_lossy().into_owned();

    let init = run_lurebuster(dir.path(), ["--templates", templates_arg.as_str(), "templates", "init"])?;
    expect_success(&init)?;
    if !templates.exists() {
        return Err("templates init did not create the store".to_owned());
    }

    let output = run_lurebuster(
        dir.path(),
        [
            "--templates",
            templates_arg.as_str(),
            "--url",
            url.as_str(),
            "-n",
            "6",
            "-j",
            "3",
            "-d",
            "0",
            "--region",
            "us",
            "-F",
            "email={{INTERNET_free_email}}",
            "--no-progress",
            "--output-format",
            "json",
        ],
    )?;
    expect_success(&output)?;

    let summary: Value = serde_json::from_slice(&output.stdout)
        .map_err(|err| format!("summary is not JSON: {}", err))?;
    if summary["requests_sent"] != Value::from(6) || summary["workers"] != Value::from(3) {
        return Err(format!("Unexpected summary: {}", summary));
    }
    if summary["bytes_received"] != Value::from(12) {
        return Err(format!("Unexpected received bytes: {}", summary["bytes_received"]));
    }
    Ok(())
}

#[test]
fn e2e_placeholders_lists_provider_methods() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_lurebuster(dir.path(), ["placeholders", "--provider", "person"])?;
    expect_success(&output)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.lines().any(|line| line == "{{PERSON_first_name}}") {
        return Err(format!("Missing PERSON_first_name in:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_render_resolves_every_placeholder() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_lurebuster(dir.path(), ["--region", "DE", "render"])?;
    expect_success(&output)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("{{") {
        return Err(format!("Unresolved placeholder in:\n{}", stdout));
    }
    let rendered: Value =
        serde_json::from_str(&stdout).map_err(|err| format!("render is not JSON: {}", err))?;
    if rendered["form_fields"]["email"].as_str().is_none_or(|email| !email.contains('@')) {
        return Err(format!("Unexpected email: {}", rendered["form_fields"]["email"]));
    }
    Ok(())
}

#[test]
fn e2e_invalid_url_is_a_configuration_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_lurebuster(dir.path(), ["--url", "ftp://example.com/", "--no-progress"])?;
    if output.status.code() != Some(2) {
        return Err(format!("Expected exit code 2, got {:?}", output.status.code()));
    }
    let written = fs::read_dir(dir.path())
        .map_err(|err| format!("read_dir failed: {}", err))?
        .count();
    if written != 0 {
        return Err("A failed run should not write files".to_owned());
    }
    Ok(())
}
