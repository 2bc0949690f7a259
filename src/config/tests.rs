use super::{apply_config, apply_overrides, load_config_file, parse_duration_value, types::ConfigFile};
use crate::args::{HttpMethod, LogLevel, LureArgs, OutputFormat, PasswordComplexity};
use crate::error::ConfigError;
use crate::template::default_template;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

fn args(extra: &[&str]) -> Result<LureArgs, String> {
    let mut argv = vec!["lurebuster"];
    argv.extend_from_slice(extra);
    LureArgs::try_parse_from(argv).map_err(|err| err.to_string())
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("lurebuster.toml");
    let content = r#"
templates_path = "my-templates.json"
template = "Login"
log_level = "warning"
request_timeout = "1500ms"
follow_redirects = true
join_grace = 3
progress = false
output_format = "json"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let settings = apply_config(&args(&[])?, Some(&config)).map_err(|err| err.to_string())?;
    let checks = [
        (
            settings.templates_path == PathBuf::from("my-templates.json"),
            "Unexpected templates path",
        ),
        (settings.template.as_deref() == Some("Login"), "Unexpected template"),
        (settings.log_level == LogLevel::Warning, "Unexpected log level"),
        (
            settings.client.request_timeout == Duration::from_millis(1500),
            "Unexpected timeout",
        ),
        (settings.client.follow_redirects, "Expected redirects on"),
        (
            settings.dispatcher.join_grace == Duration::from_secs(3),
            "Unexpected join grace",
        ),
        (!settings.progress, "Expected progress off"),
        (settings.output_format == OutputFormat::Json, "Unexpected output format"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("lurebuster.json");
    std::fs::write(&path, r#"{ "timeout": 2, "log_level": "DEBUG" }"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let settings = apply_config(&args(&[])?, Some(&config)).map_err(|err| err.to_string())?;
    if settings.client.request_timeout != Duration::from_secs(2)
        || settings.log_level != LogLevel::Debug
    {
        return Err(format!("Unexpected settings {:?}", settings));
    }
    Ok(())
}

#[test]
fn cli_flags_override_config() -> Result<(), String> {
    let config: ConfigFile = toml::from_str(
        r#"
templates_path = "from-config.json"
log_level = "ERROR"
request_timeout = "30s"
"#,
    )
    .map_err(|err| err.to_string())?;
    let cli = args(&[
        "--templates",
        "from-cli.json",
        "--verbose",
        "--timeout",
        "2s",
        "--no-progress",
    ])?;
    let settings = apply_config(&cli, Some(&config)).map_err(|err| err.to_string())?;
    if settings.templates_path != PathBuf::from("from-cli.json") {
        return Err("CLI templates path should win".to_owned());
    }
    if settings.log_level != LogLevel::Debug {
        return Err("--verbose should force debug".to_owned());
    }
    if settings.client.request_timeout != Duration::from_secs(2) || settings.progress {
        return Err(format!("Unexpected settings {:?}", settings));
    }
    Ok(())
}

#[test]
fn defaults_without_config() -> Result<(), String> {
    let settings = apply_config(&args(&[])?, None).map_err(|err| err.to_string())?;
    if settings.templates_path != PathBuf::from("templates.json")
        || settings.log_level != LogLevel::Info
        || settings.client.request_timeout != Duration::from_secs(10)
        || settings.client.follow_redirects
        || settings.dispatcher.join_grace != Duration::from_secs(5)
        || !settings.progress
    {
        return Err(format!("Unexpected defaults {:?}", settings));
    }
    Ok(())
}

#[test]
fn unknown_log_level_is_a_config_error() -> Result<(), String> {
    match apply_config(&args(&["--log-level", "LOUD"])?, None) {
        Err(ConfigError::UnknownLogLevel { level }) if level == "LOUD" => Ok(()),
        other => Err(format!("Unexpected result {:?}", other)),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("lurebuster.yaml");
    std::fs::write(&path, "x: 1").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(err) if err.to_string().contains("yaml") => Ok(()),
        Err(err) => Err(format!("Unexpected error {}", err)),
        Ok(_) => Err("Expected yaml config to fail".to_owned()),
    }
}

#[test]
fn durations_parse() -> Result<(), String> {
    let cases = [
        ("10", Duration::from_secs(10)),
        ("250ms", Duration::from_millis(250)),
        ("2m", Duration::from_secs(120)),
        ("1h30m", Duration::from_secs(5_400)),
        (" 5s ", Duration::from_secs(5)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input)?;
        if parsed != expected {
            return Err(format!("{} parsed as {:?}", input, parsed));
        }
    }
    for invalid in ["", "0", "0s", "ms", "5d", "1.5s"] {
        if parse_duration_value(invalid).is_ok() {
            return Err(format!("Expected '{}' to fail", invalid));
        }
    }
    Ok(())
}

#[test]
fn overrides_replace_template_values() -> Result<(), String> {
    let cli = args(&[
        "-u",
        "http://127.0.0.1:8080/submit",
        "-X",
        "GET",
        "-n",
        "3",
        "-j",
        "2",
        "--delay",
        "0",
        "--region",
        "fr",
        "--password-complexity",
        "low",
        "-H",
        "X-Run: smoke",
        "-F",
        "pin={{MISC_password_(length=4, special_chars=False)}}",
    ])?;
    let mut template = default_template();
    apply_overrides(&mut template, &cli);
    if template.request_data.url != "http://127.0.0.1:8080/submit"
        || template.request_data.method != HttpMethod::Get
    {
        return Err("Request data not overridden".to_owned());
    }
    if template.config.request_count != 3
        || template.config.thread_count != 2
        || template.config.data_region != "FR"
        || template.config.password_complexity != PasswordComplexity::Low
    {
        return Err(format!("Run config not overridden {:?}", template.config));
    }
    if template.headers.get("X-Run") != Some(&Value::String("smoke".to_owned())) {
        return Err("Header not added".to_owned());
    }
    if !template.form_fields.contains_key("pin") || !template.form_fields.contains_key("username") {
        return Err("Form fields not merged".to_owned());
    }
    Ok(())
}
