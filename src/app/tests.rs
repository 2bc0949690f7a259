use super::commands::{placeholder_lines, region_lines, render_template, run_templates_command};
use super::progress::build_progress_line;
use super::runner::{run_attack, select_template};
use super::summary::{build_summary, summary_lines};
use crate::args::{LureArgs, PlaceholdersArgs, RenderArgs, TemplatesCommand};
use crate::attack::{AttackDispatcher, DispatcherSettings, LoggingObserver, RunState};
use crate::config::{Settings, apply_config};
use crate::http::{HttpTransport, build_client};
use crate::metrics::{AttemptRecord, RequestOutcome, RunStats};
use crate::providers::CapabilityRegistry;
use crate::template::{TemplateStore, default_template};
use clap::Parser;
use std::future::Future;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn settings_for(argv: &[&str]) -> Result<(LureArgs, Settings), String> {
    let mut full = vec!["lurebuster"];
    full.extend_from_slice(argv);
    let args = LureArgs::try_parse_from(full).map_err(|err| err.to_string())?;
    let settings = apply_config(&args, None).map_err(|err| err.to_string())?;
    Ok((args, settings))
}

struct ServerHandle {
    shutdown: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            drop(handle.join());
        }
    }
}

fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    listener
        .set_nonblocking(true)
        .map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_flag = Arc::clone(&shutdown);
    let handle = thread::spawn(move || {
        while !shutdown_flag.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((mut stream, _)) => {
                    if stream.set_nonblocking(false).is_err() {
                        continue;
                    }
                    let mut buffer = [0_u8; 4096];
                    if stream.read(&mut buffer).is_err() {
                        continue;
                    }
                    let response =
                        b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK";
                    if stream.write_all(response).is_err() {
                        continue;
                    }
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_err) => break,
            }
        }
    });
    Ok((
        format!("http://{}/login", addr),
        ServerHandle {
            shutdown,
            handle: Some(handle),
        },
    ))
}

#[test]
fn placeholders_can_be_filtered_by_provider() -> Result<(), String> {
    let lines = placeholder_lines(&PlaceholdersArgs {
        provider: Some("misc".to_owned()),
        region: Some("BR".to_owned()),
    })
    .map_err(|err| err.to_string())?;
    if lines.is_empty() || !lines.iter().all(|line| line.starts_with("{{MISC_")) {
        return Err(format!("Unexpected lines {:?}", lines));
    }
    if !lines.iter().any(|line| line.starts_with("{{MISC_password_(")) {
        return Err("Missing password placeholder".to_owned());
    }
    let unknown = placeholder_lines(&PlaceholdersArgs {
        provider: Some("NOPE".to_owned()),
        region: None,
    });
    if unknown.is_ok() {
        return Err("Expected unknown provider to fail".to_owned());
    }
    Ok(())
}

#[test]
fn regions_list_their_locales() -> Result<(), String> {
    let lines = region_lines();
    let us = lines
        .iter()
        .find(|line| line.starts_with("US "))
        .ok_or("missing US")?;
    if !us.contains("en_US") {
        return Err(format!("Unexpected US line {}", us));
    }
    Ok(())
}

#[test]
fn templates_init_show_and_delete() -> Result<(), String> {
    let dir = tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("nested").join("templates.json");
    let path_text = path.to_string_lossy().into_owned();
    let (_, settings) = settings_for(&["--templates", &path_text])?;

    run_templates_command(&TemplatesCommand::Init { force: false }, &settings)
        .map_err(|err| err.to_string())?;
    if run_templates_command(&TemplatesCommand::Init { force: false }, &settings).is_ok() {
        return Err("Second init without --force should fail".to_owned());
    }
    let store = TemplateStore::read(&path).map_err(|err| err.to_string())?;
    if !store.contains_key("Example Template") {
        return Err("Init did not write the default template".to_owned());
    }

    run_templates_command(
        &TemplatesCommand::Delete {
            name: "Example Template".to_owned(),
        },
        &settings,
    )
    .map_err(|err| err.to_string())?;
    let store = TemplateStore::read(&path).map_err(|err| err.to_string())?;
    if !store.is_empty() {
        return Err("Delete did not persist".to_owned());
    }
    Ok(())
}

#[test]
fn render_repeat_and_unique() -> Result<(), String> {
    let dir = tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("templates.json");
    let mut template = default_template();
    template.headers.insert(
        "X-Id".to_owned(),
        serde_json::Value::String("{{MISC_uuid4}}".to_owned()),
    );
    template.form_fields.insert(
        "id".to_owned(),
        serde_json::Value::String("{{MISC_uuid4}}".to_owned()),
    );
    let mut store = TemplateStore::with_default(&path);
    store.upsert(None, template).map_err(|err| err.to_string())?;
    store.save().map_err(|err| err.to_string())?;

    let path_text = path.to_string_lossy().into_owned();
    let (args, settings) = settings_for(&["--templates", &path_text])?;
    let rendered = render_template(&RenderArgs { unique: false }, &args, &settings)
        .map_err(|err| err.to_string())?;
    if rendered["headers"]["X-Id"] != rendered["form_fields"]["id"] {
        return Err("Repeat mode should share one value".to_owned());
    }
    let unique = render_template(&RenderArgs { unique: true }, &args, &settings)
        .map_err(|err| err.to_string())?;
    if unique["headers"]["X-Id"] == unique["form_fields"]["id"] {
        return Err("Unique mode should generate two values".to_owned());
    }
    Ok(())
}

#[test]
fn select_template_applies_overrides() -> Result<(), String> {
    let (args, settings) = settings_for(&["-n", "3", "--region", "de"])?;
    let store = TemplateStore::with_default("unused.json");
    let template = select_template(&store, &settings, &args).map_err(|err| err.to_string())?;
    if template.config.request_count != 3 || template.config.data_region != "DE" {
        return Err(format!("Overrides not applied {:?}", template.config));
    }
    let (args, settings) = settings_for(&["--template", "Missing"])?;
    if select_template(&store, &settings, &args).is_ok() {
        return Err("Expected missing template to fail".to_owned());
    }
    Ok(())
}

#[test]
fn summary_reports_counts_and_history() -> Result<(), String> {
    run_async_test(async {
        let (url, _server) = spawn_http_server()?;
        let mut template = default_template();
        template.request_data.url = url;
        template.config.request_count = 4;
        template.config.thread_count = 2;
        template.config.request_delay = 0.0;

        let client = build_client(&crate::http::ClientSettings::default())
            .map_err(|err| err.to_string())?;
        let dispatcher = AttackDispatcher::new(
            CapabilityRegistry::build("pt_BR").map_err(|err| err.to_string())?,
            Arc::new(HttpTransport::new(client)),
            Arc::new(LoggingObserver),
            DispatcherSettings::default(),
        );
        let report = dispatcher
            .run(&template, false)
            .await
            .map_err(|err| err.to_string())?;
        let summary = build_summary(&template, &report, false).map_err(|err| err.to_string())?;
        if summary.requests_sent != 4 || summary.successful != 4 || summary.success_rate != "100.00" {
            return Err(format!("Unexpected summary {:?}", summary));
        }
        if summary.bytes_received != 8 || summary.history.requests != 4 || summary.state != "completed" {
            return Err(format!("Unexpected summary {:?}", summary));
        }
        let lines = summary_lines(&summary);
        if !lines.iter().any(|line| line == "Requests Sent: 4/4") {
            return Err(format!("Unexpected lines {:?}", lines));
        }
        let json = serde_json::to_value(&summary).map_err(|err| err.to_string())?;
        if json["history"]["target"] != serde_json::Value::String(template.request_data.url) {
            return Err("History target missing from JSON".to_owned());
        }
        Ok(())
    })
}

#[test]
fn run_attack_test_mode_hits_local_server() -> Result<(), String> {
    run_async_test(async {
        let (url, _server) = spawn_http_server()?;
        let dir = tempdir().map_err(|err| err.to_string())?;
        let path = dir.path().join("templates.json").to_string_lossy().into_owned();
        let (args, settings) = settings_for(&[
            "--templates",
            &path,
            "--url",
            &url,
            "--test",
            "--no-progress",
        ])?;
        let state = run_attack(&args, &settings)
            .await
            .map_err(|err| err.to_string())?;
        if state != RunState::Completed {
            return Err(format!("Unexpected state {:?}", state));
        }
        Ok(())
    })
}

#[test]
fn progress_line_shows_counts_and_rate() -> Result<(), String> {
    let stats = RunStats::new();
    for _ in 0..3 {
        stats.record(AttemptRecord {
            outcome: RequestOutcome::Status(200),
            response_time: Duration::from_millis(5),
            sent_bytes: 10,
            received_bytes: 2,
        });
    }
    stats.record(AttemptRecord {
        outcome: RequestOutcome::TimedOut,
        response_time: Duration::from_millis(5),
        sent_bytes: 10,
        received_bytes: 0,
    });
    let line: String = build_progress_line(&stats.snapshot(), 8, "00:00:01")
        .into_iter()
        .map(|segment| segment.text)
        .collect();
    for expected in ["[############------------]", " 4/8 ", "ok 3 ", "timeout 1 ", "| 75.00% |"] {
        if !line.contains(expected) {
            return Err(format!("'{}' missing from '{}'", expected, line));
        }
    }
    Ok(())
}
