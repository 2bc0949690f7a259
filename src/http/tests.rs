use super::*;
use crate::args::HttpMethod;
use crate::error::TemplateError;
use crate::template::FieldMap;
use serde_json::{Value, json};
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn fields(value: Value) -> Result<FieldMap, String> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            Err("Expected object".to_owned())
        }
    }
}

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

/// Serves `response` once per connection until the task is dropped.
async fn spawn_raw_server(response: &'static str) -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buffer = [0_u8; 2048];
            if stream.read(&mut buffer).await.is_err() {
                continue;
            }
            drop(stream.write_all(response.as_bytes()).await);
            drop(stream.shutdown().await);
        }
    });
    Ok(format!("http://{}", addr))
}

#[test]
fn form_fields_are_url_encoded() -> Result<(), String> {
    let headers = fields(json!({ "Content-Type": "application/x-www-form-urlencoded" }))?;
    let form = fields(json!({ "user": "a b", "mail": "x@y.z" }))?;
    let request = PreparedRequest::build(HttpMethod::Post, "http://localhost/login", &headers, &form)
        .map_err(|err| err.to_string())?;
    if request.body_kind != BodyKind::Form {
        return Err("Expected form body".to_owned());
    }
    let body = request.body.ok_or("missing body")?;
    if body != "mail=x%40y.z&user=a+b" {
        return Err(format!("Unexpected body {}", body));
    }
    Ok(())
}

#[test]
fn json_content_type_selects_json_body() -> Result<(), String> {
    let headers = fields(json!({ "Content-Type": "Application/JSON; charset=utf-8" }))?;
    let form = fields(json!({ "profile": { "name": "Ana" } }))?;
    let request = PreparedRequest::build(HttpMethod::Put, "http://localhost/api", &headers, &form)
        .map_err(|err| err.to_string())?;
    if request.body_kind != BodyKind::Json {
        return Err("Expected json body".to_owned());
    }
    if request.body.as_deref() != Some(r#"{"profile":{"name":"Ana"}}"#) {
        return Err(format!("Unexpected body {:?}", request.body));
    }
    Ok(())
}

#[test]
fn empty_form_sends_no_body() -> Result<(), String> {
    let request = PreparedRequest::build(
        HttpMethod::Get,
        "http://localhost/",
        &FieldMap::new(),
        &FieldMap::new(),
    )
    .map_err(|err| err.to_string())?;
    if request.body.is_some() {
        return Err("Expected no body".to_owned());
    }
    Ok(())
}

#[test]
fn sent_bytes_count_method_url_headers_and_body() -> Result<(), String> {
    let headers = fields(json!({ "X-Key": "abc" }))?;
    let form = fields(json!({ "a": "1" }))?;
    let request = PreparedRequest::build(HttpMethod::Post, "http://h/", &headers, &form)
        .map_err(|err| err.to_string())?;
    // POST(4) + http://h/(9) + X-Key(5) + abc(3) + a=1(3)
    if request.sent_bytes != 24 {
        return Err(format!("Unexpected sent bytes {}", request.sent_bytes));
    }
    Ok(())
}

#[test]
fn invalid_header_is_a_template_error() -> Result<(), String> {
    let headers = fields(json!({ "Bad Header": "x" }))?;
    match PreparedRequest::build(HttpMethod::Get, "http://h/", &headers, &FieldMap::new()) {
        Err(TemplateError::InvalidHeader { name, .. }) if name == "Bad Header" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other.map(|req| req.url))),
    }
}

#[test]
fn nested_header_values_are_sent_as_json_text() -> Result<(), String> {
    let headers = fields(json!({ "X-Meta": { "id": 1 } }))?;
    let request = PreparedRequest::build(HttpMethod::Get, "http://h/", &headers, &FieldMap::new())
        .map_err(|err| err.to_string())?;
    let value = request
        .headers
        .get("x-meta")
        .and_then(|value| value.to_str().ok())
        .ok_or("missing header")?;
    if value != r#"{"id":1}"# {
        return Err(format!("Unexpected header {}", value));
    }
    Ok(())
}

#[test]
fn transport_reports_status_and_received_bytes() -> Result<(), String> {
    run_async_test(async {
        let url = spawn_raw_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        )
        .await?;
        let client = build_client(&ClientSettings::default()).map_err(|err| err.to_string())?;
        let transport = HttpTransport::new(client);
        let request = PreparedRequest::build(HttpMethod::Get, &url, &FieldMap::new(), &FieldMap::new())
            .map_err(|err| err.to_string())?;
        let response = transport.send(request).await.map_err(|err| err.to_string())?;
        if response.status != 200 || response.received_bytes != 5 {
            return Err(format!("Unexpected response {:?}", response));
        }
        Ok(())
    })
}

#[test]
fn redirects_are_not_followed_by_default() -> Result<(), String> {
    run_async_test(async {
        let url = spawn_raw_server(
            "HTTP/1.1 302 Found\r\nLocation: /elsewhere\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await?;
        let client = build_client(&ClientSettings::default()).map_err(|err| err.to_string())?;
        let transport = HttpTransport::new(client);
        let request = PreparedRequest::build(HttpMethod::Post, &url, &FieldMap::new(), &FieldMap::new())
            .map_err(|err| err.to_string())?;
        let response = transport.send(request).await.map_err(|err| err.to_string())?;
        if response.status != 302 {
            return Err(format!("Expected 302, got {}", response.status));
        }
        Ok(())
    })
}

#[test]
fn connection_refused_is_a_transport_error() -> Result<(), String> {
    run_async_test(async {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|err| err.to_string())?;
        let addr = listener.local_addr().map_err(|err| err.to_string())?;
        drop(listener);
        let client = build_client(&ClientSettings {
            request_timeout: Duration::from_secs(2),
            follow_redirects: false,
        })
        .map_err(|err| err.to_string())?;
        let transport = HttpTransport::new(client);
        let request = PreparedRequest::build(
            HttpMethod::Get,
            &format!("http://{}", addr),
            &FieldMap::new(),
            &FieldMap::new(),
        )
        .map_err(|err| err.to_string())?;
        match transport.send(request).await {
            Err(err) if !err.is_timeout() => Ok(()),
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    })
}
