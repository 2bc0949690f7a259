use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::args::HttpMethod;
use crate::error::TemplateError;
use crate::template::FieldMap;

/// Encoding used for the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Form,
    Json,
}

/// A fully resolved request, validated and ready to send.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub body_kind: BodyKind,
    /// Method, URL, header names and values, and body, in bytes.
    pub sent_bytes: u64,
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            value.to_string()
        }
    }
}

fn byte_len(text: &str) -> u64 {
    u64::try_from(text.len()).unwrap_or(u64::MAX)
}

impl PreparedRequest {
    /// Builds the request from resolved headers and form fields. The body is
    /// form-encoded unless the Content-Type mentions `application/json`; it
    /// is omitted when there are no form fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` for names or values HTTP cannot carry and
    /// `BodyEncoding` when a JSON body cannot be serialized.
    pub fn build(
        method: HttpMethod,
        url: &str,
        headers: &FieldMap,
        form_fields: &FieldMap,
    ) -> Result<Self, TemplateError> {
        let mut header_map = HeaderMap::with_capacity(headers.len());
        let mut sent_bytes = byte_len(method.as_str()).saturating_add(byte_len(url));
        for (name, value) in headers {
            let text = field_text(value);
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|err| TemplateError::InvalidHeader {
                    name: name.clone(),
                    reason: err.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(&text).map_err(|err| TemplateError::InvalidHeader {
                    name: name.clone(),
                    reason: err.to_string(),
                })?;
            sent_bytes = sent_bytes
                .saturating_add(byte_len(name))
                .saturating_add(byte_len(&text));
            header_map.insert(header_name, header_value);
        }

        let body_kind = match header_map.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) {
            Some(content_type) if content_type.to_ascii_lowercase().contains("application/json") => {
                BodyKind::Json
            }
            Some(_) | None => BodyKind::Form,
        };

        let body = if form_fields.is_empty() {
            None
        } else {
            Some(encode_body(body_kind, form_fields)?)
        };
        if let Some(body) = body.as_deref() {
            sent_bytes = sent_bytes.saturating_add(byte_len(body));
        }

        Ok(Self {
            method,
            url: url.to_owned(),
            headers: header_map,
            body,
            body_kind,
            sent_bytes,
        })
    }
}

/// Serializes form fields as `application/x-www-form-urlencoded` or JSON.
/// Nested form values are sent as their JSON text.
///
/// # Errors
///
/// Returns `BodyEncoding` when JSON serialization fails.
pub fn encode_body(kind: BodyKind, fields: &FieldMap) -> Result<String, TemplateError> {
    match kind {
        BodyKind::Json => serde_json::to_string(fields).map_err(|err| TemplateError::BodyEncoding {
            reason: err.to_string(),
        }),
        BodyKind::Form => {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (name, value) in fields {
                serializer.append_pair(name, &field_text(value));
            }
            Ok(serializer.finish())
        }
    }
}
