use serde_json::{Value, json};

use crate::args::{HttpMethod, PasswordComplexity};

use super::model::{FieldMap, RequestData, RunConfig, Template};

pub const DEFAULT_TEMPLATE_NAME: &str = "Example Template";
pub const DEFAULT_TEMPLATES_PATH: &str = "templates.json";

fn field_map(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            FieldMap::new()
        }
    }
}

/// Template written by `templates init` and used when no store exists.
#[must_use]
pub fn default_template() -> Template {
    Template {
        name: DEFAULT_TEMPLATE_NAME.to_owned(),
        request_data: RequestData {
            method: HttpMethod::Post,
            url: "https://example.com/login".to_owned(),
        },
        headers: field_map(json!({
            "User-Agent": "{{USER_AGENT_user_agent}}",
            "Content-Type": "application/x-www-form-urlencoded",
            "Accept": "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            "Accept-Language": "en-US,en;q=0.5"
        })),
        form_fields: field_map(json!({
            "username": "{{INTERNET_user_name}}",
            "password": "{{MISC_password}}",
            "email": "{{INTERNET_free_email}}",
            "address": "{{ADDRESS_address}}",
            "phone_number": "{{PHONE_NUMBER_msisdn}}"
        })),
        config: RunConfig {
            data_region: "BR".to_owned(),
            password_complexity: PasswordComplexity::Random,
            request_count: 1000,
            thread_count: 5,
            request_delay: 0.5,
        },
    }
}
