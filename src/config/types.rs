use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::error::ConfigError;

/// Contents of `lurebuster.toml` / `lurebuster.json`. Every key is optional;
/// CLI flags win over these values.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub templates_path: Option<String>,
    pub template: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    #[serde(alias = "timeout")]
    pub request_timeout: Option<DurationValue>,
    pub follow_redirects: Option<bool>,
    pub join_grace: Option<DurationValue>,
    pub progress: Option<bool>,
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ConfigError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ConfigError::InvalidDuration {
                        reason: "Duration must be > 0.".to_owned(),
                    })
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text)
                .map_err(|reason| ConfigError::InvalidDuration { reason }),
        }
    }
}
