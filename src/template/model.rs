use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::args::{HttpMethod, PasswordComplexity};
use crate::error::ConfigError;
use crate::locale::{LocaleProfile, locale_from_region};
use crate::providers::GenerationOptions;

/// Header or form-field mapping. Values are strings, nested mappings, or other
/// JSON leaves that pass through unchanged.
pub type FieldMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    pub method: HttpMethod,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub data_region: String,
    #[serde(default)]
    pub password_complexity: PasswordComplexity,
    pub request_count: u64,
    pub thread_count: usize,
    #[serde(default)]
    pub request_delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub request_data: RequestData,
    #[serde(default)]
    pub headers: FieldMap,
    #[serde(default)]
    pub form_fields: FieldMap,
    pub config: RunConfig,
}

impl RunConfig {
    /// Generator settings derived from this configuration.
    #[must_use]
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            password_length: self.password_complexity.length_range(),
        }
    }

    /// Inter-request delay, `None` when zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelay` for negative or non-finite values.
    pub fn delay(&self) -> Result<Option<std::time::Duration>, ConfigError> {
        let invalid = || ConfigError::InvalidDelay {
            value: self.request_delay.to_string(),
        };
        if !self.request_delay.is_finite() || self.request_delay.is_sign_negative() {
            return Err(invalid());
        }
        let delay =
            std::time::Duration::try_from_secs_f64(self.request_delay).map_err(|_err| invalid())?;
        Ok((!delay.is_zero()).then_some(delay))
    }
}

impl Template {
    /// Locale selected by the template's data region.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRegion` when no locale matches.
    pub fn locale(&self) -> Result<&'static LocaleProfile, ConfigError> {
        locale_from_region(&self.config.data_region)
    }

    /// Checks everything that must hold before a run may start.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::TemplateNameRequired);
        }
        let url = url::Url::parse(&self.request_data.url).map_err(|err| ConfigError::InvalidUrl {
            url: self.request_data.url.clone(),
            source: err,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: self.request_data.url.clone(),
            });
        }
        if self.config.request_count == 0 {
            return Err(ConfigError::FieldMustBePositive {
                field: "request_count",
            });
        }
        if self.config.thread_count == 0 {
            return Err(ConfigError::FieldMustBePositive {
                field: "thread_count",
            });
        }
        self.config.delay()?;
        self.locale()?;
        Ok(())
    }
}
