use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a run from starting. No run state exists when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Locale \"{locale}\" not available.")]
    UnsupportedLocale { locale: String },
    #[error("No locale available for data region \"{region}\".")]
    UnknownRegion { region: String },
    #[error("Log level \"{level}\" not available.")]
    UnknownLogLevel { level: String },
    #[error("Template \"{name}\" not found.")]
    TemplateNotFound { name: String },
    #[error("Templates file '{path}' already exists. Use --force to overwrite.")]
    TemplatesExist { path: PathBuf },
    #[error("Template name is required.")]
    TemplateNameRequired,
    #[error("No templates available.")]
    NoTemplates,
    #[error("Failed to read templates '{path}': {source}")]
    ReadTemplates {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse templates '{path}': {source}")]
    ParseTemplates {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write templates '{path}': {source}")]
    WriteTemplates {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize templates: {source}")]
    SerializeTemplates {
        #[source]
        source: serde_json::Error,
    },
    #[error("'{field}' must be greater than 0.")]
    FieldMustBePositive { field: &'static str },
    #[error("Invalid request delay '{value}'. Expected a finite number of seconds >= 0.")]
    InvalidDelay { value: String },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Invalid duration: {reason}")]
    InvalidDuration { reason: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("A run is already in progress.")]
    RunInProgress,
}
