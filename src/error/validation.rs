use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid header format: '{value}'. Expected 'Key: Value'")]
    InvalidHeaderFormat { value: String },
    #[error("Invalid form field: '{value}'. Expected 'name=value'")]
    InvalidFormField { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid delay '{value}'. Expected seconds, e.g. 0.5")]
    InvalidDelay { value: String },
    #[error("Invalid region '{value}'. Expected a two-letter code such as US or BR.")]
    InvalidRegion { value: String },
    #[error("Failed to build runtime: {source}")]
    RuntimeBuild {
        #[source]
        source: std::io::Error,
    },
}
