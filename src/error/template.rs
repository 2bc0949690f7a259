use thiserror::Error;

/// Template-authoring failures. Fatal to the attempt being resolved, never to
/// the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateError {
    #[error("No provider found for placeholder '{token}'.")]
    UnknownPlaceholder { token: String },
    #[error("Method '{method}' not available on provider {provider}.")]
    UnknownMethod { provider: String, method: String },
    #[error("Malformed placeholder '{token}'.")]
    MalformedPlaceholder { token: String },
    #[error("{method}() takes {expected} positional arguments but {given} were given.")]
    TooManyPositional {
        method: String,
        expected: usize,
        given: usize,
    },
    #[error("{method}() got an unexpected keyword argument '{name}'.")]
    UnexpectedKeyword { method: String, name: String },
    #[error("{method}() got multiple values for argument '{name}'.")]
    DuplicateArgument { method: String, name: String },
    #[error("{method}() argument '{name}': {reason}")]
    InvalidArgument {
        method: String,
        name: String,
        reason: String,
    },
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("Placeholder syntax unavailable: {reason}")]
    Syntax { reason: String },
    #[error("Failed to encode request body: {reason}")]
    BodyEncoding { reason: String },
}

impl TemplateError {
    pub(crate) fn invalid_argument(method: &str, name: &str, reason: impl Into<String>) -> Self {
        TemplateError::InvalidArgument {
            method: method.to_owned(),
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
