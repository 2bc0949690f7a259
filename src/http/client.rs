use std::time::Duration;

use reqwest::{Client, redirect};

use crate::error::ConfigError;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("lurebuster/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REDIRECT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    /// When false, 3xx responses are returned and counted as redirects.
    pub follow_redirects: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            follow_redirects: false,
        }
    }
}

/// Builds the client shared by every worker of a run.
///
/// # Errors
///
/// Returns `BuildClient` when reqwest rejects the configuration.
pub fn build_client(settings: &ClientSettings) -> Result<Client, ConfigError> {
    let policy = if settings.follow_redirects {
        redirect::Policy::limited(REDIRECT_LIMIT)
    } else {
        redirect::Policy::none()
    };
    Client::builder()
        .timeout(settings.request_timeout)
        .redirect(policy)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| ConfigError::BuildClient { source: err })
}
