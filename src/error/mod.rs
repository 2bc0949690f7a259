mod app;
mod config;
mod metrics;
mod template;
mod transport;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use metrics::MetricsError;
pub use template::TemplateError;
pub use transport::TransportError;
pub use validation::ValidationError;
