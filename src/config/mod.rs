//! Configuration loading and application.
mod apply;
mod loader;
mod parse;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::{Settings, apply_config, apply_overrides};
pub use loader::{DEFAULT_CONFIG_JSON, DEFAULT_CONFIG_TOML, load_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
pub(crate) use parse::parse_duration_value;
