//! CLI argument types and parsing helpers.
mod cli;
mod parsers;
mod types;


pub use cli::{Command, LureArgs, PlaceholdersArgs, RenderArgs, TemplatesCommand};
pub use types::{
    HttpMethod, LogLevel, OutputFormat, PasswordComplexity, PositiveU64, PositiveUsize,
};
