use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::{
    parse_delay, parse_duration_arg, parse_form_field, parse_header, parse_positive_u64,
    parse_positive_usize, parse_region,
};
use super::types::{
    HttpMethod, OutputFormat, PasswordComplexity, PositiveU64, PositiveUsize,
};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List every placeholder the generators support
    Placeholders(PlaceholdersArgs),
    /// List data regions and the locale each resolves to
    Regions,
    /// Manage the templates file
    Templates {
        #[command(subcommand)]
        action: TemplatesCommand,
    },
    /// Resolve the selected template once and print headers and form fields
    Render(RenderArgs),
}

#[derive(Debug, Args, Clone)]
pub struct PlaceholdersArgs {
    /// Only list one provider (e.g. PERSON)
    #[arg(long = "provider", short = 'p')]
    pub provider: Option<String>,

    /// Data region whose locale the registry is built for
    #[arg(long = "region", short = 'r', value_parser = parse_region)]
    pub region: Option<String>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum TemplatesCommand {
    /// List template names
    List,
    /// Print one template as JSON
    Show { name: String },
    /// Remove a template and save the file
    Delete { name: String },
    /// Write the built-in example template to the templates file
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Generate every placeholder occurrence independently
    #[arg(long = "unique")]
    pub unique: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent templated form flooder - fills credential-harvesting endpoints with synthetic personal data, with live stats and cooperative stop."
)]
pub struct LureArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a config file (.toml or .json)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Templates file (defaults to templates.json)
    #[arg(long = "templates", env = "LUREBUSTER_TEMPLATES")]
    pub templates: Option<String>,

    /// Template to run (defaults to the first one in the file)
    #[arg(long = "template", short = 't')]
    pub template: Option<String>,

    /// Target URL, overrides the template
    #[arg(long = "url", short = 'u')]
    pub url: Option<String>,

    /// HTTP method, overrides the template
    #[arg(long = "method", short = 'X', value_enum, ignore_case = true)]
    pub method: Option<HttpMethod>,

    /// Extra header 'Key: Value' (repeatable, placeholders allowed)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Extra form field 'name=value' (repeatable, placeholders allowed)
    #[arg(long = "field", short = 'F', value_parser = parse_form_field)]
    pub fields: Vec<(String, String)>,

    /// Total number of requests
    #[arg(long = "requests", short = 'n', value_parser = parse_positive_u64)]
    pub requests: Option<PositiveU64>,

    /// Number of concurrent workers
    #[arg(long = "threads", short = 'j', value_parser = parse_positive_usize)]
    pub threads: Option<PositiveUsize>,

    /// Delay between requests of one worker, in seconds (e.g. 0.5)
    #[arg(long = "delay", short = 'd', value_parser = parse_delay)]
    pub delay: Option<f64>,

    /// Two-letter data region for generated values (e.g. US, BR)
    #[arg(long = "region", short = 'r', value_parser = parse_region)]
    pub region: Option<String>,

    /// Password length preset for MISC_password placeholders
    #[arg(long = "password-complexity", value_enum, ignore_case = true)]
    pub password_complexity: Option<PasswordComplexity>,

    /// Request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Follow redirects instead of counting 3xx responses
    #[arg(long = "follow-redirects")]
    pub follow_redirects: bool,

    /// How long a stopped run waits for workers (supports ms/s/m/h)
    #[arg(long = "join-grace", value_parser = parse_duration_arg)]
    pub join_grace: Option<Duration>,

    /// Send a single request and exit
    #[arg(long = "test")]
    pub test: bool,

    /// Disable the live progress line
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Debug logging, including per-request errors
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Log level: DEBUG, INFO, WARNING, ERROR or CRITICAL
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<String>,

    /// Summary format
    #[arg(long = "output-format", value_enum, ignore_case = true)]
    pub output_format: Option<OutputFormat>,
}
