//! Request templates: the model, placeholder parsing and resolution, and the
//! JSON-backed store.
mod defaults;
mod model;
mod placeholder;
mod resolver;
mod store;


pub use defaults::{DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATES_PATH, default_template};
pub use model::{FieldMap, RequestData, RunConfig, Template};
pub use placeholder::{ParsedPlaceholder, parse_arguments, parse_placeholder, token_pattern};
pub use resolver::{ResolveSession, ResolvedFields, resolve, resolve_template};
pub use store::TemplateStore;
