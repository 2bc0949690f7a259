//! Data generators grouped by provider, and the registry that exposes them as
//! placeholders for one locale.
mod address;
mod base;
mod call;
mod company;
mod credit_card;
mod date_time;
mod internet;
mod lorem;
mod misc;
mod person;
mod phone_number;
mod registry;
mod user_agent;
mod value;

#[cfg(test)]
mod tests;

pub use call::{BoundArgs, CallArgs, ParamDefault, ParamKind, ParamSpec};
pub use credit_card::{luhn_check_digit, luhn_valid};
pub use date_time::relative_datetime;
pub use internet::ascii_fold;
pub use registry::{
    CapabilityRegistry, GenContext, GenerationOptions, GeneratorDescriptor, GeneratorFn,
    ProviderService, placeholder_spelling,
};
pub use value::Scalar;
