//! Core library for the `lurebuster` CLI.
//!
//! `lurebuster` floods phishing collection forms with plausible fake
//! submissions. The crate exposes the building blocks the binary wires
//! together: request templates and their placeholder resolver, locale-aware
//! data providers, the HTTP transport, the concurrent attack dispatcher, and
//! run statistics. The command-line application is the primary interface;
//! library APIs may evolve with it.
pub mod args;
pub mod attack;
pub mod config;
pub mod error;
pub mod http;
pub mod locale;
pub mod metrics;
pub mod providers;
pub mod template;
