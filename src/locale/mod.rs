//! Supported locales, region lookup, and the per-locale data tables used by
//! the generators.
mod catalog;
mod language;

#[cfg(test)]
mod tests;

pub use catalog::{
    DEFAULT_LOCALE, LocaleProfile, SUPPORTED_LOCALES, data_regions, find_locale,
    locale_from_region,
};
pub use language::{LOREM_WORDS, LanguageData};
