use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::{ConfigError, TemplateError};
use crate::locale::{LocaleProfile, find_locale};

use super::call::{BoundArgs, CallArgs, ParamSpec};
use super::value::Scalar;
use super::{
    address, base, company, credit_card, date_time, internet, lorem, misc, person, phone_number,
    user_agent,
};

pub type GeneratorFn = fn(&mut GenContext<'_>, &BoundArgs<'_>) -> Result<Scalar, TemplateError>;

/// Name, signature and entry point of one generator.
pub struct GeneratorDescriptor {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub generate: GeneratorFn,
}

impl GeneratorDescriptor {
    /// Rendered signature, e.g. `chrome(version_from=13, version_to=63)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|spec| match spec.default_label() {
                Some(default) => format!("{}={}", spec.name, default),
                None => spec.name.to_owned(),
            })
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// A provider category as declared by its module.
pub struct ProviderDef {
    pub name: &'static str,
    pub methods: &'static [GeneratorDescriptor],
}

/// Settings that generators read from the active template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Password length used when the placeholder does not set one.
    pub password_length: RangeInclusive<usize>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            password_length: 10..=10,
        }
    }
}

/// Everything a generator may draw from while producing one value.
pub struct GenContext<'run> {
    pub rng: &'run mut dyn RngCore,
    pub locale: &'static LocaleProfile,
    pub options: &'run GenerationOptions,
}

static COMPILED_PATTERNS: Lazy<Mutex<HashMap<String, rand_regex::Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

const PATTERN_MAX_REPEAT: u32 = 16;

impl GenContext<'_> {
    /// Random element, or an empty string for an empty table.
    pub fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items.choose(&mut *self.rng).copied().unwrap_or_default()
    }

    /// Uniform integer in `[low, high]`; `low` when the range is empty.
    pub fn int_in(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    pub fn digit(&mut self) -> char {
        char::from(self.rng.gen_range(b'0'..=b'9'))
    }

    pub fn non_zero_digit(&mut self) -> char {
        char::from(self.rng.gen_range(b'1'..=b'9'))
    }

    /// Coin flip weighted by `percent` (0..=100).
    pub fn chance(&mut self, percent: u32) -> bool {
        self.rng.gen_range(0..100) < percent
    }

    /// Replaces `#` with a digit and `%` with a non-zero digit.
    pub fn numerify(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|ch| match ch {
                '#' => self.digit(),
                '%' => self.non_zero_digit(),
                other => other,
            })
            .collect()
    }

    /// Replaces `?` with a character drawn from `letters`.
    pub fn lexify(&mut self, pattern: &str, letters: &str) -> String {
        let pool: Vec<char> = letters.chars().collect();
        pattern
            .chars()
            .map(|ch| match ch {
                '?' => pool.choose(&mut *self.rng).copied().unwrap_or(ch),
                other => other,
            })
            .collect()
    }

    /// Samples a string matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the pattern cannot be compiled.
    pub fn regex(&mut self, method: &str, pattern: &str) -> Result<String, TemplateError> {
        let compiled = {
            let mut cache = COMPILED_PATTERNS
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match cache.get(pattern) {
                Some(compiled) => compiled.clone(),
                None => {
                    let compiled = rand_regex::Regex::compile(pattern, PATTERN_MAX_REPEAT)
                        .map_err(|err| {
                            TemplateError::invalid_argument(method, "pattern", err.to_string())
                        })?;
                    cache.insert(pattern.to_owned(), compiled.clone());
                    compiled
                }
            }
        };
        Ok(self.rng.sample::<String, _>(&compiled))
    }
}

/// Generators exposed by one provider category.
pub struct ProviderService {
    name: &'static str,
    methods: Vec<&'static GeneratorDescriptor>,
    placeholders: Vec<String>,
}

impl ProviderService {
    /// Collects the provider's own generators, dropping any that share a name
    /// with the base helper set.
    fn from_def(def: &'static ProviderDef) -> Self {
        let methods: Vec<&'static GeneratorDescriptor> = def
            .methods
            .iter()
            .filter(|descriptor| !base::is_base_method(descriptor.name))
            .collect();
        let placeholders = methods
            .iter()
            .map(|descriptor| placeholder_spelling(def.name, descriptor))
            .collect();
        Self {
            name: def.name,
            methods,
            placeholders,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn methods(&self) -> &[&'static GeneratorDescriptor] {
        &self.methods
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&'static GeneratorDescriptor> {
        self.methods
            .iter()
            .copied()
            .find(|descriptor| descriptor.name == name)
    }

    /// Placeholder spellings in method order.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }
}

/// `{{PROVIDER_method}}`, or `{{PROVIDER_method_(a, b)}}` when the method has
/// parameters.
#[must_use]
pub fn placeholder_spelling(provider: &str, descriptor: &GeneratorDescriptor) -> String {
    let params: Vec<&str> = descriptor.params.iter().map(|spec| spec.name).collect();
    if params.is_empty() {
        format!("{{{{{}_{}}}}}", provider, descriptor.name)
    } else {
        format!("{{{{{}_{}_({})}}}}", provider, descriptor.name, params.join(", "))
    }
}

static PROVIDERS: &[&ProviderDef] = &[
    &person::PROVIDER,
    &address::PROVIDER,
    &internet::PROVIDER,
    &misc::PROVIDER,
    &phone_number::PROVIDER,
    &user_agent::PROVIDER,
    &credit_card::PROVIDER,
    &company::PROVIDER,
    &lorem::PROVIDER,
    &date_time::PROVIDER,
];

/// Every generator available for one locale, grouped by provider.
pub struct CapabilityRegistry {
    locale: &'static LocaleProfile,
    providers: Vec<ProviderService>,
}

impl CapabilityRegistry {
    /// # Errors
    ///
    /// Returns `UnsupportedLocale` when `locale` is not in the catalog.
    pub fn build(locale: &str) -> Result<Self, ConfigError> {
        let profile = find_locale(locale)?;
        let providers = PROVIDERS
            .iter()
            .copied()
            .map(ProviderService::from_def)
            .collect();
        Ok(Self {
            locale: profile,
            providers,
        })
    }

    #[must_use]
    pub const fn locale(&self) -> &'static LocaleProfile {
        self.locale
    }

    #[must_use]
    pub fn providers(&self) -> &[ProviderService] {
        &self.providers
    }

    /// Provider by its uppercase name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&ProviderService> {
        self.providers.iter().find(|service| service.name == name)
    }

    /// Every placeholder spelling, provider by provider.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        self.providers
            .iter()
            .flat_map(|service| service.placeholders.iter().map(String::as_str))
            .collect()
    }

    /// Shared helpers every provider inherits and none exposes.
    #[must_use]
    pub fn base_methods(&self) -> &'static [GeneratorDescriptor] {
        base::BASE_METHODS
    }

    /// Binds `args` to the method's parameters and runs it.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlaceholder` for a missing provider, `UnknownMethod`
    /// for a missing method, and any binding or generation failure.
    pub fn call(
        &self,
        provider: &str,
        method: &str,
        args: &CallArgs,
        rng: &mut dyn RngCore,
        options: &GenerationOptions,
    ) -> Result<Scalar, TemplateError> {
        let service = self
            .provider(provider)
            .ok_or_else(|| TemplateError::UnknownPlaceholder {
                token: provider.to_owned(),
            })?;
        let descriptor = service
            .method(method)
            .ok_or_else(|| TemplateError::UnknownMethod {
                provider: provider.to_owned(),
                method: method.to_owned(),
            })?;
        let bound = BoundArgs::bind(descriptor.name, descriptor.params, args)?;
        let mut ctx = GenContext {
            rng,
            locale: self.locale,
            options,
        };
        (descriptor.generate)(&mut ctx, &bound)
    }
}
