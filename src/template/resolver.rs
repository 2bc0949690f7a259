use std::collections::HashMap;

use rand::RngCore;
use serde_json::Value;

use crate::error::TemplateError;
use crate::providers::{CapabilityRegistry, GenerationOptions};

use super::model::{FieldMap, Template};
use super::placeholder::{parse_placeholder, token_pattern};

/// One substitution pass. In repeat mode every occurrence of an identical
/// token string shares one generated value for the lifetime of the session;
/// otherwise each occurrence is generated independently.
pub struct ResolveSession<'run> {
    registry: &'run CapabilityRegistry,
    options: &'run GenerationOptions,
    repeat: bool,
    cache: HashMap<String, String>,
    generated: usize,
}

impl<'run> ResolveSession<'run> {
    #[must_use]
    pub fn new(
        registry: &'run CapabilityRegistry,
        options: &'run GenerationOptions,
        repeat: bool,
    ) -> Self {
        Self {
            registry,
            options,
            repeat,
            cache: HashMap::new(),
            generated: 0,
        }
    }

    /// Number of generator calls made so far.
    #[must_use]
    pub const fn generated(&self) -> usize {
        self.generated
    }

    /// Substitutes every token in `text`.
    ///
    /// # Errors
    ///
    /// Any parse or generation failure aborts the whole call.
    pub fn resolve_text(
        &mut self,
        text: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, TemplateError> {
        let pattern = token_pattern()?;
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            output.push_str(text.get(cursor..found.start()).unwrap_or_default());
            let value = self.value_for(found.as_str(), rng)?;
            output.push_str(&value);
            cursor = found.end();
        }
        output.push_str(text.get(cursor..).unwrap_or_default());
        Ok(output)
    }

    /// Walks a JSON value: strings are substituted, objects recursed, other
    /// leaves returned unchanged.
    ///
    /// # Errors
    ///
    /// Any parse or generation failure aborts the whole call.
    pub fn resolve_value(
        &mut self,
        value: &Value,
        rng: &mut dyn RngCore,
    ) -> Result<Value, TemplateError> {
        match value {
            Value::String(text) => Ok(Value::String(self.resolve_text(text, rng)?)),
            Value::Object(fields) => Ok(Value::Object(self.resolve_fields(fields, rng)?)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => Ok(value.clone()),
        }
    }

    /// # Errors
    ///
    /// Any parse or generation failure aborts the whole call.
    pub fn resolve_fields(
        &mut self,
        fields: &FieldMap,
        rng: &mut dyn RngCore,
    ) -> Result<FieldMap, TemplateError> {
        let mut resolved = FieldMap::new();
        for (key, value) in fields {
            resolved.insert(key.clone(), self.resolve_value(value, rng)?);
        }
        Ok(resolved)
    }

    fn value_for(&mut self, token: &str, rng: &mut dyn RngCore) -> Result<String, TemplateError> {
        if self.repeat
            && let Some(cached) = self.cache.get(token)
        {
            return Ok(cached.clone());
        }
        let parsed = parse_placeholder(token)?;
        if self.registry.provider(&parsed.provider).is_none() {
            return Err(TemplateError::UnknownPlaceholder {
                token: token.to_owned(),
            });
        }
        let value = self
            .registry
            .call(&parsed.provider, &parsed.method, &parsed.args, rng, self.options)?
            .to_string();
        self.generated = self.generated.saturating_add(1);
        if self.repeat {
            self.cache.insert(token.to_owned(), value.clone());
        }
        Ok(value)
    }
}

/// Headers and form fields of one attempt, resolved together.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFields {
    pub headers: FieldMap,
    pub form_fields: FieldMap,
}

/// Resolves a template's headers and form fields in one session, so a token
/// repeated across both carries one value in repeat mode.
///
/// # Errors
///
/// Any parse or generation failure aborts the whole call.
pub fn resolve_template(
    registry: &CapabilityRegistry,
    template: &Template,
    repeat: bool,
    rng: &mut dyn RngCore,
) -> Result<ResolvedFields, TemplateError> {
    let options = template.config.generation_options();
    let mut session = ResolveSession::new(registry, &options, repeat);
    let headers = session.resolve_fields(&template.headers, rng)?;
    let form_fields = session.resolve_fields(&template.form_fields, rng)?;
    Ok(ResolvedFields {
        headers,
        form_fields,
    })
}

/// Resolves a single value with the thread-local generator.
///
/// # Errors
///
/// Any parse or generation failure aborts the whole call.
pub fn resolve(
    registry: &CapabilityRegistry,
    options: &GenerationOptions,
    value: &Value,
    repeat: bool,
) -> Result<Value, TemplateError> {
    let mut rng = rand::thread_rng();
    ResolveSession::new(registry, options, repeat).resolve_value(value, &mut rng)
}
