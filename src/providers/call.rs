use crate::error::TemplateError;

use super::value::Scalar;

/// How a parameter receives its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Bound by position or by name.
    Positional,
    /// Bound by name only.
    Keyword,
}

impl ParamKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKind::Positional => "POSITIONAL_OR_KEYWORD",
            ParamKind::Keyword => "KEYWORD_ONLY",
        }
    }
}

/// Default attached to a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    /// Caller must supply a value.
    Required,
    /// Parameter is optional and absent unless supplied.
    Null,
    /// Raw default text, coerced like placeholder arguments.
    Value(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub type_tag: &'static str,
    pub default: ParamDefault,
    pub kind: ParamKind,
}

impl ParamSpec {
    #[must_use]
    pub const fn positional(name: &'static str, type_tag: &'static str, default: &'static str) -> Self {
        Self {
            name,
            type_tag,
            default: ParamDefault::Value(default),
            kind: ParamKind::Positional,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, type_tag: &'static str) -> Self {
        Self {
            name,
            type_tag,
            default: ParamDefault::Null,
            kind: ParamKind::Positional,
        }
    }

    #[must_use]
    pub const fn keyword(name: &'static str, type_tag: &'static str, default: &'static str) -> Self {
        Self {
            name,
            type_tag,
            default: ParamDefault::Value(default),
            kind: ParamKind::Keyword,
        }
    }

    /// Default rendered for listings, `None` for optional parameters.
    #[must_use]
    pub fn default_label(&self) -> Option<&'static str> {
        match self.default {
            ParamDefault::Required => None,
            ParamDefault::Null => Some("None"),
            ParamDefault::Value(value) => Some(value),
        }
    }
}

/// Arguments parsed from a placeholder, before they are bound to a
/// generator's parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub positional: Vec<Scalar>,
    pub keyword: Vec<(String, Scalar)>,
}

impl CallArgs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    #[must_use]
    pub fn keyword_value(&self, name: &str) -> Option<&Scalar> {
        self.keyword
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Arguments matched against a parameter list.
#[derive(Debug)]
pub struct BoundArgs<'params> {
    method: &'static str,
    params: &'params [ParamSpec],
    values: Vec<Option<Scalar>>,
}

impl<'params> BoundArgs<'params> {
    /// Binds positional arguments in order to the positional parameters, then
    /// keywords by name.
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError` when there are more positional arguments
    /// than positional parameters, when a keyword names no parameter, or when
    /// a parameter receives two values.
    pub fn bind(
        method: &'static str,
        params: &'params [ParamSpec],
        args: &CallArgs,
    ) -> Result<Self, TemplateError> {
        let mut values: Vec<Option<Scalar>> = vec![None; params.len()];
        let positional_slots: Vec<usize> = params
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.kind == ParamKind::Positional)
            .map(|(index, _)| index)
            .collect();

        if args.positional.len() > positional_slots.len() {
            return Err(TemplateError::TooManyPositional {
                method: method.to_owned(),
                expected: positional_slots.len(),
                given: args.positional.len(),
            });
        }

        for (slot, value) in positional_slots.iter().zip(args.positional.iter()) {
            if let Some(entry) = values.get_mut(*slot) {
                *entry = Some(value.clone());
            }
        }

        for (name, value) in &args.keyword {
            let Some(index) = params.iter().position(|spec| spec.name == name) else {
                return Err(TemplateError::UnexpectedKeyword {
                    method: method.to_owned(),
                    name: name.clone(),
                });
            };
            let Some(entry) = values.get_mut(index) else {
                continue;
            };
            if entry.is_some() {
                return Err(TemplateError::DuplicateArgument {
                    method: method.to_owned(),
                    name: name.clone(),
                });
            }
            *entry = Some(value.clone());
        }

        for (spec, value) in params.iter().zip(values.iter()) {
            if value.is_none() && spec.default == ParamDefault::Required {
                return Err(TemplateError::invalid_argument(
                    method,
                    spec.name,
                    "missing required argument",
                ));
            }
        }

        Ok(Self {
            method,
            params,
            values,
        })
    }

    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.method
    }

    /// True when the caller supplied the parameter.
    #[must_use]
    pub fn explicit(&self, name: &str) -> bool {
        self.slot(name)
            .and_then(|index| self.values.get(index))
            .is_some_and(Option::is_some)
    }

    /// Supplied value or the parameter's default. `None` for absent optional
    /// parameters and for the literal text `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Scalar> {
        let index = self.slot(name)?;
        let value = match self.values.get(index) {
            Some(Some(value)) => value.clone(),
            Some(None) | None => match self.params.get(index)?.default {
                ParamDefault::Value(raw) => Scalar::coerce(raw),
                ParamDefault::Required | ParamDefault::Null => return None,
            },
        };
        match value.as_str() {
            Some("None") => None,
            Some(_) | None => Some(value),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is absent or not an integer.
    pub fn int(&self, name: &str) -> Result<i64, TemplateError> {
        match self.get(name) {
            Some(Scalar::Int(value)) => Ok(value),
            Some(other) => Err(self.invalid(name, format!("expected int, got {}", other.type_name()))),
            None => Err(self.invalid(name, "missing value")),
        }
    }

    fn count(&self, name: &str) -> Result<usize, TemplateError> {
        let value = self.int(name)?;
        usize::try_from(value).map_err(|err| self.invalid(name, format!("must be >= 0 ({})", err)))
    }

    /// Non-negative integer parameter no larger than `limit`. Every size or
    /// repetition argument goes through here so a template cannot ask a
    /// generator for an unbounded allocation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is absent, not an integer,
    /// negative, or above `limit`.
    pub fn count_max(&self, name: &str, limit: usize) -> Result<usize, TemplateError> {
        let value = self.count(name)?;
        if value > limit {
            return Err(self.invalid(name, format!("must be <= {}", limit)));
        }
        Ok(value)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is not a recognised boolean.
    pub fn flag(&self, name: &str) -> Result<bool, TemplateError> {
        match self.get(name) {
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.invalid(name, format!("expected bool, got '{}'", value))),
            None => Ok(false),
        }
    }

    /// Text parameter; numbers are rendered back to text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }

    fn slot(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|spec| spec.name == name)
    }

    fn invalid(&self, name: &str, reason: impl Into<String>) -> TemplateError {
        TemplateError::invalid_argument(self.method, name, reason)
    }
}
