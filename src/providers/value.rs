use std::fmt;

/// Value produced by a generator or parsed from a placeholder argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Coerce raw placeholder text: integer first, then float, then the text
    /// itself.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            return Scalar::Int(value);
        }
        if let Ok(value) = raw.parse::<f64>() {
            return Scalar::Float(value);
        }
        Scalar::Str(raw.to_owned())
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Float(_) | Scalar::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => Some(*value),
            Scalar::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(value) => Some(value.as_str()),
            Scalar::Int(_) | Scalar::Float(_) => None,
        }
    }

    /// Truthiness accepted for boolean parameters (`True`, `false`, `1`, `0`...).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Int(value) => Some(*value != 0),
            Scalar::Float(_) => None,
            Scalar::Str(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" => Some(true),
                "false" | "no" | "off" => Some(false),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{:?}", value),
            Scalar::Str(value) => f.write_str(value),
        }
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_owned())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}
