//! Helpers shared by every provider. They are members of each provider but
//! never exposed as placeholders.
use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor};
use super::value::Scalar;

const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub static BASE_METHODS: &[GeneratorDescriptor] = &[
    GeneratorDescriptor {
        name: "random_int",
        params: &[
            ParamSpec::positional("min", "int", "0"),
            ParamSpec::positional("max", "int", "9999"),
            ParamSpec::positional("step", "int", "1"),
        ],
        generate: random_int,
    },
    GeneratorDescriptor {
        name: "random_digit",
        params: &[],
        generate: random_digit,
    },
    GeneratorDescriptor {
        name: "random_letter",
        params: &[],
        generate: random_letter,
    },
    GeneratorDescriptor {
        name: "numerify",
        params: &[ParamSpec::positional("text", "str", "###")],
        generate: numerify,
    },
    GeneratorDescriptor {
        name: "lexify",
        params: &[
            ParamSpec::positional("text", "str", "????"),
            ParamSpec::positional("letters", "str", ASCII_LETTERS),
        ],
        generate: lexify,
    },
    GeneratorDescriptor {
        name: "bothify",
        params: &[
            ParamSpec::positional("text", "str", "## ??"),
            ParamSpec::positional("letters", "str", ASCII_LETTERS),
        ],
        generate: bothify,
    },
];

#[must_use]
pub fn is_base_method(name: &str) -> bool {
    BASE_METHODS.iter().any(|descriptor| descriptor.name == name)
}

fn random_int(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let min = args.int("min")?;
    let max = args.int("max")?;
    let step = args.int("step")?;
    if step <= 0 {
        return Err(TemplateError::invalid_argument(args.method(), "step", "must be > 0"));
    }
    if max < min {
        return Err(TemplateError::invalid_argument(args.method(), "max", "must be >= min"));
    }
    let steps = max.saturating_sub(min).checked_div(step).unwrap_or(0);
    let offset = ctx.int_in(0, steps).saturating_mul(step);
    Ok(Scalar::Int(min.saturating_add(offset)))
}

fn random_digit(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(Scalar::Int(ctx.int_in(0, 9)))
}

fn random_letter(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(Scalar::Str(ctx.lexify("?", ASCII_LETTERS)))
}

fn numerify(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let text = args.text("text").unwrap_or_default();
    Ok(Scalar::Str(ctx.numerify(&text)))
}

fn lexify(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let text = args.text("text").unwrap_or_default();
    let letters = args.text("letters").unwrap_or_default();
    Ok(Scalar::Str(ctx.lexify(&text, &letters)))
}

fn bothify(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let text = args.text("text").unwrap_or_default();
    let letters = args.text("letters").unwrap_or_default();
    let digits = ctx.numerify(&text);
    Ok(Scalar::Str(ctx.lexify(&digits, &letters)))
}
