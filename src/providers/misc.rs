use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "MISC",
    methods: &[
        GeneratorDescriptor {
            name: "password",
            params: &[
                ParamSpec::positional("length", "int", "10"),
                ParamSpec::positional("special_chars", "bool", "True"),
                ParamSpec::positional("digits", "bool", "True"),
                ParamSpec::positional("upper_case", "bool", "True"),
                ParamSpec::positional("lower_case", "bool", "True"),
            ],
            generate: password,
        },
        GeneratorDescriptor {
            name: "boolean",
            params: &[ParamSpec::positional("chance_of_getting_true", "int", "50")],
            generate: boolean,
        },
        GeneratorDescriptor { name: "uuid4", params: &[], generate: uuid4 },
    ],
};

const SPECIAL_CHARS: &str = "!@#$%^&*()_+";
const DIGITS: &str = "0123456789";
const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
const MAX_PASSWORD_LENGTH: usize = 1024;

/// Password length when the placeholder sets none: the template's complexity
/// range.
fn password_length(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<usize, TemplateError> {
    if args.explicit("length") {
        return args.count_max("length", MAX_PASSWORD_LENGTH);
    }
    let range = ctx.options.password_length.clone();
    if range.is_empty() {
        return Ok(*range.start());
    }
    Ok(ctx.rng.gen_range(range))
}

fn password(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let length = password_length(ctx, args)?;
    let classes: Vec<&str> = [
        ("special_chars", SPECIAL_CHARS),
        ("digits", DIGITS),
        ("upper_case", UPPER_CASE),
        ("lower_case", LOWER_CASE),
    ]
    .into_iter()
    .map(|(name, chars)| args.flag(name).map(|enabled| enabled.then_some(chars)))
    .collect::<Result<Vec<_>, _>>()?
    .into_iter()
    .flatten()
    .collect();

    if classes.is_empty() {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "lower_case",
            "at least one character class must be enabled",
        ));
    }
    if length < classes.len() {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "length",
            format!("must be >= {} for the enabled character classes", classes.len()),
        ));
    }

    let pool: Vec<char> = classes.concat().chars().collect();
    let mut chars: Vec<char> = Vec::new();
    for class in &classes {
        let class_chars: Vec<char> = class.chars().collect();
        if let Some(ch) = class_chars.choose(&mut *ctx.rng) {
            chars.push(*ch);
        }
    }
    while chars.len() < length {
        match pool.choose(&mut *ctx.rng) {
            Some(ch) => chars.push(*ch),
            None => break,
        }
    }
    chars.shuffle(&mut *ctx.rng);
    Ok(chars.into_iter().collect::<String>().into())
}

fn boolean(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let chance = args.int("chance_of_getting_true")?;
    let percent = u32::try_from(chance.clamp(0, 100)).unwrap_or(50);
    let value = if ctx.chance(percent) { "true" } else { "false" };
    Ok(value.into())
}

fn uuid4(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let bytes: [u8; 16] = ctx.rng.r#gen();
    let id = uuid::Builder::from_random_bytes(bytes).into_uuid();
    Ok(id.to_string().into())
}
