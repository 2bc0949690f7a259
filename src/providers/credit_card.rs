use rand::seq::SliceRandom;

use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::date_time::{format_datetime, random_between, relative_datetime};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "CREDIT_CARD",
    methods: &[
        GeneratorDescriptor {
            name: "credit_card_number",
            params: &[ParamSpec::optional("card_type", "str")],
            generate: credit_card_number,
        },
        GeneratorDescriptor {
            name: "credit_card_provider",
            params: &[ParamSpec::optional("card_type", "str")],
            generate: credit_card_provider,
        },
        GeneratorDescriptor {
            name: "credit_card_expire",
            params: &[
                ParamSpec::positional("start", "str", "now"),
                ParamSpec::positional("end", "str", "+10y"),
                ParamSpec::positional("date_format", "str", "%m/%y"),
            ],
            generate: credit_card_expire,
        },
        GeneratorDescriptor {
            name: "credit_card_security_code",
            params: &[ParamSpec::optional("card_type", "str")],
            generate: credit_card_security_code,
        },
    ],
};

struct CardType {
    key: &'static str,
    label: &'static str,
    prefixes: &'static [&'static str],
    length: usize,
    security_code_length: usize,
}

static CARD_TYPES: &[CardType] = &[
    CardType {
        key: "visa",
        label: "VISA 16 digit",
        prefixes: &["4"],
        length: 16,
        security_code_length: 3,
    },
    CardType {
        key: "mastercard",
        label: "Mastercard",
        prefixes: &["51", "52", "53", "54", "55", "2221", "2720"],
        length: 16,
        security_code_length: 3,
    },
    CardType {
        key: "amex",
        label: "American Express",
        prefixes: &["34", "37"],
        length: 15,
        security_code_length: 4,
    },
    CardType {
        key: "discover",
        label: "Discover",
        prefixes: &["6011", "65"],
        length: 16,
        security_code_length: 3,
    },
];

fn card_type(
    ctx: &mut GenContext<'_>,
    args: &BoundArgs<'_>,
) -> Result<&'static CardType, TemplateError> {
    match args.text("card_type") {
        Some(key) => CARD_TYPES
            .iter()
            .find(|card| card.key.eq_ignore_ascii_case(&key))
            .ok_or_else(|| {
                TemplateError::invalid_argument(
                    args.method(),
                    "card_type",
                    format!("unknown card type '{}'", key),
                )
            }),
        None => CARD_TYPES.choose(&mut *ctx.rng).ok_or_else(|| {
            TemplateError::invalid_argument(args.method(), "card_type", "no card types available")
        }),
    }
}

/// Digit that makes `partial` pass the Luhn check once appended.
#[must_use]
pub fn luhn_check_digit(partial: &str) -> char {
    let sum = partial
        .chars()
        .rev()
        .filter_map(|ch| ch.to_digit(10))
        .enumerate()
        .fold(0_u32, |acc, (index, digit)| {
            let weighted = if index % 2 == 0 {
                let doubled = digit.saturating_mul(2);
                if doubled > 9 { doubled.saturating_sub(9) } else { doubled }
            } else {
                digit
            };
            acc.saturating_add(weighted)
        });
    let check = (10_u32.saturating_sub(sum % 10)) % 10;
    char::from_digit(check, 10).unwrap_or('0')
}

/// True when `number` passes the Luhn check.
#[must_use]
pub fn luhn_valid(number: &str) -> bool {
    let mut chars = number.chars();
    match chars.next_back() {
        Some(last) => luhn_check_digit(chars.as_str()) == last,
        None => false,
    }
}

fn credit_card_number(
    ctx: &mut GenContext<'_>,
    args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    let card = card_type(ctx, args)?;
    let prefix = ctx.pick(card.prefixes);
    let mut number = prefix.to_owned();
    while number.len() < card.length.saturating_sub(1) {
        number.push(ctx.digit());
    }
    number.push(luhn_check_digit(&number));
    Ok(number.into())
}

fn credit_card_provider(
    ctx: &mut GenContext<'_>,
    args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(card_type(ctx, args)?.label.into())
}

fn credit_card_expire(
    ctx: &mut GenContext<'_>,
    args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    let now = chrono::Utc::now();
    let start_text = args.text("start").unwrap_or_default();
    let end_text = args.text("end").unwrap_or_default();
    let pattern = args.text("date_format").unwrap_or_default();
    let start = relative_datetime(&start_text, now)
        .map_err(|reason| TemplateError::invalid_argument(args.method(), "start", reason))?;
    let end = relative_datetime(&end_text, now)
        .map_err(|reason| TemplateError::invalid_argument(args.method(), "end", reason))?;
    let expires = random_between(ctx, start, end);
    Ok(format_datetime(&expires, &pattern, args.method(), "date_format")?.into())
}

fn credit_card_security_code(
    ctx: &mut GenContext<'_>,
    args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    let card = card_type(ctx, args)?;
    let code: String = (0..card.security_code_length).map(|_| ctx.digit()).collect();
    Ok(code.into())
}
