use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "ADDRESS",
    methods: &[
        GeneratorDescriptor { name: "address", params: &[], generate: address },
        GeneratorDescriptor { name: "street_address", params: &[], generate: street_address },
        GeneratorDescriptor { name: "street_name", params: &[], generate: street_name },
        GeneratorDescriptor { name: "building_number", params: &[], generate: building_number },
        GeneratorDescriptor { name: "city", params: &[], generate: city },
        GeneratorDescriptor { name: "state", params: &[], generate: state },
        GeneratorDescriptor { name: "postcode", params: &[], generate: postcode },
        GeneratorDescriptor { name: "country", params: &[], generate: country },
        GeneratorDescriptor {
            name: "country_code",
            params: &[ParamSpec::positional("representation", "str", "alpha-2")],
            generate: country_code,
        },
    ],
};

const BUILDING_NUMBER_FORMATS: &[&str] = &["%", "%#", "%##", "%###"];

fn street_name_text(ctx: &mut GenContext<'_>) -> String {
    let language = ctx.locale.language;
    let pattern = ctx.pick(language.street_patterns);
    let root = ctx.pick(language.street_roots);
    pattern.replacen("{}", root, 1)
}

fn building_number_text(ctx: &mut GenContext<'_>) -> String {
    let format = ctx.pick(BUILDING_NUMBER_FORMATS);
    ctx.numerify(format)
}

fn street_address_text(ctx: &mut GenContext<'_>) -> String {
    let number = building_number_text(ctx);
    let street = street_name_text(ctx);
    ctx.locale
        .street_address_format
        .replace("{building_number}", &number)
        .replace("{street_name}", &street)
}

fn postcode_text(ctx: &mut GenContext<'_>, method: &str) -> Result<String, TemplateError> {
    let pattern = ctx.locale.postcode_pattern;
    ctx.regex(method, pattern)
}

fn address(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let street = street_address_text(ctx);
    let city = ctx.pick(ctx.locale.cities);
    let state = ctx.pick(ctx.locale.states);
    let postcode = postcode_text(ctx, args.method())?;
    Ok(ctx
        .locale
        .address_format
        .replace("{street_address}", &street)
        .replace("{city}", city)
        .replace("{state}", state)
        .replace("{postcode}", &postcode)
        .into())
}

fn street_address(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(street_address_text(ctx).into())
}

fn street_name(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(street_name_text(ctx).into())
}

fn building_number(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(building_number_text(ctx).into())
}

fn city(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.cities).into())
}

fn state(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.states).into())
}

fn postcode(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(postcode_text(ctx, args.method())?.into())
}

fn country(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(ctx.locale.country.into())
}

fn country_code(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let representation = args.text("representation").unwrap_or_default();
    match representation.as_str() {
        "alpha-2" => Ok(ctx.locale.region().into()),
        "alpha-3" => Ok(ctx.locale.country_alpha3.into()),
        other => Err(TemplateError::invalid_argument(
            args.method(),
            "representation",
            format!("'{}' is not one of alpha-2, alpha-3", other),
        )),
    }
}
