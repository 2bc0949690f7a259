use crate::error::TemplateError;

use super::call::BoundArgs;
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "PERSON",
    methods: &[
        GeneratorDescriptor { name: "name", params: &[], generate: name },
        GeneratorDescriptor { name: "first_name", params: &[], generate: first_name },
        GeneratorDescriptor { name: "last_name", params: &[], generate: last_name },
        GeneratorDescriptor { name: "name_male", params: &[], generate: name_male },
        GeneratorDescriptor { name: "name_female", params: &[], generate: name_female },
        GeneratorDescriptor { name: "first_name_male", params: &[], generate: first_name_male },
        GeneratorDescriptor {
            name: "first_name_female",
            params: &[],
            generate: first_name_female,
        },
        GeneratorDescriptor { name: "prefix", params: &[], generate: prefix },
    ],
};

pub(crate) fn any_first_name(ctx: &mut GenContext<'_>) -> &'static str {
    let language = ctx.locale.language;
    if ctx.chance(50) {
        ctx.pick(language.first_names_male)
    } else {
        ctx.pick(language.first_names_female)
    }
}

pub(crate) fn any_last_name(ctx: &mut GenContext<'_>) -> &'static str {
    ctx.pick(ctx.locale.language.last_names)
}

fn name(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    if ctx.chance(50) {
        name_male(ctx, args)
    } else {
        name_female(ctx, args)
    }
}

fn first_name(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(any_first_name(ctx).into())
}

fn last_name(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(any_last_name(ctx).into())
}

fn name_male(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let first = ctx.pick(ctx.locale.language.first_names_male);
    let last = any_last_name(ctx);
    Ok(format!("{} {}", first, last).into())
}

fn name_female(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let first = ctx.pick(ctx.locale.language.first_names_female);
    let last = any_last_name(ctx);
    Ok(format!("{} {}", first, last).into())
}

fn first_name_male(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.language.first_names_male).into())
}

fn first_name_female(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.language.first_names_female).into())
}

fn prefix(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let language = ctx.locale.language;
    let table = if ctx.chance(50) {
        language.prefixes_male
    } else {
        language.prefixes_female
    };
    Ok(ctx.pick(table).into())
}
