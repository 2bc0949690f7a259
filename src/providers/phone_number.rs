use crate::error::TemplateError;

use super::call::BoundArgs;
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "PHONE_NUMBER",
    methods: &[
        GeneratorDescriptor { name: "phone_number", params: &[], generate: phone_number },
        GeneratorDescriptor { name: "msisdn", params: &[], generate: msisdn },
        GeneratorDescriptor {
            name: "country_calling_code",
            params: &[],
            generate: country_calling_code,
        },
    ],
};

fn phone_number(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let format = ctx.pick(ctx.locale.phone_formats);
    Ok(ctx.numerify(format).into())
}

fn msisdn(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let pattern = ctx.locale.msisdn_pattern;
    Ok(ctx.regex(args.method(), pattern)?.into())
}

fn country_calling_code(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(ctx.locale.calling_code.into())
}
