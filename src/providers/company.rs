use crate::error::TemplateError;

use super::call::BoundArgs;
use super::person::any_last_name;
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "COMPANY",
    methods: &[
        GeneratorDescriptor { name: "company", params: &[], generate: company },
        GeneratorDescriptor { name: "company_suffix", params: &[], generate: company_suffix },
    ],
};

fn company(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let first = any_last_name(ctx);
    let name = match ctx.int_in(0, 2) {
        0 => {
            let suffix = ctx.pick(ctx.locale.language.company_suffixes);
            format!("{} {}", first, suffix)
        }
        1 => format!("{}-{}", first, any_last_name(ctx)),
        _ => {
            let second = any_last_name(ctx);
            let third = any_last_name(ctx);
            format!("{}, {} & {}", first, second, third)
        }
    };
    Ok(name.into())
}

fn company_suffix(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.language.company_suffixes).into())
}
