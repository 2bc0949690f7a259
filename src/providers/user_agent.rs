use crate::error::TemplateError;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "USER_AGENT",
    methods: &[
        GeneratorDescriptor { name: "user_agent", params: &[], generate: user_agent },
        GeneratorDescriptor {
            name: "chrome",
            params: &[
                ParamSpec::positional("version_from", "int", "13"),
                ParamSpec::positional("version_to", "int", "63"),
                ParamSpec::positional("build_from", "int", "800"),
                ParamSpec::positional("build_to", "int", "899"),
            ],
            generate: chrome,
        },
        GeneratorDescriptor { name: "firefox", params: &[], generate: firefox },
        GeneratorDescriptor { name: "safari", params: &[], generate: safari },
        GeneratorDescriptor { name: "opera", params: &[], generate: opera },
        GeneratorDescriptor {
            name: "linux_platform_token",
            params: &[],
            generate: linux_platform_token,
        },
        GeneratorDescriptor {
            name: "windows_platform_token",
            params: &[],
            generate: windows_platform_token,
        },
        GeneratorDescriptor {
            name: "mac_platform_token",
            params: &[],
            generate: mac_platform_token,
        },
    ],
};

const LINUX_ARCHITECTURES: &[&str] = &["i686", "x86_64"];
const WINDOWS_TOKENS: &[&str] = &[
    "Windows NT 6.1",
    "Windows NT 6.2",
    "Windows NT 6.3",
    "Windows NT 10.0; Win64; x64",
    "Windows NT 10.0; WOW64",
];
const MAC_PROCESSORS: &[&str] = &["Intel", "PPC", "U; Intel", "U; PPC"];

fn linux_token(ctx: &mut GenContext<'_>) -> String {
    format!("X11; Linux {}", ctx.pick(LINUX_ARCHITECTURES))
}

fn windows_token(ctx: &mut GenContext<'_>) -> String {
    ctx.pick(WINDOWS_TOKENS).to_owned()
}

fn mac_token(ctx: &mut GenContext<'_>) -> String {
    let processor = ctx.pick(MAC_PROCESSORS);
    let minor = ctx.int_in(5, 15);
    let patch = ctx.int_in(0, 9);
    format!("Macintosh; {} Mac OS X 10_{}_{}", processor, minor, patch)
}

fn any_platform(ctx: &mut GenContext<'_>) -> String {
    match ctx.int_in(0, 2) {
        0 => linux_token(ctx),
        1 => windows_token(ctx),
        _ => mac_token(ctx),
    }
}

fn webkit_version(ctx: &mut GenContext<'_>) -> String {
    format!("{}.{}", ctx.int_in(531, 537), ctx.int_in(0, 36))
}

fn chrome_text(
    ctx: &mut GenContext<'_>,
    version: (i64, i64),
    build: (i64, i64),
) -> String {
    let platform = any_platform(ctx);
    let webkit = webkit_version(ctx);
    let major = ctx.int_in(version.0, version.1);
    let build_number = ctx.int_in(build.0, build.1);
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/{} (KHTML, like Gecko) Chrome/{}.0.{}.0 Safari/{}",
        platform, webkit, major, build_number, webkit
    )
}

fn firefox_text(ctx: &mut GenContext<'_>) -> String {
    let platform = any_platform(ctx);
    let version = ctx.int_in(4, 115);
    format!(
        "Mozilla/5.0 ({}; rv:{}.0) Gecko/20100101 Firefox/{}.0",
        platform, version, version
    )
}

fn safari_text(ctx: &mut GenContext<'_>) -> String {
    let platform = mac_token(ctx);
    let webkit = webkit_version(ctx);
    let major = ctx.int_in(4, 17);
    let minor = ctx.int_in(0, 5);
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/{} (KHTML, like Gecko) Version/{}.{} Safari/{}",
        platform, webkit, major, minor, webkit
    )
}

fn opera_text(ctx: &mut GenContext<'_>) -> String {
    let platform = any_platform(ctx);
    let locale = ctx.locale.code.replace('_', "-");
    format!(
        "Opera/9.{}.({}; {}) Presto/2.{}.{} Version/{}.00",
        ctx.int_in(10, 99),
        platform,
        locale,
        ctx.int_in(5, 12),
        ctx.int_in(160, 355),
        ctx.int_in(10, 12)
    )
}

fn user_agent(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let agent = match ctx.int_in(0, 3) {
        0 => chrome_text(ctx, (13, 63), (800, 899)),
        1 => firefox_text(ctx),
        2 => safari_text(ctx),
        _ => opera_text(ctx),
    };
    Ok(agent.into())
}

fn chrome(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let version = (args.int("version_from")?, args.int("version_to")?);
    let build = (args.int("build_from")?, args.int("build_to")?);
    if version.1 < version.0 {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "version_to",
            "must be >= version_from",
        ));
    }
    if build.1 < build.0 {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "build_to",
            "must be >= build_from",
        ));
    }
    Ok(chrome_text(ctx, version, build).into())
}

fn firefox(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(firefox_text(ctx).into())
}

fn safari(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(safari_text(ctx).into())
}

fn opera(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(opera_text(ctx).into())
}

fn linux_platform_token(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(linux_token(ctx).into())
}

fn windows_platform_token(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(windows_token(ctx).into())
}

fn mac_platform_token(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(mac_token(ctx).into())
}
