use rand::Rng;

use crate::error::TemplateError;
use crate::locale::LOREM_WORDS;

use super::call::{BoundArgs, ParamSpec};
use super::person::{any_first_name, any_last_name};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "INTERNET",
    methods: &[
        GeneratorDescriptor {
            name: "email",
            params: &[
                ParamSpec::positional("safe", "bool", "True"),
                ParamSpec::optional("domain", "str"),
            ],
            generate: email,
        },
        GeneratorDescriptor { name: "free_email", params: &[], generate: free_email },
        GeneratorDescriptor { name: "safe_email", params: &[], generate: safe_email },
        GeneratorDescriptor { name: "company_email", params: &[], generate: company_email },
        GeneratorDescriptor { name: "user_name", params: &[], generate: user_name },
        GeneratorDescriptor {
            name: "domain_name",
            params: &[ParamSpec::positional("levels", "int", "1")],
            generate: domain_name,
        },
        GeneratorDescriptor {
            name: "free_email_domain",
            params: &[],
            generate: free_email_domain,
        },
        GeneratorDescriptor { name: "url", params: &[], generate: url },
        GeneratorDescriptor { name: "ipv4", params: &[], generate: ipv4 },
        GeneratorDescriptor { name: "ipv6", params: &[], generate: ipv6 },
        GeneratorDescriptor { name: "mac_address", params: &[], generate: mac_address },
    ],
};

const SAFE_TLDS: &[&str] = &["org", "com", "net"];
const MAX_DOMAIN_LEVELS: usize = 16;
const USER_NAME_FORMATS: &[&str] = &[
    "{last}.{first}",
    "{first}.{last}",
    "{first}##",
    "{first}_{last}",
    "{last}##",
    "?{last}",
];
const URL_FORMATS: &[&str] = &["https://www.{}/", "http://www.{}/", "https://{}/", "http://{}/"];

/// Lowercase ASCII rendering of a name: accents folded, other symbols dropped.
#[must_use]
pub fn ascii_fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        let base = match ch {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
            'æ' => "ae",
            'ç' => "c",
            'è' | 'é' | 'ê' | 'ë' => "e",
            'ì' | 'í' | 'î' | 'ï' => "i",
            'ñ' => "n",
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
            'ù' | 'ú' | 'û' | 'ü' => "u",
            'ý' | 'ÿ' => "y",
            'ß' => "ss",
            'œ' => "oe",
            other if other.is_ascii_alphanumeric() => {
                folded.push(other);
                continue;
            }
            _ => continue,
        };
        folded.push_str(base);
    }
    folded
}

pub(crate) fn user_name_text(ctx: &mut GenContext<'_>) -> String {
    let format = ctx.pick(USER_NAME_FORMATS);
    let first = ascii_fold(any_first_name(ctx));
    let last = ascii_fold(any_last_name(ctx));
    let filled = format.replace("{first}", &first).replace("{last}", &last);
    let numbered = ctx.numerify(&filled);
    ctx.lexify(&numbered, "abcdefghijklmnopqrstuvwxyz")
}

fn domain_word(ctx: &mut GenContext<'_>) -> String {
    let word = ascii_fold(any_last_name(ctx));
    if word.is_empty() {
        "example".to_owned()
    } else {
        word
    }
}

fn domain_name_text(ctx: &mut GenContext<'_>, levels: usize) -> String {
    let tld = ctx.pick(ctx.locale.tlds);
    let mut labels = Vec::new();
    for _ in 0..levels.saturating_sub(1) {
        labels.push(ascii_fold(ctx.pick(LOREM_WORDS)));
    }
    labels.push(domain_word(ctx));
    labels.push(tld.to_owned());
    labels.join(".")
}

fn safe_domain(ctx: &mut GenContext<'_>) -> String {
    format!("example.{}", ctx.pick(SAFE_TLDS))
}

fn email(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let user = user_name_text(ctx);
    if let Some(domain) = args.text("domain") {
        return Ok(format!("{}@{}", user, domain).into());
    }
    let domain = if args.flag("safe")? {
        safe_domain(ctx)
    } else {
        ctx.pick(ctx.locale.free_email_domains).to_owned()
    };
    Ok(format!("{}@{}", user, domain).into())
}

fn free_email(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let user = user_name_text(ctx);
    let domain = ctx.pick(ctx.locale.free_email_domains);
    Ok(format!("{}@{}", user, domain).into())
}

fn safe_email(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let user = user_name_text(ctx);
    let domain = safe_domain(ctx);
    Ok(format!("{}@{}", user, domain).into())
}

fn company_email(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    let user = user_name_text(ctx);
    let domain = domain_name_text(ctx, 1);
    Ok(format!("{}@{}", user, domain).into())
}

fn user_name(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(user_name_text(ctx).into())
}

fn domain_name(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let levels = args.count_max("levels", MAX_DOMAIN_LEVELS)?;
    if levels < 1 {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "levels",
            "must be >= 1",
        ));
    }
    Ok(domain_name_text(ctx, levels).into())
}

fn free_email_domain(
    ctx: &mut GenContext<'_>,
    _args: &BoundArgs<'_>,
) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(ctx.locale.free_email_domains).into())
}

fn url(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let format = ctx.pick(URL_FORMATS);
    let domain = domain_name_text(ctx, 1);
    Ok(format.replacen("{}", &domain, 1).into())
}

fn ipv4(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let first: u8 = ctx.rng.gen_range(1..=223);
    let [second, third, fourth]: [u8; 3] = ctx.rng.r#gen();
    Ok(format!("{}.{}.{}.{}", first, second, third, fourth).into())
}

fn ipv6(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:x}", ctx.rng.r#gen::<u16>()))
        .collect();
    Ok(groups.join(":").into())
}

fn mac_address(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let mut bytes = [0_u8; 6];
    ctx.rng.fill(&mut bytes);
    let octets: Vec<String> = bytes.iter().map(|byte| format!("{:02x}", byte)).collect();
    Ok(octets.join(":").into())
}
