use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::error::{ConfigError, TemplateError};
use crate::locale::SUPPORTED_LOCALES;

fn registry(locale: &str) -> Result<CapabilityRegistry, String> {
    CapabilityRegistry::build(locale).map_err(|err| err.to_string())
}

fn call(
    registry: &CapabilityRegistry,
    provider: &str,
    method: &str,
    args: &CallArgs,
) -> Result<Scalar, TemplateError> {
    let mut rng = StdRng::seed_from_u64(7);
    registry.call(provider, method, args, &mut rng, &GenerationOptions::default())
}

fn keyword(pairs: &[(&str, Scalar)]) -> CallArgs {
    CallArgs {
        positional: Vec::new(),
        keyword: pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect(),
    }
}

fn positional(values: &[Scalar]) -> CallArgs {
    CallArgs {
        positional: values.to_vec(),
        keyword: Vec::new(),
    }
}

#[test]
fn build_rejects_unsupported_locale() -> Result<(), String> {
    match CapabilityRegistry::build("tlh_KL") {
        Err(ConfigError::UnsupportedLocale { locale }) if locale == "tlh_KL" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected UnsupportedLocale".to_owned()),
    }
}

#[test]
fn base_helpers_are_not_exposed() -> Result<(), String> {
    let registry = registry("en_US")?;
    for service in registry.providers() {
        for base in registry.base_methods() {
            if service.method(base.name).is_some() {
                return Err(format!("{} exposes {}", service.name(), base.name));
            }
        }
    }
    if !registry.base_methods().iter().any(|method| method.name == "random_int") {
        return Err("random_int missing from base helpers".to_owned());
    }
    Ok(())
}

#[test]
fn placeholder_spelling_lists_parameters_in_order() -> Result<(), String> {
    let registry = registry("en_US")?;
    let placeholders = registry.placeholders();
    for expected in [
        "{{PERSON_name}}",
        "{{USER_AGENT_chrome_(version_from, version_to, build_from, build_to)}}",
        "{{MISC_password_(length, special_chars, digits, upper_case, lower_case)}}",
        "{{PHONE_NUMBER_msisdn}}",
    ] {
        if !placeholders.contains(&expected) {
            return Err(format!("Missing placeholder {}", expected));
        }
    }
    Ok(())
}

#[test]
fn signature_renders_defaults() -> Result<(), String> {
    let registry = registry("en_US")?;
    let descriptor = registry
        .provider("INTERNET")
        .and_then(|service| service.method("email"))
        .ok_or("email missing")?;
    let signature = descriptor.signature();
    if signature != "email(safe=True, domain=None)" {
        return Err(format!("Unexpected signature {}", signature));
    }
    Ok(())
}

#[test]
fn every_generator_runs_with_defaults_in_every_locale() -> Result<(), String> {
    for profile in SUPPORTED_LOCALES {
        let registry = registry(profile.code)?;
        for service in registry.providers() {
            for descriptor in service.methods() {
                call(&registry, service.name(), descriptor.name, &CallArgs::default()).map_err(
                    |err| {
                        format!(
                            "{} {}_{} failed: {}",
                            profile.code,
                            service.name(),
                            descriptor.name,
                            err
                        )
                    },
                )?;
            }
        }
    }
    Ok(())
}

#[test]
fn unknown_method_is_reported() -> Result<(), String> {
    let registry = registry("en_US")?;
    match call(&registry, "PERSON", "nickname", &CallArgs::default()) {
        Err(TemplateError::UnknownMethod { provider, method })
            if provider == "PERSON" && method == "nickname" =>
        {
            Ok(())
        }
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn too_many_positional_arguments_fail() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = positional(&[Scalar::Int(1)]);
    match call(&registry, "PERSON", "name", &args) {
        Err(TemplateError::TooManyPositional { expected: 0, given: 1, .. }) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn unexpected_keyword_is_raised_by_the_generator_binding() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = keyword(&[("colour", Scalar::from("red"))]);
    match call(&registry, "MISC", "password", &args) {
        Err(TemplateError::UnexpectedKeyword { name, .. }) if name == "colour" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn duplicate_argument_is_rejected() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = CallArgs {
        positional: vec![Scalar::Int(8)],
        keyword: vec![("length".to_owned(), Scalar::Int(9))],
    };
    match call(&registry, "MISC", "password", &args) {
        Err(TemplateError::DuplicateArgument { name, .. }) if name == "length" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn keyword_only_parameters_reject_positional_values() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = positional(&[Scalar::Int(18)]);
    match call(&registry, "DATE_TIME", "date_of_birth", &args) {
        Err(TemplateError::TooManyPositional { expected: 0, .. }) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn password_honours_explicit_length() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = keyword(&[("length", Scalar::Int(12))]);
    let value = call(&registry, "MISC", "password", &args).map_err(|err| err.to_string())?;
    let text = value.to_string();
    if text.chars().count() != 12 {
        return Err(format!("Expected 12 chars, got {:?}", text));
    }
    if !text.chars().any(|ch| ch.is_ascii_digit()) || !text.chars().any(|ch| ch.is_ascii_uppercase())
    {
        return Err(format!("Missing required classes in {:?}", text));
    }
    Ok(())
}

#[test]
fn password_length_falls_back_to_generation_options() -> Result<(), String> {
    let registry = registry("en_US")?;
    let options = GenerationOptions {
        password_length: 18..=18,
    };
    let mut rng = StdRng::seed_from_u64(3);
    let value = registry
        .call("MISC", "password", &CallArgs::default(), &mut rng, &options)
        .map_err(|err| err.to_string())?;
    if value.to_string().chars().count() != 18 {
        return Err(format!("Unexpected password {:?}", value));
    }
    Ok(())
}

#[test]
fn password_requires_a_character_class() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = keyword(&[
        ("special_chars", Scalar::from("False")),
        ("digits", Scalar::from("False")),
        ("upper_case", Scalar::from("False")),
        ("lower_case", Scalar::from("False")),
    ]);
    match call(&registry, "MISC", "password", &args) {
        Err(TemplateError::InvalidArgument { .. }) => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn chrome_uses_positional_version_bounds() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = positional(&[Scalar::Int(20), Scalar::Int(20)]);
    let value = call(&registry, "USER_AGENT", "chrome", &args).map_err(|err| err.to_string())?;
    if !value.to_string().contains("Chrome/20.0.") {
        return Err(format!("Unexpected agent {}", value));
    }
    Ok(())
}

#[test]
fn credit_card_numbers_pass_luhn() -> Result<(), String> {
    let registry = registry("en_US")?;
    for card in ["visa", "mastercard", "amex", "discover"] {
        let args = keyword(&[("card_type", Scalar::from(card))]);
        let number = call(&registry, "CREDIT_CARD", "credit_card_number", &args)
            .map_err(|err| err.to_string())?
            .to_string();
        if !luhn_valid(&number) {
            return Err(format!("{} number {} fails Luhn", card, number));
        }
        let expected_len = if card == "amex" { 15 } else { 16 };
        if number.len() != expected_len {
            return Err(format!("{} number {} has wrong length", card, number));
        }
    }
    Ok(())
}

#[test]
fn luhn_check_digit_matches_known_number() -> Result<(), String> {
    if luhn_check_digit("7992739871") != '3' {
        return Err("Expected check digit 3".to_owned());
    }
    if !luhn_valid("79927398713") || luhn_valid("79927398710") {
        return Err("Luhn validation mismatch".to_owned());
    }
    Ok(())
}

#[test]
fn invalid_date_pattern_is_a_template_error() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = positional(&[Scalar::from("%Q")]);
    match call(&registry, "DATE_TIME", "date", &args) {
        Err(TemplateError::InvalidArgument { name, .. }) if name == "pattern" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn relative_datetime_parses_offsets() -> Result<(), String> {
    let now = chrono::Utc::now();
    let later = relative_datetime("+10y", now)?;
    let days = later.signed_duration_since(now).num_days();
    if days != 3_650 {
        return Err(format!("Expected 3650 days, got {}", days));
    }
    let earlier = relative_datetime("-1w2d", now)?;
    if now.signed_duration_since(earlier).num_days() != 9 {
        return Err("Expected 9 days back".to_owned());
    }
    if relative_datetime("+10q", now).is_ok() || relative_datetime("+10", now).is_ok() {
        return Err("Expected invalid offsets to fail".to_owned());
    }
    Ok(())
}

#[test]
fn boolean_respects_certain_chance() -> Result<(), String> {
    let registry = registry("en_US")?;
    let args = positional(&[Scalar::Int(100)]);
    let value = call(&registry, "MISC", "boolean", &args).map_err(|err| err.to_string())?;
    if value != Scalar::from("true") {
        return Err(format!("Unexpected value {}", value));
    }
    Ok(())
}

#[test]
fn uuid4_is_version_four() -> Result<(), String> {
    let registry = registry("en_US")?;
    let value = call(&registry, "MISC", "uuid4", &CallArgs::default())
        .map_err(|err| err.to_string())?;
    let parsed = uuid::Uuid::parse_str(&value.to_string()).map_err(|err| err.to_string())?;
    if parsed.get_version_num() != 4 {
        return Err(format!("Unexpected version {}", parsed.get_version_num()));
    }
    Ok(())
}

#[test]
fn user_names_are_ascii() -> Result<(), String> {
    let registry = registry("pt_BR")?;
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let value = registry
            .call(
                "INTERNET",
                "user_name",
                &CallArgs::default(),
                &mut rng,
                &GenerationOptions::default(),
            )
            .map_err(|err| err.to_string())?;
        if !value.to_string().is_ascii() {
            return Err(format!("Non-ascii user name {}", value));
        }
    }
    if ascii_fold("João Müller") != "joaomuller" {
        return Err(format!("Unexpected fold {}", ascii_fold("João Müller")));
    }
    Ok(())
}

#[test]
fn scalar_coercion_prefers_int_then_float() -> Result<(), String> {
    if Scalar::coerce("007") != Scalar::Int(7) {
        return Err("007 should be int".to_owned());
    }
    if Scalar::coerce("3.0") != Scalar::Float(3.0) {
        return Err("3.0 should be float".to_owned());
    }
    if Scalar::coerce("abc") != Scalar::from("abc") {
        return Err("abc should be str".to_owned());
    }
    Ok(())
}

#[test]
fn oversized_counts_are_rejected_not_allocated() -> Result<(), String> {
    let registry = registry("en_US")?;
    let huge = Scalar::Int(4_611_686_018_427_387_904);
    let cases = [
        ("MISC", "password", "length"),
        ("INTERNET", "domain_name", "levels"),
        ("LOREM", "words", "nb"),
        ("LOREM", "paragraph", "nb_sentences"),
    ];
    for (provider, method, param) in cases {
        match call(&registry, provider, method, &keyword(&[(param, huge.clone())])) {
            Err(TemplateError::InvalidArgument { name, .. }) if name == param => {}
            other => {
                return Err(format!(
                    "{}_{}({}) gave {:?}",
                    provider,
                    method,
                    param,
                    other.map(|value| value.to_string().len())
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn password_length_accepts_its_upper_bound() -> Result<(), String> {
    let registry = registry("en_US")?;
    let value = call(
        &registry,
        "MISC",
        "password",
        &keyword(&[("length", Scalar::Int(1024))]),
    )
    .map_err(|err| err.to_string())?;
    if value.to_string().chars().count() != 1024 {
        return Err("Expected a 1024 character password".to_owned());
    }
    if call(&registry, "MISC", "password", &keyword(&[("length", Scalar::Int(1025))])).is_ok() {
        return Err("Expected 1025 to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn services_list_only_their_own_generators() -> Result<(), String> {
    let registry = registry("en_US")?;
    let service = registry.provider("MISC").ok_or("MISC provider missing")?;
    let own: Vec<&str> = misc::PROVIDER
        .methods
        .iter()
        .map(|descriptor| descriptor.name)
        .collect();
    let listed: Vec<&str> = service
        .methods()
        .iter()
        .map(|descriptor| descriptor.name)
        .collect();
    if listed != own || service.placeholders().len() != own.len() {
        return Err(format!("Unexpected MISC methods {:?}", listed));
    }
    Ok(())
}
