use super::*;
use crate::error::ConfigError;

#[test]
fn find_locale_rejects_unknown_codes() -> Result<(), String> {
    match find_locale("xx_XX") {
        Err(ConfigError::UnsupportedLocale { locale }) if locale == "xx_XX" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(profile) => Err(format!("Unexpected locale {}", profile.code)),
    }
}

#[test]
fn region_lookup_is_case_insensitive() -> Result<(), String> {
    let profile = locale_from_region(" br ").map_err(|err| err.to_string())?;
    if profile.code != "pt_BR" {
        return Err(format!("Expected pt_BR, got {}", profile.code));
    }
    Ok(())
}

#[test]
fn shared_region_suffix_resolves_to_a_matching_locale() -> Result<(), String> {
    let profile = locale_from_region("CA").map_err(|err| err.to_string())?;
    if profile.region() != "CA" {
        return Err(format!("Unexpected locale {}", profile.code));
    }
    Ok(())
}

#[test]
fn unknown_region_is_a_configuration_error() -> Result<(), String> {
    match locale_from_region("ZZ") {
        Err(ConfigError::UnknownRegion { region }) if region == "ZZ" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(profile) => Err(format!("Unexpected locale {}", profile.code)),
    }
}

#[test]
fn data_regions_are_unique_and_sorted() -> Result<(), String> {
    let regions = data_regions();
    let mut expected = regions.clone();
    expected.sort_unstable();
    expected.dedup();
    if regions != expected {
        return Err(format!("Regions not unique/sorted: {:?}", regions));
    }
    if !regions.contains(&"US") || !regions.contains(&"BR") {
        return Err(format!("Missing expected regions: {:?}", regions));
    }
    Ok(())
}

#[test]
fn every_locale_has_data_for_each_generator() -> Result<(), String> {
    for profile in SUPPORTED_LOCALES {
        if profile.phone_formats.is_empty()
            || profile.states.is_empty()
            || profile.cities.is_empty()
            || profile.free_email_domains.is_empty()
            || profile.tlds.is_empty()
            || profile.language.last_names.is_empty()
        {
            return Err(format!("Locale {} has empty data tables", profile.code));
        }
        if rand_regex::Regex::compile(profile.postcode_pattern, 8).is_err() {
            return Err(format!("Locale {} has invalid postcode pattern", profile.code));
        }
        if rand_regex::Regex::compile(profile.msisdn_pattern, 8).is_err() {
            return Err(format!("Locale {} has invalid msisdn pattern", profile.code));
        }
    }
    Ok(())
}
