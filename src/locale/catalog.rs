use crate::error::ConfigError;

use super::language::{ENGLISH, FRENCH, GERMAN, ITALIAN, LanguageData, PORTUGUESE, SPANISH};

/// Country-level data for one supported locale.
pub struct LocaleProfile {
    pub code: &'static str,
    pub language: &'static LanguageData,
    pub country: &'static str,
    pub country_alpha3: &'static str,
    pub calling_code: &'static str,
    /// Numerify patterns (`#` digit, `%` non-zero digit).
    pub phone_formats: &'static [&'static str],
    /// Regular expression sampled for MSISDN values.
    pub msisdn_pattern: &'static str,
    /// Regular expression sampled for postcodes.
    pub postcode_pattern: &'static str,
    pub states: &'static [&'static str],
    pub cities: &'static [&'static str],
    /// Slots: `{building_number}`, `{street_name}`.
    pub street_address_format: &'static str,
    /// Slots: `{street_address}`, `{city}`, `{state}`, `{postcode}`.
    pub address_format: &'static str,
    pub free_email_domains: &'static [&'static str],
    pub tlds: &'static [&'static str],
}

impl LocaleProfile {
    /// Two-letter region suffix of the locale code.
    #[must_use]
    pub fn region(&self) -> &'static str {
        self.code.rsplit('_').next().unwrap_or(self.code)
    }
}

static EN_US: LocaleProfile = LocaleProfile {
    code: "en_US",
    language: &ENGLISH,
    country: "United States",
    country_alpha3: "USA",
    calling_code: "+1",
    phone_formats: &["(%##) ###-####", "%##-###-####", "%##.###.####", "+1-%##-###-####"],
    msisdn_pattern: "1[2-9][0-9]{9}",
    postcode_pattern: "[0-9]{5}",
    states: &[
        "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois", "Ohio",
        "Georgia", "Washington", "Arizona", "Colorado", "Oregon",
    ],
    cities: &[
        "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton",
        "Fairview", "Salem", "Madison", "Georgetown", "Arlington", "Ashland",
    ],
    street_address_format: "{building_number} {street_name}",
    address_format: "{street_address}\n{city}, {state} {postcode}",
    free_email_domains: &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"],
    tlds: &["com", "net", "org", "info", "biz"],
};

static EN_GB: LocaleProfile = LocaleProfile {
    code: "en_GB",
    language: &ENGLISH,
    country: "United Kingdom",
    country_alpha3: "GBR",
    calling_code: "+44",
    phone_formats: &["0%### ######", "0%## #### ####", "+44 %### ######"],
    msisdn_pattern: "447[1-9][0-9]{8}",
    postcode_pattern: "[A-Z]{1,2}[0-9][0-9A-Z]? [0-9][A-Z]{2}",
    states: &[
        "England", "Scotland", "Wales", "Northern Ireland", "Kent", "Essex", "Surrey",
        "Yorkshire",
    ],
    cities: &[
        "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Liverpool", "Bristol",
        "Sheffield", "Edinburgh", "Cardiff",
    ],
    street_address_format: "{building_number} {street_name}",
    address_format: "{street_address}\n{city}\n{postcode}",
    free_email_domains: &["gmail.com", "yahoo.co.uk", "hotmail.co.uk", "outlook.com"],
    tlds: &["com", "co.uk", "org", "net", "biz"],
};

static EN_CA: LocaleProfile = LocaleProfile {
    code: "en_CA",
    language: &ENGLISH,
    country: "Canada",
    country_alpha3: "CAN",
    calling_code: "+1",
    phone_formats: &["%##-###-####", "(%##) ###-####", "+1 %## ### ####"],
    msisdn_pattern: "1[2-9][0-9]{9}",
    postcode_pattern: "[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] [0-9][ABCEGHJ-NPRSTV-Z][0-9]",
    states: &[
        "Ontario", "Quebec", "British Columbia", "Alberta", "Manitoba", "Saskatchewan",
        "Nova Scotia", "New Brunswick",
    ],
    cities: &[
        "Toronto", "Vancouver", "Calgary", "Ottawa", "Edmonton", "Winnipeg", "Halifax",
        "Victoria",
    ],
    street_address_format: "{building_number} {street_name}",
    address_format: "{street_address}\n{city}, {state} {postcode}",
    free_email_domains: &["gmail.com", "yahoo.ca", "hotmail.com", "outlook.com"],
    tlds: &["ca", "com", "net", "org"],
};

static EN_AU: LocaleProfile = LocaleProfile {
    code: "en_AU",
    language: &ENGLISH,
    country: "Australia",
    country_alpha3: "AUS",
    calling_code: "+61",
    phone_formats: &["0# #### ####", "+61 # #### ####", "04## ### ###"],
    msisdn_pattern: "614[0-9]{8}",
    postcode_pattern: "[0-9]{4}",
    states: &[
        "New South Wales", "Victoria", "Queensland", "Western Australia", "South Australia",
        "Tasmania",
    ],
    cities: &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Hobart", "Darwin"],
    street_address_format: "{building_number} {street_name}",
    address_format: "{street_address}\n{city} {state} {postcode}",
    free_email_domains: &["gmail.com", "yahoo.com.au", "hotmail.com", "bigpond.com"],
    tlds: &["com.au", "com", "net.au", "org.au"],
};

static PT_BR: LocaleProfile = LocaleProfile {
    code: "pt_BR",
    language: &PORTUGUESE,
    country: "Brasil",
    country_alpha3: "BRA",
    calling_code: "+55",
    phone_formats: &["(%#) 9####-####", "+55 %# 9#### ####", "%# 9####-####", "(%#) ####-####"],
    msisdn_pattern: "55[1-9]{2}9[0-9]{8}",
    postcode_pattern: "[0-9]{5}-[0-9]{3}",
    states: &[
        "São Paulo", "Rio de Janeiro", "Minas Gerais", "Bahia", "Paraná",
        "Rio Grande do Sul", "Pernambuco", "Ceará", "Santa Catarina", "Goiás",
    ],
    cities: &[
        "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Salvador", "Curitiba",
        "Porto Alegre", "Recife", "Fortaleza", "Campinas", "Manaus",
    ],
    street_address_format: "{street_name}, {building_number}",
    address_format: "{street_address}\n{postcode} {city} / {state}",
    free_email_domains: &["gmail.com", "hotmail.com", "yahoo.com.br", "bol.com.br", "uol.com.br"],
    tlds: &["com.br", "com", "net", "org", "br"],
};

static PT_PT: LocaleProfile = LocaleProfile {
    code: "pt_PT",
    language: &PORTUGUESE,
    country: "Portugal",
    country_alpha3: "PRT",
    calling_code: "+351",
    phone_formats: &["+351 9## ### ###", "2## ### ###", "9########"],
    msisdn_pattern: "3519[1236][0-9]{7}",
    postcode_pattern: "[1-9][0-9]{3}-[0-9]{3}",
    states: &["Lisboa", "Porto", "Braga", "Setúbal", "Aveiro", "Faro", "Coimbra"],
    cities: &["Lisboa", "Porto", "Braga", "Coimbra", "Funchal", "Aveiro", "Faro", "Évora"],
    street_address_format: "{street_name}, {building_number}",
    address_format: "{street_address}\n{postcode} {city}",
    free_email_domains: &["gmail.com", "hotmail.com", "sapo.pt", "outlook.pt"],
    tlds: &["pt", "com", "net", "org"],
};

static FR_FR: LocaleProfile = LocaleProfile {
    code: "fr_FR",
    language: &FRENCH,
    country: "France",
    country_alpha3: "FRA",
    calling_code: "+33",
    phone_formats: &["0%########", "0% ## ## ## ##", "+33 % ## ## ## ##"],
    msisdn_pattern: "33[67][0-9]{8}",
    postcode_pattern: "[0-9]{5}",
    states: &[
        "Île-de-France", "Bretagne", "Normandie", "Occitanie", "Grand Est",
        "Nouvelle-Aquitaine", "Hauts-de-France",
    ],
    cities: &[
        "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
        "Montpellier", "Bordeaux", "Lille",
    ],
    street_address_format: "{building_number}, {street_name}",
    address_format: "{street_address}\n{postcode} {city}",
    free_email_domains: &["gmail.com", "orange.fr", "free.fr", "laposte.net", "hotmail.fr"],
    tlds: &["fr", "com", "net", "org"],
};

static FR_CA: LocaleProfile = LocaleProfile {
    code: "fr_CA",
    language: &FRENCH,
    country: "Canada",
    country_alpha3: "CAN",
    calling_code: "+1",
    phone_formats: &["%##-###-####", "(%##) ###-####", "+1 %## ### ####"],
    msisdn_pattern: "1[2-9][0-9]{9}",
    postcode_pattern: "[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] [0-9][ABCEGHJ-NPRSTV-Z][0-9]",
    states: &["Québec", "Ontario", "Nouveau-Brunswick", "Manitoba"],
    cities: &["Montréal", "Québec", "Laval", "Gatineau", "Sherbrooke", "Trois-Rivières"],
    street_address_format: "{building_number}, {street_name}",
    address_format: "{street_address}\n{city} ({state}) {postcode}",
    free_email_domains: &["gmail.com", "videotron.ca", "hotmail.com", "yahoo.ca"],
    tlds: &["ca", "com", "net", "org"],
};

static DE_DE: LocaleProfile = LocaleProfile {
    code: "de_DE",
    language: &GERMAN,
    country: "Deutschland",
    country_alpha3: "DEU",
    calling_code: "+49",
    phone_formats: &["0%## #######", "+49 %## #######", "0%##-#######", "0151 ########"],
    msisdn_pattern: "491[567][0-9]{9}",
    postcode_pattern: "[0-9]{5}",
    states: &[
        "Bayern", "Berlin", "Hamburg", "Hessen", "Sachsen", "Niedersachsen",
        "Nordrhein-Westfalen", "Baden-Württemberg",
    ],
    cities: &[
        "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart",
        "Düsseldorf", "Leipzig", "Dresden", "Bremen",
    ],
    street_address_format: "{street_name} {building_number}",
    address_format: "{street_address}\n{postcode} {city}",
    free_email_domains: &["web.de", "gmx.de", "gmail.com", "t-online.de", "yahoo.de"],
    tlds: &["de", "com", "net", "org"],
};

static DE_AT: LocaleProfile = LocaleProfile {
    code: "de_AT",
    language: &GERMAN,
    country: "Österreich",
    country_alpha3: "AUT",
    calling_code: "+43",
    phone_formats: &["0%## ######", "+43 %## ######", "0664 #######"],
    msisdn_pattern: "436[5-9][0-9]{8}",
    postcode_pattern: "[1-9][0-9]{3}",
    states: &["Wien", "Tirol", "Steiermark", "Salzburg", "Kärnten", "Vorarlberg"],
    cities: &["Wien", "Graz", "Linz", "Salzburg", "Innsbruck", "Klagenfurt", "Villach"],
    street_address_format: "{street_name} {building_number}",
    address_format: "{street_address}\n{postcode} {city}",
    free_email_domains: &["gmx.at", "aon.at", "gmail.com", "chello.at"],
    tlds: &["at", "com", "net", "org"],
};

static DE_CH: LocaleProfile = LocaleProfile {
    code: "de_CH",
    language: &GERMAN,
    country: "Schweiz",
    country_alpha3: "CHE",
    calling_code: "+41",
    phone_formats: &["0%# ### ## ##", "+41 %# ### ## ##", "07# ### ## ##"],
    msisdn_pattern: "417[5-9][0-9]{7}",
    postcode_pattern: "[1-9][0-9]{3}",
    states: &["Zürich", "Bern", "Luzern", "Aargau", "St. Gallen", "Basel-Stadt"],
    cities: &["Zürich", "Bern", "Basel", "Luzern", "St. Gallen", "Winterthur", "Lugano"],
    street_address_format: "{street_name} {building_number}",
    address_format: "{street_address}\n{postcode} {city}",
    free_email_domains: &["bluewin.ch", "gmail.com", "gmx.ch", "hispeed.ch"],
    tlds: &["ch", "com", "net", "org"],
};

static ES_ES: LocaleProfile = LocaleProfile {
    code: "es_ES",
    language: &SPANISH,
    country: "España",
    country_alpha3: "ESP",
    calling_code: "+34",
    phone_formats: &["+34 6## ### ###", "6########", "9## ## ## ##", "+34 9## ### ###"],
    msisdn_pattern: "34[67][0-9]{8}",
    postcode_pattern: "(0[1-9]|[1-4][0-9]|5[0-2])[0-9]{3}",
    states: &[
        "Madrid", "Cataluña", "Andalucía", "Comunidad Valenciana", "Galicia",
        "País Vasco", "Castilla y León", "Aragón",
    ],
    cities: &[
        "Madrid", "Barcelona", "Valencia", "Sevilla", "Zaragoza", "Málaga", "Bilbao",
        "Alicante", "Córdoba", "Granada",
    ],
    street_address_format: "{street_name}, {building_number}",
    address_format: "{street_address}\n{postcode} {city}, {state}",
    free_email_domains: &["gmail.com", "hotmail.es", "yahoo.es", "telefonica.net"],
    tlds: &["es", "com", "net", "org"],
};

static ES_MX: LocaleProfile = LocaleProfile {
    code: "es_MX",
    language: &SPANISH,
    country: "México",
    country_alpha3: "MEX",
    calling_code: "+52",
    phone_formats: &["+52 %# #### ####", "(%##) ###-####", "%## ### ####"],
    msisdn_pattern: "521[1-9][0-9]{9}",
    postcode_pattern: "[0-9]{5}",
    states: &[
        "Jalisco", "Nuevo León", "Ciudad de México", "Puebla", "Veracruz", "Yucatán",
        "Guanajuato", "Chihuahua",
    ],
    cities: &[
        "Ciudad de México", "Guadalajara", "Monterrey", "Puebla", "Tijuana", "León",
        "Mérida", "Cancún",
    ],
    street_address_format: "{street_name} {building_number}",
    address_format: "{street_address}\n{postcode} {city}, {state}",
    free_email_domains: &["gmail.com", "hotmail.com", "yahoo.com.mx", "prodigy.net.mx"],
    tlds: &["com.mx", "mx", "com", "net"],
};

static IT_IT: LocaleProfile = LocaleProfile {
    code: "it_IT",
    language: &ITALIAN,
    country: "Italia",
    country_alpha3: "ITA",
    calling_code: "+39",
    phone_formats: &["+39 3## ### ####", "3## #######", "0%# ########", "+39 0%# #######"],
    msisdn_pattern: "393[0-9]{9}",
    postcode_pattern: "[0-9]{5}",
    states: &[
        "Lombardia", "Lazio", "Campania", "Sicilia", "Veneto", "Piemonte", "Toscana",
        "Emilia-Romagna",
    ],
    cities: &[
        "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze",
        "Bari", "Venezia",
    ],
    street_address_format: "{street_name} {building_number}",
    address_format: "{street_address}\n{postcode} {city} ({state})",
    free_email_domains: &["gmail.com", "libero.it", "virgilio.it", "alice.it", "tiscali.it"],
    tlds: &["it", "com", "net", "org"],
};

/// Every supported locale, in catalog order.
pub static SUPPORTED_LOCALES: &[&LocaleProfile] = &[
    &EN_US, &EN_GB, &EN_CA, &EN_AU, &PT_BR, &PT_PT, &FR_FR, &FR_CA, &DE_DE, &DE_AT, &DE_CH,
    &ES_ES, &ES_MX, &IT_IT,
];

/// Default locale used before any template selects a region.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Looks up a supported locale by its exact code.
///
/// # Errors
///
/// Returns `UnsupportedLocale` when the code is not in the catalog.
pub fn find_locale(code: &str) -> Result<&'static LocaleProfile, ConfigError> {
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|profile| profile.code == code)
        .ok_or_else(|| ConfigError::UnsupportedLocale {
            locale: code.to_owned(),
        })
}

/// Maps a two-letter region code to a locale ending with that code. When
/// several locales share the suffix, the last one in catalog order wins.
///
/// # Errors
///
/// Returns `UnknownRegion` when no locale ends with the region code.
pub fn locale_from_region(region: &str) -> Result<&'static LocaleProfile, ConfigError> {
    let region = region.trim().to_ascii_uppercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .filter(|profile| profile.region() == region)
        .last()
        .ok_or(ConfigError::UnknownRegion { region })
}

/// Distinct region suffixes of the supported locales, sorted.
#[must_use]
pub fn data_regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = SUPPORTED_LOCALES
        .iter()
        .map(|profile| profile.region())
        .collect();
    regions.sort_unstable();
    regions.dedup();
    regions
}
