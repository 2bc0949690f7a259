use tracing::info;

use crate::args::{LureArgs, PlaceholdersArgs, RenderArgs, TemplatesCommand};
use crate::config::Settings;
use crate::error::{AppResult, ConfigError, TemplateError};
use crate::locale::{DEFAULT_LOCALE, SUPPORTED_LOCALES, data_regions, locale_from_region};
use crate::providers::CapabilityRegistry;
use crate::template::{TemplateStore, resolve_template};

use super::runner::select_template;

/// Placeholder spellings, one per line, optionally for one provider.
///
/// # Errors
///
/// Returns an error for an unknown region or provider.
pub(crate) fn placeholder_lines(args: &PlaceholdersArgs) -> AppResult<Vec<String>> {
    let locale = match args.region.as_deref() {
        Some(region) => locale_from_region(region)?.code,
        None => DEFAULT_LOCALE,
    };
    let registry = CapabilityRegistry::build(locale)?;
    match args.provider.as_deref() {
        Some(name) => {
            let wanted = name.trim().to_ascii_uppercase();
            let provider = registry
                .provider(&wanted)
                .ok_or(TemplateError::UnknownPlaceholder { token: wanted })?;
            Ok(provider.placeholders().to_vec())
        }
        None => Ok(registry
            .placeholders()
            .into_iter()
            .map(str::to_owned)
            .collect()),
    }
}

/// `REGION  locale` for every data region, plus every locale sharing it.
#[must_use]
pub(crate) fn region_lines() -> Vec<String> {
    data_regions()
        .into_iter()
        .map(|region| {
            let locales: Vec<&str> = SUPPORTED_LOCALES
                .iter()
                .filter(|profile| profile.region() == region)
                .map(|profile| profile.code)
                .collect();
            let selected = locale_from_region(region).map_or("-", |profile| profile.code);
            format!("{}  {}  ({})", region, selected, locales.join(", "))
        })
        .collect()
}

/// # Errors
///
/// Returns an error when the store cannot be read, written, or lacks the
/// named template.
pub(crate) fn run_templates_command(action: &TemplatesCommand, settings: &Settings) -> AppResult<()> {
    match action {
        TemplatesCommand::List => {
            let store = TemplateStore::load(settings.templates_path.clone());
            for name in store.names() {
                println!("{}", name);
            }
        }
        TemplatesCommand::Show { name } => {
            let store = TemplateStore::load(settings.templates_path.clone());
            println!("{}", serde_json::to_string_pretty(store.get(name)?)?);
        }
        TemplatesCommand::Delete { name } => {
            let templates = TemplateStore::read(&settings.templates_path)?;
            let mut store = TemplateStore::from_templates(settings.templates_path.clone(), templates);
            store.delete(name)?;
            store.save()?;
            info!("Deleted template \"{}\"", name);
        }
        TemplatesCommand::Init { force } => {
            if settings.templates_path.exists() && !force {
                return Err(ConfigError::TemplatesExist {
                    path: settings.templates_path.clone(),
                }
                .into());
            }
            TemplateStore::with_default(settings.templates_path.clone()).save()?;
            println!("{}", settings.templates_path.display());
        }
    }
    Ok(())
}

/// Resolves the selected template once and returns headers and form fields
/// as one JSON document.
///
/// # Errors
///
/// Returns configuration errors for the template and any placeholder error.
pub(crate) fn render_template(
    render: &RenderArgs,
    args: &LureArgs,
    settings: &Settings,
) -> AppResult<serde_json::Value> {
    let store = TemplateStore::load(settings.templates_path.clone());
    let template = select_template(&store, settings, args)?;
    let registry = CapabilityRegistry::build(template.locale()?.code)?;
    let mut rng = rand::thread_rng();
    let resolved = resolve_template(&registry, &template, !render.unique, &mut rng)?;
    Ok(serde_json::json!({
        "template": template.name,
        "method": template.request_data.method.as_str(),
        "url": template.request_data.url,
        "headers": resolved.headers,
        "form_fields": resolved.form_fields,
    }))
}
