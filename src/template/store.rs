use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;

use super::defaults::default_template;
use super::model::Template;

/// Named templates backed by one JSON document.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// Store holding only the default template, not yet written to disk.
    #[must_use]
    pub fn with_default(path: impl Into<PathBuf>) -> Self {
        let template = default_template();
        let mut templates = BTreeMap::new();
        templates.insert(template.name.clone(), template);
        Self {
            path: path.into(),
            templates,
        }
    }

    #[must_use]
    pub fn from_templates(path: impl Into<PathBuf>, templates: BTreeMap<String, Template>) -> Self {
        Self {
            path: path.into(),
            templates,
        }
    }

    /// Reads the store, falling back to the default template when the file
    /// is missing, unreadable, or empty.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::read(&path) {
            Ok(templates) if !templates.is_empty() => Self { path, templates },
            Ok(_) => {
                debug!("Template store {} is empty, using default", path.display());
                Self::with_default(path)
            }
            Err(err) => {
                if path.exists() {
                    warn!("{}; using default template", err);
                } else {
                    debug!("Template store {} not found, using default", path.display());
                }
                Self::with_default(path)
            }
        }
    }

    /// Reads the store strictly.
    ///
    /// # Errors
    ///
    /// Returns `ReadTemplates` or `ParseTemplates` when the file cannot be
    /// read or parsed.
    pub fn read(path: &Path) -> Result<BTreeMap<String, Template>, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadTemplates {
            path: path.to_path_buf(),
            source: err,
        })?;
        serde_json::from_str(&content).map_err(|err| ConfigError::ParseTemplates {
            path: path.to_path_buf(),
            source: err,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns `TemplateNotFound` when no template has that name.
    pub fn get(&self, name: &str) -> Result<&Template, ConfigError> {
        self.templates
            .get(name)
            .ok_or_else(|| ConfigError::TemplateNotFound {
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// # Errors
    ///
    /// Returns `NoTemplates` for an empty store.
    pub fn first(&self) -> Result<&Template, ConfigError> {
        self.templates
            .values()
            .next()
            .ok_or(ConfigError::NoTemplates)
    }

    /// Inserts or replaces a template. When `old_name` differs from the
    /// template's name the old entry is removed.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNameRequired` when the template's name is blank.
    pub fn upsert(
        &mut self,
        old_name: Option<&str>,
        mut template: Template,
    ) -> Result<(), ConfigError> {
        let name = template.name.trim().to_owned();
        if name.is_empty() {
            return Err(ConfigError::TemplateNameRequired);
        }
        if let Some(old) = old_name
            && old != name
        {
            self.templates.remove(old);
        }
        template.name.clone_from(&name);
        self.templates.insert(name, template);
        Ok(())
    }

    /// Removes a template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` when no template has that name.
    pub fn delete(&mut self, name: &str) -> Result<Template, ConfigError> {
        self.templates
            .remove(name)
            .ok_or_else(|| ConfigError::TemplateNotFound {
                name: name.to_owned(),
            })
    }

    /// Writes the store as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SerializeTemplates` or `WriteTemplates` on failure.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(&self.templates)
            .map_err(|err| ConfigError::SerializeTemplates { source: err })?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| ConfigError::WriteTemplates {
                path: self.path.clone(),
                source: err,
            })?;
        }
        std::fs::write(&self.path, content).map_err(|err| ConfigError::WriteTemplates {
            path: self.path.clone(),
            source: err,
        })?;
        debug!("Saved {} templates to {}", self.templates.len(), self.path.display());
        Ok(())
    }
}
