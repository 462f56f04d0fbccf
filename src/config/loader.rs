//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule
//! parameters, holiday API settings and message catalogs from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::messages::MessageCatalog;

use super::types::{HolidayApiConfig, RuleSet};

/// Language used when a request does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/milog/
/// ├── rules.yaml       # Daily cap, pause table, day bounds, row limits
/// ├── holidays.yaml    # Holiday API URL, timeout, default region
/// └── messages/
///     ├── de.yaml      # Message templates, one file per language
///     └── en.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use milog_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/milog")?;
/// println!("Daily cap: {}", loader.rules().daily_max_working_time);
/// let catalog = loader.catalog("en")?;
/// println!("Language: {}", catalog.language());
/// # Ok::<(), milog_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleSet,
    holiday_api: HolidayApiConfig,
    catalogs: BTreeMap<String, MessageCatalog>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rule parameters fail [`RuleSet::validate`]
    /// - No message catalog exists for [`DEFAULT_LANGUAGE`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RuleSet>(&path.join("rules.yaml"))?;
        let holiday_api = Self::load_yaml::<HolidayApiConfig>(&path.join("holidays.yaml"))?;
        let catalogs = Self::load_catalogs(&path.join("messages"))?;

        let loader = Self::new(rules, holiday_api, catalogs)?;
        info!(
            path = %path.display(),
            languages = ?loader.languages().collect::<Vec<_>>(),
            "Configuration loaded"
        );
        Ok(loader)
    }

    /// Builds a loader from already parsed parts.
    ///
    /// # Errors
    ///
    /// Fails if `rules` are invalid or no catalog covers [`DEFAULT_LANGUAGE`].
    pub fn new(
        rules: RuleSet,
        holiday_api: HolidayApiConfig,
        catalogs: impl IntoIterator<Item = MessageCatalog>,
    ) -> EngineResult<Self> {
        rules.validate()?;

        let catalogs: BTreeMap<String, MessageCatalog> = catalogs
            .into_iter()
            .map(|catalog| (catalog.language().to_string(), catalog))
            .collect();
        if !catalogs.contains_key(DEFAULT_LANGUAGE) {
            return Err(EngineError::UnknownLanguage {
                code: DEFAULT_LANGUAGE.to_string(),
            });
        }

        Ok(Self {
            rules,
            holiday_api,
            catalogs,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every catalog file from the messages directory.
    fn load_catalogs(messages_dir: &Path) -> EngineResult<Vec<MessageCatalog>> {
        let dir_str = messages_dir.display().to_string();

        let entries = fs::read_dir(messages_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut catalogs = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let path_str = path.display().to_string();
                let content =
                    fs::read_to_string(&path).map_err(|_| EngineError::ConfigNotFound {
                        path: path_str.clone(),
                    })?;
                let catalog = MessageCatalog::from_yaml_str(&content).map_err(|e| match e {
                    EngineError::ConfigParseError { message, .. } => {
                        EngineError::ConfigParseError {
                            path: path_str.clone(),
                            message,
                        }
                    }
                    other => other,
                })?;
                debug!(path = %path_str, language = catalog.language(), "Loaded message catalog");
                catalogs.push(catalog);
            }
        }

        Ok(catalogs)
    }

    /// Returns the rule parameters.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the holiday API settings.
    pub fn holiday_api(&self) -> &HolidayApiConfig {
        &self.holiday_api
    }

    /// Gets the message catalog for a language code.
    ///
    /// # Returns
    ///
    /// Returns the catalog if loaded, or `UnknownLanguage` error.
    pub fn catalog(&self, code: &str) -> EngineResult<&MessageCatalog> {
        self.catalogs
            .get(code)
            .ok_or_else(|| EngineError::UnknownLanguage {
                code: code.to_string(),
            })
    }

    /// Returns the catalog for [`DEFAULT_LANGUAGE`].
    pub fn default_catalog(&self) -> &MessageCatalog {
        // `new` refuses to build a loader without it.
        &self.catalogs[DEFAULT_LANGUAGE]
    }

    /// The language codes of all loaded catalogs.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }
}
