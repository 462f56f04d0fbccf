//! Message templates per violation kind.

use std::collections::BTreeMap;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::validation::{Violation, ViolationArgument, ViolationKind};

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

/// The on-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    language: String,
    #[serde(default = "default_date_format")]
    date_format: String,
    messages: BTreeMap<ViolationKind, String>,
}

/// Renders violations into text for one language.
///
/// Templates use positional placeholders `{0}`, `{1}` that are replaced by
/// the violation's arguments in order. Durations render as `H:MM`, dates
/// with the catalog's `date_format` (`DD.MM.YYYY` unless overridden).
///
/// # Example
///
/// ```
/// use milog_engine::messages::MessageCatalog;
/// use milog_engine::validation::Violation;
/// use chrono::NaiveDate;
///
/// let catalog = MessageCatalog::from_yaml_str(r#"
/// language: en
/// messages:
///   TOTAL_TIME_EXCEEDANCE: "Maximum working time {0} exceeded by {1}."
///   DAY_TIME_EXCEEDANCE: "More than {0} worked on {1}."
///   TIME_OUTOFBOUNDS: "Work outside permitted hours on {0}."
///   TIME_SUNDAY: "Work on Sunday {0}."
///   TIME_HOLIDAY: "Work on public holiday {0}."
///   TIME_PAUSE: "Too little pause on {0}."
///   TIME_OVERLAP: "Overlapping entries on {0}."
///   ROWNUM_EXCEEDANCE: "More than {0} entries."
///   NAME_MISSING: "Department name missing."
/// "#).unwrap();
///
/// let sunday = Violation::TimeSunday { date: NaiveDate::from_ymd_opt(2019, 11, 3).unwrap() };
/// assert_eq!(catalog.render(&sunday), "Work on Sunday 03.11.2019.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    language: String,
    date_format: String,
    templates: BTreeMap<ViolationKind, String>,
}

impl MessageCatalog {
    /// Parses a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] for malformed YAML and
    /// [`EngineError::InvalidConfig`] if a kind has no template or the date
    /// format is not a valid strftime pattern.
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                path: "<message catalog>".to_string(),
                message: e.to_string(),
            })?;
        Self::new(file.language, file.date_format, file.messages)
    }

    /// Builds a catalog from its parts.
    ///
    /// # Errors
    ///
    /// Same validation as [`MessageCatalog::from_yaml_str`].
    pub fn new(
        language: impl Into<String>,
        date_format: impl Into<String>,
        templates: BTreeMap<ViolationKind, String>,
    ) -> EngineResult<Self> {
        let language = language.into();
        let date_format = date_format.into();

        let missing: Vec<&str> = ViolationKind::ALL
            .iter()
            .filter(|kind| !templates.contains_key(kind))
            .map(|kind| kind.code())
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "message catalog '{}' has no template for {}",
                    language,
                    missing.join(", ")
                ),
            });
        }

        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "message catalog '{}' has invalid date format '{}'",
                    language, date_format
                ),
            });
        }

        Ok(Self {
            language,
            date_format,
            templates,
        })
    }

    /// The language code of this catalog.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The raw template for `kind`.
    pub fn template(&self, kind: ViolationKind) -> &str {
        self.templates.get(&kind).map(String::as_str).unwrap_or_default()
    }

    /// Formats a single argument the way templates show it.
    pub fn format_argument(&self, argument: &ViolationArgument) -> String {
        match argument {
            ViolationArgument::Duration(duration) => duration.to_string(),
            ViolationArgument::Date(date) => date.format(&self.date_format).to_string(),
            ViolationArgument::Count(count) => count.to_string(),
        }
    }

    /// Renders a violation into text.
    pub fn render(&self, violation: &Violation) -> String {
        violation
            .arguments()
            .iter()
            .enumerate()
            .fold(self.template(violation.kind()).to_string(), |text, (i, arg)| {
                text.replace(&format!("{{{i}}}"), &self.format_argument(arg))
            })
    }
}
