//! Message catalogs keyed by locale.
//!
//! Each catalog couples a Fluent bundle with the text direction of its
//! language. The shell looks a catalog up by the locale key held in the
//! locale context and passes the resolved catalog down to views.

use crate::direction::Direction;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::collections::HashMap;
use std::rc::Rc;
use unic_langid::{CharacterDirection, LanguageIdentifier};

const EN_FTL: &str = include_str!("../../lang/en.ftl");
const ES_FTL: &str = include_str!("../../lang/es.ftl");
const AR_FTL: &str = include_str!("../../lang/ar.ftl");

/// Built-in catalogs: (key, language tag, forced direction, source).
const BUILTIN: &[(&str, &str, Option<Direction>, &str)] = &[
    ("en", "en-US", None, EN_FTL),
    ("es", "es-ES", None, ES_FTL),
    ("ar", "ar", None, AR_FTL),
    // English strings laid out right-to-left, for checking RTL styling
    ("enrtl", "en-US", Some(Direction::Rtl), EN_FTL),
];

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid language tag '{tag}' for locale {key}")]
    InvalidTag { key: String, tag: String },
    #[error("failed to parse messages for locale {key}: {count} error(s)")]
    Parse { key: String, count: usize },
    #[error("conflicting message ids for locale {key}")]
    Conflict { key: String },
    #[error("default locale {0} has no catalog")]
    MissingDefault(String),
}

/// A resolved locale: language, direction and messages.
pub struct Catalog {
    key: String,
    langid: LanguageIdentifier,
    direction: Direction,
    bundle: FluentBundle<FluentResource>,
}

impl Catalog {
    pub fn new(
        key: &str,
        tag: &str,
        direction: Option<Direction>,
        source: &str,
    ) -> Result<Self, CatalogError> {
        let langid: LanguageIdentifier = tag.parse().map_err(|_| CatalogError::InvalidTag {
            key: key.to_string(),
            tag: tag.to_string(),
        })?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CatalogError::Parse {
                key: key.to_string(),
                count: errors.len(),
            }
        })?;

        let mut bundle = FluentBundle::new(vec![langid.clone()]);
        // Direction is handled on the root element, not per placeable
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| CatalogError::Conflict {
                key: key.to_string(),
            })?;

        let direction = direction.unwrap_or_else(|| direction_of(&langid));

        Ok(Self {
            key: key.to_string(),
            langid,
            direction,
            bundle,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// BCP 47 tag of the catalog language
    pub fn locale(&self) -> String {
        self.langid.to_string()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message, falling back to the id when it is missing.
    pub fn message(&self, id: &str) -> String {
        self.format(id, None)
    }

    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(id).and_then(|msg| msg.value()) else {
            tracing::debug!("Missing message {} in locale {}", id, self.key);
            return id.to_string();
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(
                "Formatting {} in locale {} produced {} error(s)",
                id,
                self.key,
                errors.len()
            );
        }
        value.into_owned()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("key", &self.key)
            .field("locale", &self.langid)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

fn direction_of(langid: &LanguageIdentifier) -> Direction {
    match langid.character_direction() {
        CharacterDirection::RTL => Direction::Rtl,
        _ => Direction::Ltr,
    }
}

/// Locale key → catalog lookup with a guaranteed default.
#[derive(Clone)]
pub struct CatalogTable {
    catalogs: HashMap<String, Rc<Catalog>>,
    default: Rc<Catalog>,
}

impl CatalogTable {
    /// Catalogs shipped with the crate, defaulting to `default_key`.
    pub fn builtin(default_key: &str) -> Result<Self, CatalogError> {
        let catalogs = BUILTIN
            .iter()
            .map(|(key, tag, direction, source)| Catalog::new(key, tag, *direction, source))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_catalogs(catalogs, default_key)
    }

    pub fn from_catalogs(catalogs: Vec<Catalog>, default_key: &str) -> Result<Self, CatalogError> {
        let catalogs: HashMap<String, Rc<Catalog>> = catalogs
            .into_iter()
            .map(|c| (c.key.clone(), Rc::new(c)))
            .collect();
        let default = catalogs
            .get(default_key)
            .cloned()
            .ok_or_else(|| CatalogError::MissingDefault(default_key.to_string()))?;
        Ok(Self { catalogs, default })
    }

    pub fn get(&self, key: &str) -> Option<Rc<Catalog>> {
        self.catalogs.get(key).cloned()
    }

    /// Catalog for `key`, or the default catalog when the key is unknown.
    pub fn resolve(&self, key: &str) -> Rc<Catalog> {
        match self.catalogs.get(key) {
            Some(catalog) => catalog.clone(),
            None => {
                tracing::warn!(
                    "Unknown locale {}, falling back to {}",
                    key,
                    self.default.key
                );
                self.default.clone()
            }
        }
    }

    pub fn default_key(&self) -> &str {
        &self.default.key
    }

    /// Locale keys in a stable order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn direction_for(&self, key: &str) -> Direction {
        self.resolve(key).direction()
    }
}
