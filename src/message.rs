//! Localized message resolution with locale fallback and `%{message}` interpolation.

use crate::config::LocaleTable;
use crate::error::ConfigError;
use crate::operation::Operation;
use std::collections::HashMap;
use validator::ValidationErrors;

/// Caller-supplied detail interpolated into the localized message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Detail {
    #[default]
    None,
    Text(String),
    /// Joined with `", "` on resolution.
    List(Vec<String>),
}

impl Detail {
    /// Collapse to the single string substituted for `%{message}`.
    pub fn resolve(&self) -> Option<String> {
        match self {
            Detail::None => None,
            Detail::Text(s) => Some(s.clone()),
            Detail::List(items) => Some(items.join(", ")),
        }
    }

    pub fn from_full_messages<E: FullMessages + ?Sized>(errors: &E) -> Self {
        Detail::List(errors.full_messages())
    }
}

impl From<&str> for Detail {
    fn from(s: &str) -> Self {
        Detail::Text(s.to_string())
    }
}

impl From<String> for Detail {
    fn from(s: String) -> Self {
        Detail::Text(s)
    }
}

impl From<Option<String>> for Detail {
    fn from(s: Option<String>) -> Self {
        s.map_or(Detail::None, Detail::Text)
    }
}

impl From<Vec<String>> for Detail {
    fn from(items: Vec<String>) -> Self {
        Detail::List(items)
    }
}

impl From<Vec<&str>> for Detail {
    fn from(items: Vec<&str>) -> Self {
        Detail::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Detail {
    fn from(items: &[&str]) -> Self {
        Detail::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&ValidationErrors> for Detail {
    fn from(errors: &ValidationErrors) -> Self {
        Detail::from_full_messages(errors)
    }
}

/// Structured validation errors that can render as human-readable sentences.
pub trait FullMessages {
    fn full_messages(&self) -> Vec<String>;
}

/// `"<Humanized field> <message>"` per field error, falling back to the error
/// code when no message is set. Sorted by field name; nested struct and list
/// errors are not descended into.
impl FullMessages for ValidationErrors {
    fn full_messages(&self) -> Vec<String> {
        let mut fields: Vec<_> = self.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
            .into_iter()
            .flat_map(|(field, errors)| {
                let label = humanize(&field);
                errors
                    .iter()
                    .map(|e| {
                        let text = e.message.as_deref().unwrap_or(&*e.code);
                        format!("{} {}", label, text)
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// `first_name` -> `First name`, `author_id` -> `Author`.
pub fn humanize(field: &str) -> String {
    let field = field.strip_suffix("_id").unwrap_or(field);
    let spaced = field.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace `%{name}` placeholders for the given args. Unknown placeholders are kept.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out
}

/// Locale tables plus the default locale. Immutable after construction.
#[derive(Debug)]
pub struct MessageResolver {
    tables: HashMap<String, LocaleTable>,
    default_locale: String,
}

impl MessageResolver {
    /// The default locale must exist and translate every operation that renders a message.
    pub fn new(tables: HashMap<String, LocaleTable>, default_locale: &str) -> Result<Self, ConfigError> {
        let table = tables
            .get(default_locale)
            .ok_or_else(|| ConfigError::UnknownLocale(default_locale.to_string()))?;
        for op in Operation::ALL.iter().filter(|op| op.has_body()) {
            let key = op.message_key();
            if !table.contains_key(&key) {
                return Err(ConfigError::MissingTranslation {
                    locale: default_locale.to_string(),
                    key,
                });
            }
        }
        Ok(Self {
            tables,
            default_locale: default_locale.to_string(),
        })
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Look `key` up in `locale`, its language-only tag, then the default locale.
    pub fn lookup(&self, locale: &str, key: &str) -> Result<&str, ConfigError> {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        [locale, language, self.default_locale.as_str()]
            .into_iter()
            .find_map(|tag| self.tables.get(tag).and_then(|t| t.get(key)))
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Message for `operation` under `api_responser.<category>.<operation>`,
    /// with the resolved detail (or nothing) substituted for `%{message}`.
    pub fn resolve(&self, locale: &str, operation: Operation, detail: &Detail) -> Result<String, ConfigError> {
        let template = self.lookup(locale, &operation.message_key())?;
        let message = detail.resolve().unwrap_or_default();
        Ok(interpolate(template, &[("message", message.as_str())]))
    }
}
