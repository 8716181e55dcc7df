//! Load locale tables and envelope templates: bundled defaults plus host overrides.

use crate::config::ResponderConfig;
use crate::error::ConfigError;
use crate::render::TemplateKind;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat `dotted.key -> message` table for one locale.
pub type LocaleTable = HashMap<String, String>;

const BUNDLED_LOCALES: &[(&str, &str)] = &[("en", include_str!("../../locales/en.json"))];

/// Where a template body came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateOrigin {
    Host(PathBuf),
    Bundled,
}

#[derive(Clone, Debug)]
pub struct TemplateSource {
    pub kind: TemplateKind,
    pub origin: TemplateOrigin,
    pub body: String,
}

/// Bundled locale tables, then every `<tag>.json` under `locales_dir` merged over them.
pub fn load_locales(config: &ResponderConfig) -> Result<HashMap<String, LocaleTable>, ConfigError> {
    let mut tables: HashMap<String, LocaleTable> = HashMap::new();
    for (tag, raw) in BUNDLED_LOCALES {
        let table = parse_locale(raw).map_err(|source| ConfigError::InvalidLocale {
            locale: tag.to_string(),
            source,
        })?;
        tables.insert(tag.to_string(), table);
    }

    if let Some(dir) = &config.locales_dir {
        let entries = fs::read_dir(dir).map_err(|source| ConfigError::Read {
            path: dir.clone(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ConfigError::Read {
                path: dir.clone(),
                source,
            })?;
            paths.push(entry.path());
        }
        paths.sort();
        for path in paths {
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let Some(tag) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            let raw = read(&path)?;
            let table = parse_locale(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(locale = %tag, path = %path.display(), keys = table.len(), "loaded locale file");
            tables.entry(tag).or_default().extend(table);
        }
    }
    Ok(tables)
}

/// Parse a nested JSON locale document into dotted keys. Non-string leaves are ignored.
pub fn parse_locale(raw: &str) -> Result<LocaleTable, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    let mut table = LocaleTable::new();
    flatten("", &value, &mut table);
    Ok(table)
}

fn flatten(prefix: &str, value: &Value, out: &mut LocaleTable) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

/// Host template `<templates_dir>/<kind>.json.hbs` if present, else the bundled default.
pub fn load_template(config: &ResponderConfig, kind: TemplateKind) -> Result<TemplateSource, ConfigError> {
    let path = config.templates_dir.join(kind.file_name());
    let (origin, body) = if path.is_file() {
        let body = read(&path)?;
        (TemplateOrigin::Host(path), body)
    } else {
        (TemplateOrigin::Bundled, kind.bundled().to_string())
    };
    tracing::debug!(template = kind.name(), origin = ?origin, "selected envelope template");
    Ok(TemplateSource { kind, origin, body })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
