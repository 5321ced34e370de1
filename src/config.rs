use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Flat, dotted-key settings read from `gallery.config.json` and the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    pub const FILE_NAME: &'static str = "gallery.config.json";
    pub const PATH_ENV: &'static str = "GALLERY_CONFIG";
    pub const ENV_PREFIX: &'static str = "GALLERY_";

    pub const SERVER_ADDRESS: &'static str = "server.address";
    pub const BASE_TITLE: &'static str = "base.title";
    pub const GALLERY_PAGE_SIZE: &'static str = "gallery.pageSize";
    pub const DATABASE_URL: &'static str = "database.url";

    const KNOWN_KEYS: [&'static str; 4] = [
        Self::SERVER_ADDRESS,
        Self::BASE_TITLE,
        Self::GALLERY_PAGE_SIZE,
        Self::DATABASE_URL,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config file when present, then applies `GALLERY_*` overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::FILE_NAME.to_string());
        let mut config = if Path::new(&path).exists() {
            log::info!("Loading configuration from {}", path);
            Self::from_file(&path)?
        } else {
            log::debug!("No configuration file at {}, using defaults", path);
            Self::new()
        };
        config.apply_env(std::env::vars());
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: JsonValue = serde_json::from_str(content)?;
        let mut config = Self::new();
        flatten(&mut config.values, None, &root);
        Ok(config)
    }

    /// `GALLERY_BASE_TITLE=x` overrides `base.title`; matching ignores case so
    /// `GALLERY_GALLERY_PAGESIZE` reaches `gallery.pageSize`.
    pub fn apply_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            let Some(suffix) = name.strip_prefix(Self::ENV_PREFIX) else {
                continue;
            };
            let dotted = suffix.to_ascii_lowercase().replace('_', ".");
            if dotted == "config" {
                continue;
            }
            let key = Self::KNOWN_KEYS
                .iter()
                .map(|key| key.to_string())
                .chain(self.values.keys().cloned())
                .find(|key| key.to_ascii_lowercase() == dotted)
                .unwrap_or(dotted);
            self.values.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid value for {}: {}", key, raw);
                None
            }
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

fn flatten(values: &mut BTreeMap<String, String>, prefix: Option<&str>, node: &JsonValue) {
    match node {
        JsonValue::Object(map) => {
            for (key, child) in map {
                let path = match prefix {
                    Some(prefix) => format!("{prefix}.{key}"),
                    None => key.clone(),
                };
                flatten(values, Some(&path), child);
            }
        }
        JsonValue::Null => {}
        JsonValue::String(text) => {
            if let Some(prefix) = prefix {
                values.insert(prefix.to_string(), text.clone());
            }
        }
        other => {
            if let Some(prefix) = prefix {
                values.insert(prefix.to_string(), other.to_string());
            }
        }
    }
}
