use serde_yaml::from_str;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to load locale file: {0}")]
    LoadError(String),
    #[error("Failed to parse locale file: {0}")]
    ParseError(String),
    #[error("Locale not found: {0}")]
    LocaleNotFound(String),
    #[error("Translation not found: {0}")]
    KeyNotFound(String),
}

impl From<std::io::Error> for LocaleError {
    fn from(err: std::io::Error) -> Self {
        LocaleError::LoadError(err.to_string())
    }
}

/// String tables loaded from `<dir>/<locale>.yml`, keyed by dotted path.
pub struct Locales {
    translations: HashMap<String, HashMap<String, String>>,
    default_locale: String,
}

fn flatten_yaml(value: &serde_yaml::Value, result: &mut HashMap<String, String>, prefix: String) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                if let Some(key) = k.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key.to_string()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    flatten_yaml(v, result, new_prefix);
                }
            }
        }
        serde_yaml::Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        _ => {}
    }
}

impl Locales {
    /// Reads every `.yml` file in `path` and selects `default_locale`.
    pub fn load<P: AsRef<Path>>(path: P, default_locale: &str) -> Result<Self, LocaleError> {
        let mut locales = Self::new(path)?;
        locales.set_default(default_locale)?;
        Ok(locales)
    }

    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LocaleError> {
        let mut translations = HashMap::new();

        for entry in fs::read_dir(path)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "yml") {
                continue;
            }

            let locale = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| LocaleError::LoadError(path.display().to_string()))?
                .to_string();

            let content = fs::read_to_string(&path)?;
            let value: serde_yaml::Value = from_str(&content).map_err(|e| {
                LocaleError::ParseError(format!("Failed to parse {}: {}", path.display(), e))
            })?;

            let mut strings = HashMap::new();
            flatten_yaml(&value, &mut strings, String::new());
            log::debug!("Loaded {} strings for locale {}", strings.len(), locale);
            translations.insert(locale, strings);
        }

        Ok(Self { translations, default_locale: String::new() })
    }

    pub fn set_default(&mut self, locale: &str) -> Result<(), LocaleError> {
        if self.translations.contains_key(locale) {
            self.default_locale = locale.to_string();
            Ok(())
        } else {
            Err(LocaleError::LocaleNotFound(locale.to_string()))
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Translates `key` in the default locale; an unknown key renders as itself.
    pub fn t(&self, key: &str) -> String {
        self.translate(&self.default_locale, key).unwrap_or_else(|_| {
            log::warn!("Missing translation for {} in locale {}", key, self.default_locale);
            key.to_string()
        })
    }

    pub fn translate(&self, locale: &str, key: &str) -> Result<String, LocaleError> {
        let strings = self
            .translations
            .get(locale)
            .ok_or_else(|| LocaleError::LocaleNotFound(locale.to_string()))?;
        strings.get(key).cloned().ok_or_else(|| LocaleError::KeyNotFound(key.to_string()))
    }
}
