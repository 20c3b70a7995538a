//! Advisor configuration: defaults, then `settings.json` in the platform
//! config dir, then environment variables.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "AlbionLedger";
const APP_NAME: &str = "AlbionLedger";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

const ENV_API_KEYS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
const ENV_MODEL: &str = "GEMINI_MODEL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AdvisorSettings {
    /// Resolves settings from every source; a broken file is logged and skipped.
    pub fn load() -> Self {
        let mut settings = Self::default();
        match load_settings_file() {
            Ok(Some(file)) => settings.apply_file(file),
            Ok(None) => debug!("no settings file; using defaults"),
            Err(err) => warn!("ignoring unreadable settings file: {err}"),
        }
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    fn apply_file(&mut self, file: SettingsFile) {
        if let Some(key) = file.api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = file.model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        if let Some(base_url) = file.base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = base_url;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = ENV_API_KEYS
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

fn load_settings_file() -> Result<Option<SettingsFile>, SettingsError> {
    let Some(path) = settings_file() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_have_no_key() {
        let settings = AdvisorSettings::default();
        assert!(!settings.has_api_key());
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn env_overrides_file() {
        let mut settings = AdvisorSettings::default();
        settings.apply_file(SettingsFile {
            api_key: Some("from-file".into()),
            model: Some("file-model".into()),
            base_url: None,
        });
        settings.apply_env(env(&[("GEMINI_API_KEY", "from-env")]));

        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.model, "file-model");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_wins_over_gemini_api_key() {
        let mut settings = AdvisorSettings::default();
        settings.apply_env(env(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "secondary")]));
        assert_eq!(settings.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut settings = AdvisorSettings::default();
        settings.apply_env(env(&[("API_KEY", "  "), (ENV_MODEL, "")]));
        assert!(!settings.has_api_key());
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn settings_file_parses_partial_json() {
        let file: SettingsFile = serde_json::from_str(r#"{"model":"gemini-pro"}"#).unwrap();
        assert_eq!(file.model.as_deref(), Some("gemini-pro"));
        assert!(file.api_key.is_none());
    }
}
