//! User preferences kept at the application boundary.
//!
//! The dashboard persists locale, theme, privacy mode and the session token
//! between visits. Callers load a [`Settings`] value once through a
//! [`SettingsStore`] and pass it where it is needed; nothing in this crate
//! reads preferences from global state.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "ar")]
    Ar,
}

impl Locale {
    /// Whether the locale is written right to left
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

/// Persisted user preferences. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub locale:       Locale,
    pub theme:        Theme,
    pub privacy_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token:   Option<String>,
}

impl Settings {
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_privacy_mode(mut self, enabled: bool) -> Self {
        self.privacy_mode = enabled;
        self
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Drops the session token, keeping the other preferences
    #[must_use]
    pub fn signed_out(mut self) -> Self {
        self.auth_token = None;
        self
    }

    pub const fn is_signed_in(&self) -> bool {
        self.auth_token.is_some()
    }
}

/// Error type for settings persistence.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the backing file failed.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored settings are not valid JSON.
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A writer panicked while holding the in-memory settings.
    #[error("settings lock poisoned")]
    Poisoned,
}

/// Read/write access to persisted settings.
pub trait SettingsStore {
    /// # Errors
    /// Returns `SettingsError` if the backing storage cannot be read.
    fn load(&self) -> Result<Settings, SettingsError>;

    /// # Errors
    /// Returns `SettingsError` if the backing storage cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Loads, applies `change`, saves, and returns the saved value.
    ///
    /// # Errors
    /// Returns `SettingsError` from either the load or the save.
    fn update<F>(&self, change: F) -> Result<Settings, SettingsError>
    where
        F: FnOnce(Settings) -> Settings,
        Self: Sized,
    {
        let updated = change(self.load()?);
        self.save(&updated)?;
        Ok(updated)
    }
}

/// Settings held in memory, e.g. for tests or a single session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<Settings>,
}

impl MemoryStore {
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| SettingsError::Poisoned)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let mut guard = self.settings.write().map_err(|_| SettingsError::Poisoned)?;
        *guard = settings.clone();
        Ok(())
    }
}

/// Settings stored as a JSON document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    /// A missing file yields the default settings.
    fn load(&self) -> Result<Settings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            },
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.privacy_mode);
        assert!(!settings.is_signed_in());
    }

    #[test]
    fn test_locale_direction() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
        assert_eq!(Locale::Ar.to_string(), "ar");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_serde_keys() {
        let settings = Settings::default()
            .with_locale(Locale::Ar)
            .with_theme(Theme::Dark)
            .with_privacy_mode(true)
            .with_auth_token("abc");
        let json = serde_json::to_string(&settings).expect("failed to serialize settings");
        assert_eq!(
            json,
            r#"{"locale":"ar","theme":"dark","privacyMode":true,"authToken":"abc"}"#
        );

        let signed_out = serde_json::to_string(&settings.signed_out()).expect("failed to serialize settings");
        assert!(!signed_out.contains("authToken"));
    }

    #[test]
    fn test_serde_missing_keys_use_defaults() {
        let parsed: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).expect("partial settings should parse");
        assert_eq!(parsed, Settings::default().with_theme(Theme::Dark));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.load().expect("load from memory"), Settings::default());

        let settings = Settings::default().with_locale(Locale::Ar);
        store.save(&settings).expect("save to memory");
        assert_eq!(store.load().expect("load from memory"), settings);
    }

    #[test]
    fn test_update_applies_change() {
        let store = MemoryStore::new(Settings::default().with_auth_token("token"));
        let updated = store.update(Settings::signed_out).expect("update in memory");
        assert!(!updated.is_signed_in());
        assert_eq!(store.load().expect("load from memory"), updated);
    }

    #[test]
    fn test_json_file_store_missing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().expect("missing file loads defaults"), Settings::default());
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("nested").join("settings.json"));

        let settings = Settings::default()
            .with_theme(Theme::Dark)
            .with_privacy_mode(true)
            .with_auth_token("secret");
        store.save(&settings).expect("save creates parent directories");
        assert!(store.path().exists());
        assert_eq!(store.load().expect("load saved settings"), settings);
    }

    #[test]
    fn test_json_file_store_corrupt_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").expect("failed to write corrupt file");

        let result = JsonFileStore::new(path).load();
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }
}
