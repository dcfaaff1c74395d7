//! Persisted keyboard preferences.
//!
//! Settings can be kept as a TOML document or as individual values in a
//! [`SettingsStore`], the shape most host applications already have for
//! user preferences.

use ::serde::{Deserialize, Deserializer, Serialize};
use ::std::{collections::HashMap, time::Duration};
use ::tracing::warn;

use crate::{
    errors::{Context, Error, ErrorKind, Result},
    input::keyboard::DEFAULT_MODIFIER_TIMEOUT,
    layout::Locale,
};

const LAYOUT_KEY: &str = "KeyboardLayout";
const FORCE_LEFT_TO_RIGHT_KEY: &str = "ForceLeftToRight";
const MODIFIER_TIMEOUT_KEY: &str = "ModifierTimeoutSeconds";
const CAPS_LOCK_CLEARS_MODIFIERS_KEY: &str = "CapsLockClearsModifiers";

/// User-facing keyboard options.
///
/// Missing fields take their defaults. An unknown layout name falls back to
/// [`Locale::English`] rather than failing, so that settings written by a
/// newer version remain loadable.
///
/// ```
/// use ::vkbd::{layout::Locale, settings::KeyboardSettings};
///
/// let settings = KeyboardSettings::from_toml_str("layout = \"german\"").unwrap();
/// assert_eq!(settings.layout, Locale::German);
/// assert_eq!(settings.modifier_timeout_secs, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    #[serde(deserialize_with = "deserialize_locale")]
    pub layout: Locale,
    pub force_left_to_right: bool,
    pub modifier_timeout_secs: u64,
    pub caps_lock_clears_modifiers: bool,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            layout: Locale::English,
            force_left_to_right: false,
            modifier_timeout_secs: DEFAULT_MODIFIER_TIMEOUT.as_secs(),
            caps_lock_clears_modifiers: true,
        }
    }
}

fn deserialize_locale<'de, D>(deserializer: D) -> ::std::result::Result<Locale, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(locale_or_default(&name))
}

fn locale_or_default(name: &str) -> Locale {
    Locale::from_name(name).unwrap_or_else(|err| {
        warn!("{err}, using {}", Locale::default());
        Locale::default()
    })
}

impl KeyboardSettings {
    pub fn modifier_timeout(&self) -> Duration {
        Duration::from_secs(self.modifier_timeout_secs)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings = ::toml::from_str::<Self>(s)
            .map_err(Error::from)
            .context("Failed to parse keyboard settings")?;
        settings
            .validate()
            .context("Failed to parse keyboard settings")?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        ::toml::to_string(self)
            .map_err(Error::from)
            .context("Failed to serialize keyboard settings")
    }

    /// Reads settings from a key-value store. Absent keys take their
    /// defaults.
    pub fn load_from(store: &impl SettingsStore) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(name) = store.get(LAYOUT_KEY) {
            settings.layout = locale_or_default(&name);
        }
        if let Some(value) = store.get(FORCE_LEFT_TO_RIGHT_KEY) {
            settings.force_left_to_right = parse_value(FORCE_LEFT_TO_RIGHT_KEY, value)?;
        }
        if let Some(value) = store.get(MODIFIER_TIMEOUT_KEY) {
            settings.modifier_timeout_secs = parse_value(MODIFIER_TIMEOUT_KEY, value)?;
        }
        if let Some(value) = store.get(CAPS_LOCK_CLEARS_MODIFIERS_KEY) {
            settings.caps_lock_clears_modifiers =
                parse_value(CAPS_LOCK_CLEARS_MODIFIERS_KEY, value)?;
        }

        settings
            .validate()
            .context("Failed to load keyboard settings")?;
        Ok(settings)
    }

    /// A zero timeout would release Shift-Lock and AltGr the moment they
    /// engage.
    fn validate(&self) -> ::std::result::Result<(), ErrorKind> {
        if self.modifier_timeout_secs == 0 {
            return Err(ErrorKind::InvalidSetting {
                key: MODIFIER_TIMEOUT_KEY,
                value: self.modifier_timeout_secs.to_string(),
            });
        }
        Ok(())
    }

    /// Writes every setting to a key-value store.
    pub fn save_to(&self, store: &mut impl SettingsStore) {
        store.set(LAYOUT_KEY, self.layout.to_string());
        store.set(
            FORCE_LEFT_TO_RIGHT_KEY,
            self.force_left_to_right.to_string(),
        );
        store.set(MODIFIER_TIMEOUT_KEY, self.modifier_timeout_secs.to_string());
        store.set(
            CAPS_LOCK_CLEARS_MODIFIERS_KEY,
            self.caps_lock_clears_modifiers.to_string(),
        );
    }
}

fn parse_value<T: ::std::str::FromStr>(key: &'static str, value: String) -> Result<T> {
    let parsed = value.trim().to_ascii_lowercase().parse::<T>();
    parsed
        .map_err(|_| ErrorKind::InvalidSetting { key, value })
        .context("Failed to load keyboard settings")
}

/// A string key-value store for preferences, such as an application
/// settings file or the platform registry.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);
}

/// A [`SettingsStore`] which only lives in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MemoryStore {
    fn from(values: [(&str, &str); N]) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = KeyboardSettings::from_toml_str("").unwrap();

        assert_eq!(settings, KeyboardSettings::default());
        assert_eq!(settings.modifier_timeout(), Duration::from_secs(10));
        assert!(settings.caps_lock_clears_modifiers);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = KeyboardSettings {
            layout: Locale::Tamil,
            force_left_to_right: true,
            modifier_timeout_secs: 4,
            caps_lock_clears_modifiers: false,
        };
        let toml = settings.to_toml_string().unwrap();

        assert!(toml.contains("layout = \"Tamil\""), "{toml}");
        assert_eq!(KeyboardSettings::from_toml_str(&toml).unwrap(), settings);
    }

    #[test]
    fn test_unknown_layout_falls_back() {
        let settings = KeyboardSettings::from_toml_str("layout = \"Klingon\"").unwrap();
        assert_eq!(settings.layout, Locale::English);
    }

    #[test]
    fn test_malformed_toml() {
        let err = KeyboardSettings::from_toml_str("modifier_timeout_secs = \"soon\"").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::SettingsParse(_)));
        assert_eq!(
            err.context_message(),
            Some("Failed to parse keyboard settings")
        );
    }

    #[test]
    fn test_store_round_trip() {
        let settings = KeyboardSettings {
            layout: Locale::Russian,
            force_left_to_right: true,
            ..Default::default()
        };
        let mut store = MemoryStore::new();
        settings.save_to(&mut store);

        assert_eq!(store.get("KeyboardLayout"), Some("Russian".to_owned()));
        assert_eq!(KeyboardSettings::load_from(&store).unwrap(), settings);
    }

    #[test]
    fn test_store_values_are_lenient() {
        let store = MemoryStore::from([
            ("KeyboardLayout", "spanish"),
            ("ForceLeftToRight", "True"),
            ("ModifierTimeoutSeconds", " 7 "),
        ]);
        let settings = KeyboardSettings::load_from(&store).unwrap();

        assert_eq!(settings.layout, Locale::Spanish);
        assert!(settings.force_left_to_right);
        assert_eq!(settings.modifier_timeout_secs, 7);
        assert!(settings.caps_lock_clears_modifiers);
    }

    #[test]
    fn test_store_invalid_value() {
        let store = MemoryStore::from([("CapsLockClearsModifiers", "maybe")]);
        let err = KeyboardSettings::load_from(&store).unwrap_err();

        assert_eq!(
            err.kind(),
            &ErrorKind::InvalidSetting {
                key: "CapsLockClearsModifiers",
                value: "maybe".to_owned()
            }
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let zero = ErrorKind::InvalidSetting {
            key: "ModifierTimeoutSeconds",
            value: "0".to_owned(),
        };

        let store = MemoryStore::from([("ModifierTimeoutSeconds", "0")]);
        let err = KeyboardSettings::load_from(&store).unwrap_err();
        assert_eq!(err.kind(), &zero);
        assert_eq!(err.context_message(), Some("Failed to load keyboard settings"));

        let err = KeyboardSettings::from_toml_str("modifier_timeout_secs = 0").unwrap_err();
        assert_eq!(err.kind(), &zero);
    }
}
