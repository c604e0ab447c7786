mod error;

pub use error::{ConfigError, ConfigResult};

use crate::console::{VerbosityLevel, console};
use crate::render::{sanitize_text_field, sanitize_textarea_field};
use crate::timezone;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use std::{fs, path::Path, path::PathBuf};

/// Zone used for `default_timezone` when the host has no site timezone.
pub const DEFAULT_SITE_TIMEZONE: &str = "America/New_York";

pub const DEFAULT_MORNING_START: u32 = 5;
pub const DEFAULT_AFTERNOON_START: u32 = 12;
pub const DEFAULT_EVENING_START: u32 = 17;
pub const DEFAULT_NIGHT_START: u32 = 22;
pub const DEFAULT_NIGHT_MESSAGE: &str = "It's {time} {tz} and we're asleep.";
pub const DEFAULT_TZ_ABBR: &str = "ET";

const CONFIG_ENV_VAR: &str = "TIME_GREETING_CONFIG";

/// Fully populated settings snapshot consumed by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub morning_start: u32,
    pub afternoon_start: u32,
    pub evening_start: u32,
    pub night_start: u32,
    pub night_message: String,
    pub default_timezone: String,
    pub default_tz_abbr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_stored(&StoredSettings::default(), None)
    }
}

impl Settings {
    /// Fill every field missing from `stored` with its compiled-in default.
    /// `site_timezone` is the host's configured zone, preferred over the
    /// literal default when non-empty.
    pub fn from_stored(stored: &StoredSettings, site_timezone: Option<&str>) -> Self {
        let site_default = site_timezone
            .map(str::trim)
            .filter(|zone| !zone.is_empty())
            .unwrap_or(DEFAULT_SITE_TIMEZONE);

        Self {
            morning_start: stored.morning_start.unwrap_or(DEFAULT_MORNING_START),
            afternoon_start: stored.afternoon_start.unwrap_or(DEFAULT_AFTERNOON_START),
            evening_start: stored.evening_start.unwrap_or(DEFAULT_EVENING_START),
            night_start: stored.night_start.unwrap_or(DEFAULT_NIGHT_START),
            night_message: stored
                .night_message
                .clone()
                .unwrap_or_else(|| DEFAULT_NIGHT_MESSAGE.to_string()),
            default_timezone: stored
                .default_timezone
                .clone()
                .unwrap_or_else(|| site_default.to_string()),
            default_tz_abbr: stored
                .default_tz_abbr
                .clone()
                .unwrap_or_else(|| DEFAULT_TZ_ABBR.to_string()),
        }
    }
}

/// Read a stored field, dropping a value of the wrong type instead of
/// rejecting the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<toml::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match value.clone().try_into::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            console().warning(&format!("Ignoring stored value {}: {}", value, e));
            Ok(None)
        }
    }
}

/// The settings record as it sits on disk; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoredSettings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub morning_start: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub afternoon_start: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub evening_start: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub night_start: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub night_message: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_tz_abbr: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
    /// The host's configured zone, used as `default_timezone` when the
    /// settings record has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_timezone: Option<String>,
    #[serde(default)]
    pub time_greeting: StoredSettings,
}

/// Keys accepted by `config set`, in display order.
pub const SETTING_KEYS: &[&str] = &[
    "morning_start",
    "afternoon_start",
    "evening_start",
    "night_start",
    "night_message",
    "default_timezone",
    "default_tz_abbr",
    "site_timezone",
    "verbosity",
];

impl AppConfig {
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|source| ConfigError::InvalidToml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Settings snapshot with defaults applied field by field.
    pub fn settings(&self) -> Settings {
        Settings::from_stored(&self.time_greeting, self.site_timezone.as_deref())
    }

    /// Validate and store a single value, the way the settings form does on
    /// submit. Nothing is written to disk here.
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let stored = &mut self.time_greeting;
        match key {
            "morning_start" => stored.morning_start = Some(parse_hour(key, value)?),
            "afternoon_start" => stored.afternoon_start = Some(parse_hour(key, value)?),
            "evening_start" => stored.evening_start = Some(parse_hour(key, value)?),
            "night_start" => stored.night_start = Some(parse_hour(key, value)?),
            "night_message" => stored.night_message = Some(sanitize_textarea_field(value)),
            "default_timezone" => {
                stored.default_timezone = Some(validate_zone(&sanitize_text_field(value))?)
            }
            "default_tz_abbr" => stored.default_tz_abbr = Some(sanitize_text_field(value)),
            "site_timezone" => {
                self.site_timezone = Some(validate_zone(&sanitize_text_field(value))?)
            }
            "verbosity" => {
                if VerbosityLevel::parse(value).is_none() {
                    return Err(ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.verbosity = Some(value.to_string());
            }
            _ => {
                return Err(ConfigError::UnknownConfigKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Drop the stored settings record so every field reverts to its default.
    pub fn reset_settings(&mut self) {
        self.time_greeting = StoredSettings::default();
    }

    /// Get the configured verbosity level, falling back to Normal if not set
    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_deref()
            .and_then(VerbosityLevel::parse)
            .unwrap_or(VerbosityLevel::Normal)
    }

    pub fn config_path() -> ConfigResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.trim().is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDirectory)?;
        path.push("time-greeting");
        path.push("config.toml");
        Ok(path)
    }
}

/// "morning_start" -> "Morning start"
fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_hour(field: &str, value: &str) -> ConfigResult<u32> {
    let hour: i64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })?;
    if !(0..=23).contains(&hour) {
        return Err(ConfigError::HourOutOfRange {
            label: field_label(field),
            value: hour,
        });
    }
    Ok(hour as u32)
}

fn validate_zone(zone: &str) -> ConfigResult<String> {
    match timezone::parse_zone(zone) {
        Some(_) => Ok(zone.to_string()),
        None => Err(ConfigError::UnknownTimezone {
            zone: zone.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
