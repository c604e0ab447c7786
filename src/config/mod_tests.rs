// Unit tests for the settings record: defaults, partial records, write-time
// validation and file round trips.

use super::*;
use tempfile::TempDir;

#[test]
fn default_settings_match_documented_values() {
    let settings = Settings::default();

    assert_eq!(settings.morning_start, 5);
    assert_eq!(settings.afternoon_start, 12);
    assert_eq!(settings.evening_start, 17);
    assert_eq!(settings.night_start, 22);
    assert_eq!(settings.night_message, "It's {time} {tz} and we're asleep.");
    assert_eq!(settings.default_timezone, "America/New_York");
    assert_eq!(settings.default_tz_abbr, "ET");
}

#[test]
fn site_timezone_replaces_literal_default_zone() {
    let settings = Settings::from_stored(&StoredSettings::default(), Some("Europe/Paris"));
    assert_eq!(settings.default_timezone, "Europe/Paris");

    let settings = Settings::from_stored(&StoredSettings::default(), Some("   "));
    assert_eq!(settings.default_timezone, DEFAULT_SITE_TIMEZONE);
}

#[test]
fn partial_record_falls_back_field_by_field() {
    let config = AppConfig::from_toml(
        r#"
[time_greeting]
morning_start = 6
default_tz_abbr = "CT"
"#,
    )
    .unwrap();

    let settings = config.settings();
    assert_eq!(settings.morning_start, 6);
    assert_eq!(settings.afternoon_start, 12);
    assert_eq!(settings.night_start, 22);
    assert_eq!(settings.default_tz_abbr, "CT");
    assert_eq!(settings.night_message, DEFAULT_NIGHT_MESSAGE);
}

#[test]
fn badly_typed_fields_fall_back_without_losing_the_record() {
    let config = AppConfig::from_toml(
        r#"
[time_greeting]
morning_start = "6"
evening_start = -3
night_start = 21
night_message = "Closed {time}"
default_tz_abbr = 7
"#,
    )
    .unwrap();

    let settings = config.settings();
    assert_eq!(settings.morning_start, DEFAULT_MORNING_START);
    assert_eq!(settings.evening_start, DEFAULT_EVENING_START);
    assert_eq!(settings.night_start, 21);
    assert_eq!(settings.night_message, "Closed {time}");
    assert_eq!(settings.default_tz_abbr, DEFAULT_TZ_ABBR);
}

#[test]
fn stored_default_timezone_wins_over_site_timezone() {
    let config = AppConfig::from_toml(
        r#"
site_timezone = "Asia/Tokyo"

[time_greeting]
default_timezone = "America/Denver"
"#,
    )
    .unwrap();

    assert_eq!(config.settings().default_timezone, "America/Denver");
}

#[test]
fn empty_stored_values_are_kept() {
    let config = AppConfig::from_toml(
        r#"
[time_greeting]
default_tz_abbr = ""
"#,
    )
    .unwrap();

    assert_eq!(config.settings().default_tz_abbr, "");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.settings(), Settings::default());
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[time_greeting\nmorning_start = ").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidToml { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.set_value("night_start", "21").unwrap();
    config.set_value("default_timezone", "America/Chicago").unwrap();
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.settings().night_start, 21);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[time_greeting]"));
    assert!(!content.contains("morning_start"));
}

#[test]
fn hour_outside_range_is_rejected_with_label() {
    let mut config = AppConfig::default();

    let err = config.set_value("morning_start", "24").unwrap_err();
    assert_eq!(err.to_string(), "Morning start must be between 0 and 23.");

    let err = config.set_value("night_start", "-1").unwrap_err();
    assert_eq!(err.to_string(), "Night start must be between 0 and 23.");

    assert_eq!(config.time_greeting.morning_start, None);
}

#[test]
fn non_numeric_hour_is_rejected() {
    let mut config = AppConfig::default();
    let err = config.set_value("evening_start", "six").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn hour_boundaries_are_accepted() {
    let mut config = AppConfig::default();
    config.set_value("morning_start", "0").unwrap();
    config.set_value("night_start", " 23 ").unwrap();

    assert_eq!(config.settings().morning_start, 0);
    assert_eq!(config.settings().night_start, 23);
}

#[test]
fn unknown_timezone_is_rejected_at_write_time() {
    let mut config = AppConfig::default();
    let err = config.set_value("default_timezone", "Mars/Olympus").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTimezone { .. }));
    assert_eq!(config.time_greeting.default_timezone, None);
}

#[test]
fn text_values_are_sanitized_on_write() {
    let mut config = AppConfig::default();
    config.set_value("default_tz_abbr", "  <b>PT</b> ").unwrap();
    config
        .set_value("night_message", "Closed at {time}\n<script>x</script>{tz}")
        .unwrap();

    let settings = config.settings();
    assert_eq!(settings.default_tz_abbr, "PT");
    assert_eq!(settings.night_message, "Closed at {time}\n{tz}");
}

#[test]
fn unknown_key_is_rejected() {
    let mut config = AppConfig::default();
    let err = config.set_value("lunch_start", "12").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownConfigKey { .. }));
}

#[test]
fn verbosity_is_validated_and_parsed() {
    let mut config = AppConfig::default();
    assert_eq!(config.get_verbosity(), VerbosityLevel::Normal);

    config.set_value("verbosity", "debug").unwrap();
    assert_eq!(config.get_verbosity(), VerbosityLevel::Debug);

    assert!(config.set_value("verbosity", "shouty").is_err());
}

#[test]
fn reset_restores_defaults_but_keeps_host_values() {
    let mut config = AppConfig::default();
    config.set_value("site_timezone", "Europe/London").unwrap();
    config.set_value("morning_start", "7").unwrap();

    config.reset_settings();

    let settings = config.settings();
    assert_eq!(settings.morning_start, DEFAULT_MORNING_START);
    assert_eq!(settings.default_timezone, "Europe/London");
}

#[test]
fn every_listed_key_is_settable() {
    let samples = [
        ("morning_start", "5"),
        ("afternoon_start", "12"),
        ("evening_start", "17"),
        ("night_start", "22"),
        ("night_message", "{time} {tz}"),
        ("default_timezone", "UTC"),
        ("default_tz_abbr", "UTC"),
        ("site_timezone", "UTC"),
        ("verbosity", "quiet"),
    ];
    assert_eq!(samples.len(), SETTING_KEYS.len());

    let mut config = AppConfig::default();
    for (key, value) in samples {
        assert!(SETTING_KEYS.contains(&key));
        config.set_value(key, value).unwrap();
    }
}
