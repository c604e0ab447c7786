use crate::cli::ConfigAction;
use crate::config::{AppConfig, SETTING_KEYS};
use crate::console::console;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_config(action: ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let settings = config.settings();

            console().plain(&format!("# {}", path.display()));
            if let Some(ref verbosity) = config.verbosity {
                console().key_value("verbosity", &format!("\"{}\"", verbosity));
            }
            if let Some(ref site_timezone) = config.site_timezone {
                console().key_value("site_timezone", &format!("\"{}\"", site_timezone));
            }
            console().newline();
            console().plain("[time_greeting]");
            console().key_value("morning_start", &settings.morning_start.to_string());
            console().key_value("afternoon_start", &settings.afternoon_start.to_string());
            console().key_value("evening_start", &settings.evening_start.to_string());
            console().key_value("night_start", &settings.night_start.to_string());
            console().key_value("night_message", &format!("{:?}", settings.night_message));
            console().key_value(
                "default_timezone",
                &format!("\"{}\"", settings.default_timezone),
            );
            console().key_value("default_tz_abbr", &format!("\"{}\"", settings.default_tz_abbr));

            if !(settings.morning_start <= settings.afternoon_start
                && settings.afternoon_start <= settings.evening_start
                && settings.evening_start <= settings.night_start)
            {
                console().warning(
                    "Period boundaries are out of order; earlier periods take precedence",
                );
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            if let Err(e) = config.set_value(&key, &value) {
                console().error(&e.to_string());
                if !SETTING_KEYS.contains(&key.as_str()) {
                    console().info(&format!("Available keys: {}", SETTING_KEYS.join(", ")));
                }
                return Ok(());
            }

            config
                .save_to(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            console().success("Configuration updated successfully");
        }
        ConfigAction::Reset => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            config.reset_settings();
            config
                .save_to(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            console().success("Greeting settings restored to defaults");
        }
    }
    Ok(())
}
