use super::parse_instant;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Settings;
use crate::console::console;
use crate::render::Attributes;
use crate::surface::{BLOCK_NAME, admin_preview, expand_shortcodes, render_block, render_greeting};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use std::io::Read;

#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// greeting, date or both
    #[arg(long)]
    pub display: Option<String>,

    /// PHP-style date pattern, e.g. "F j, Y"
    #[arg(long)]
    pub date_format: Option<String>,

    /// Zone identifier overriding the stored default
    #[arg(long)]
    pub timezone: Option<String>,

    /// Abbreviation overriding the stored default
    #[arg(long)]
    pub tz_abbr: Option<String>,

    /// Render as of this instant instead of now
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,
}

impl RenderArgs {
    /// Shortcode-style attributes for the flags that were given.
    pub fn attributes(&self) -> Attributes {
        [
            ("display", &self.display),
            ("date_format", &self.date_format),
            ("timezone", &self.timezone),
            ("tz_abbr", &self.tz_abbr),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}

fn now_or(at: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match at {
        Some(instant) => FixedClock(instant).now(),
        None => SystemClock.now(),
    }
}

pub fn handle_render(settings: &Settings, args: &RenderArgs) -> Result<()> {
    let attributes = args.attributes();
    console().debug(&format!("Render attributes: {:?}", attributes));
    console().fragment(&render_greeting(settings, &attributes, now_or(args.at)));
    Ok(())
}

pub fn handle_shortcode(
    settings: &Settings,
    text: Option<String>,
    at: Option<DateTime<Utc>>,
) -> Result<()> {
    let content = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content from stdin")?;
            buffer
        }
    };
    console().fragment(&expand_shortcodes(settings, &content, now_or(at)));
    Ok(())
}

pub fn handle_block(settings: &Settings, json: &str, at: Option<DateTime<Utc>>) -> Result<()> {
    let attributes: serde_json::Value =
        serde_json::from_str(json).context("Block attributes must be valid JSON")?;
    console().debug(&format!("Rendering {} with {}", BLOCK_NAME, attributes));
    if !attributes.is_object() {
        console().warning("Block attributes are not a JSON object; using block defaults");
    }
    console().fragment(&render_block(settings, &attributes, now_or(at)));
    Ok(())
}

pub fn handle_preview(settings: &Settings, at: Option<DateTime<Utc>>) -> Result<()> {
    let preview = admin_preview(settings, now_or(at));
    console().heading("Current greeting:");
    console().fragment(&preview.greeting);
    console().newline();
    console().heading("Current date:");
    console().fragment(&preview.date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_flags_become_attributes() {
        let args = RenderArgs {
            display: Some("both".to_string()),
            tz_abbr: Some("CT".to_string()),
            ..RenderArgs::default()
        };
        let attributes = args.attributes();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("tz_abbr").map(String::as_str), Some("CT"));
        assert!(!attributes.contains_key("timezone"));
    }

    #[test]
    fn fixed_instant_is_used_when_given() {
        let instant = parse_instant("2024-01-15T14:30:00-06:00").unwrap();
        assert_eq!(now_or(Some(instant)), instant);
    }
}
