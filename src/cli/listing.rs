use crate::console::console;
use crate::format::DATE_FORMAT_PRESETS;
use crate::timezone::{suggested_abbreviation, zone_identifiers};
use anyhow::Result;

pub fn handle_timezones(filter: Option<&str>) -> Result<()> {
    let needle = filter.map(str::to_lowercase);
    let zones: Vec<&str> = zone_identifiers()
        .into_iter()
        .filter(|zone| match &needle {
            Some(needle) => zone.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    if zones.is_empty() {
        console().warning("No timezone identifiers match the filter");
        return Ok(());
    }

    for zone in zones {
        match suggested_abbreviation(zone) {
            Some(abbr) => console().plain(&format!("{} ({})", zone, abbr)),
            None => console().plain(zone),
        }
    }
    Ok(())
}

pub fn handle_formats() -> Result<()> {
    console().heading("Date formats:");
    for (pattern, example) in DATE_FORMAT_PRESETS {
        console().plain(&format!("  {:<12} {}", pattern, example));
    }
    console().newline();
    console().info("Any PHP date() pattern works; escape literal letters with a backslash.");
    Ok(())
}
