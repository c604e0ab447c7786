use crate::console::console;
use chrono_tz::{TZ_VARIANTS, Tz};

/// Zone used when neither the request nor the stored default names a known zone.
pub const FALLBACK_TIMEZONE: &str = "America/New_York";

const FALLBACK_TZ: Tz = Tz::America__New_York;

/// Abbreviations offered alongside the common zones in the block editor.
const SUGGESTED_ABBREVIATIONS: &[(&str, &str)] = &[
    ("America/New_York", "ET"),
    ("America/Chicago", "CT"),
    ("America/Denver", "MT"),
    ("America/Los_Angeles", "PT"),
    ("Europe/London", "GMT"),
    ("Europe/Paris", "CET"),
    ("Asia/Tokyo", "JST"),
    ("Australia/Sydney", "AEST"),
];

/// Which link of the fallback chain supplied the effective zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    Requested,
    StoredDefault,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveZone {
    pub tz: Tz,
    pub source: ZoneSource,
}

impl EffectiveZone {
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }
}

/// Parse an IANA zone identifier. Blank input is never a zone.
pub fn parse_zone(identifier: &str) -> Option<Tz> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    identifier.parse::<Tz>().ok()
}

/// Requested zone, then the stored default, then `FALLBACK_TIMEZONE`.
pub fn resolve_zone(requested: &str, stored_default: &str) -> EffectiveZone {
    if let Some(tz) = parse_zone(requested) {
        return EffectiveZone {
            tz,
            source: ZoneSource::Requested,
        };
    }
    if !requested.trim().is_empty() {
        console().debug(&format!(
            "Unknown timezone '{}', using stored default '{}'",
            requested, stored_default
        ));
    }

    if let Some(tz) = parse_zone(stored_default) {
        return EffectiveZone {
            tz,
            source: ZoneSource::StoredDefault,
        };
    }
    console().debug(&format!(
        "Stored default timezone '{}' is not usable, falling back to {}",
        stored_default, FALLBACK_TIMEZONE
    ));

    EffectiveZone {
        tz: FALLBACK_TZ,
        source: ZoneSource::Fallback,
    }
}

pub fn suggested_abbreviation(zone: &str) -> Option<&'static str> {
    SUGGESTED_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == zone)
        .map(|(_, abbr)| *abbr)
}

/// Every zone identifier known to the tz database, sorted.
pub fn zone_identifiers() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names
}
