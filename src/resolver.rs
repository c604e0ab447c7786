use crate::clock::Clock;
use crate::config::Settings;
use crate::console::console;
use crate::format::{effective_date_format, format_date};
use crate::greeting::greeting_text;
use crate::render::{
    DATE_UNAVAILABLE_FRAGMENT, Display, RenderRequest, date_fragment, greeting_fragment,
    today_fragment,
};
use crate::timezone::{EffectiveZone, resolve_zone};
use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use chrono_tz::Tz;

/// The current instant seen from the effective timezone.
#[derive(Debug, Clone)]
pub struct ResolvedInstant {
    pub zone: EffectiveZone,
    pub local: DateTime<Tz>,
}

impl ResolvedInstant {
    pub fn new(now: DateTime<Utc>, zone: EffectiveZone) -> Self {
        let local = now.with_timezone(&zone.tz);
        Self { zone, local }
    }

    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Full ISO-8601 instant with the zone's offset.
    pub fn iso_instant(&self) -> String {
        self.local.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// `YYYY-MM-DD` in the effective zone.
    pub fn iso_date(&self) -> String {
        self.local.format("%Y-%m-%d").to_string()
    }
}

/// Turns a settings snapshot, a request and an instant into a fragment.
/// Holds no state of its own; rendering never fails.
#[derive(Debug, Clone, Copy)]
pub struct GreetingResolver<'a> {
    settings: &'a Settings,
}

impl<'a> GreetingResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn resolve_now(&self, request: RenderRequest, clock: &dyn Clock) -> String {
        self.resolve(request, clock.now())
    }

    pub fn resolve(&self, request: RenderRequest, now: DateTime<Utc>) -> String {
        let settings = self.settings;
        let zone = resolve_zone(&request.timezone, &settings.default_timezone);
        let instant = ResolvedInstant::new(now, zone);
        let tz_abbr = if request.tz_abbr.is_empty() {
            settings.default_tz_abbr.as_str()
        } else {
            request.tz_abbr.as_str()
        };

        let mut output = String::new();

        if request.display.includes_greeting() {
            let greeting = greeting_text(settings, &instant.local, tz_abbr);
            output.push_str(&greeting_fragment(
                instant.zone.name(),
                &instant.iso_instant(),
                &greeting,
            ));
        }

        if request.display == Display::Both {
            output.push(' ');
        }

        if request.display.includes_date() {
            output.push_str(&self.date_part(&request, &instant));
        }

        output
    }

    fn date_part(&self, request: &RenderRequest, instant: &ResolvedInstant) -> String {
        let pattern = effective_date_format(&request.date_format);
        match format_date(&instant.local, &pattern) {
            Ok(date) if request.display == Display::Both => {
                today_fragment(&instant.iso_date(), &date)
            }
            Ok(date) => date_fragment(&instant.iso_date(), &date),
            Err(err) => {
                console().debug(&format!("Date unavailable: {}", err));
                DATE_UNAVAILABLE_FRAGMENT.to_string()
            }
        }
    }
}

/// Convenience wrapper around `GreetingResolver::resolve`.
pub fn resolve(settings: &Settings, request: RenderRequest, now: DateTime<Utc>) -> String {
    GreetingResolver::new(settings).resolve(request, now)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
