use crate::config::Settings;
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

pub const TIME_PLACEHOLDER: &str = "{time}";
pub const TZ_PLACEHOLDER: &str = "{tz}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Period {
    /// First half-open range containing `hour` wins; anything outside the
    /// three daytime ranges is night. Boundaries are not required to be
    /// ordered.
    pub fn classify(hour: u32, settings: &Settings) -> Self {
        if hour >= settings.morning_start && hour < settings.afternoon_start {
            Period::Morning
        } else if hour >= settings.afternoon_start && hour < settings.evening_start {
            Period::Afternoon
        } else if hour >= settings.evening_start && hour < settings.night_start {
            Period::Evening
        } else {
            Period::Night
        }
    }

    /// Fixed greeting for the daytime periods; night uses the template.
    pub fn salutation(self) -> Option<&'static str> {
        match self {
            Period::Morning => Some("Good morning!"),
            Period::Afternoon => Some("Good afternoon!"),
            Period::Evening => Some("Good evening!"),
            Period::Night => None,
        }
    }
}

/// Greeting text for `local`, which must already be in the effective zone.
pub fn greeting_text(settings: &Settings, local: &DateTime<Tz>, tz_abbr: &str) -> String {
    match Period::classify(local.hour(), settings).salutation() {
        Some(text) => text.to_string(),
        None => render_night_message(&settings.night_message, &twelve_hour_clock(local), tz_abbr),
    }
}

/// "g:i A", e.g. `9:05 AM`.
pub fn twelve_hour_clock(local: &DateTime<Tz>) -> String {
    let (is_pm, hour) = local.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Replace every `{time}` and `{tz}` in one pass. Inserted values are never
/// scanned for placeholders themselves.
pub fn render_night_message(template: &str, clock: &str, tz_abbr: &str) -> String {
    let mut out = String::with_capacity(template.len() + clock.len() + tz_abbr.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(TIME_PLACEHOLDER) {
            out.push_str(clock);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(TZ_PLACEHOLDER) {
            out.push_str(tz_abbr);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
