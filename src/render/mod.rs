//! Request model shared by every invocation surface, plus the markup and
//! escaping used to build fragments.

mod escape;
mod markup;
mod sanitize;

pub use escape::{escape_attr, escape_html};
pub use markup::{
    DATE_CLASS, DATE_UNAVAILABLE_FRAGMENT, GREETING_CLASS, TODAY_LEAD_IN, date_fragment,
    greeting_fragment, today_fragment,
};
pub use sanitize::{sanitize_text_field, sanitize_textarea_field};

use crate::format::DEFAULT_DATE_FORMAT;
use indexmap::IndexMap;
use std::fmt;

/// Caller-supplied attributes in the order they were given.
pub type Attributes = IndexMap<String, String>;

/// What a fragment shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Greeting,
    Date,
    Both,
}

impl Display {
    /// Unknown values render as a greeting.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "date" => Display::Date,
            "both" => Display::Both,
            _ => Display::Greeting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Display::Greeting => "greeting",
            Display::Date => "date",
            Display::Both => "both",
        }
    }

    pub fn includes_greeting(self) -> bool {
        matches!(self, Display::Greeting | Display::Both)
    }

    pub fn includes_date(self) -> bool {
        matches!(self, Display::Date | Display::Both)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub display: Display,
    pub date_format: String,
    /// Empty means "use the stored default".
    pub timezone: String,
    /// Empty means "use the stored default".
    pub tz_abbr: String,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            display: Display::Greeting,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: String::new(),
            tz_abbr: String::new(),
        }
    }
}

impl RenderRequest {
    /// Normalize attributes from any surface. Accepts both the block's
    /// camelCase names and the shortcode's snake_case names; camelCase wins
    /// when both are present.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let defaults = Self::default();
        let lookup = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .find_map(|key| attributes.get(*key))
                .map(|value| sanitize_text_field(value))
        };

        Self {
            display: lookup(&["display"])
                .map(|value| Display::parse(&value))
                .unwrap_or(defaults.display),
            date_format: lookup(&["dateFormat", "date_format"]).unwrap_or(defaults.date_format),
            timezone: lookup(&["timezone"]).unwrap_or(defaults.timezone),
            tz_abbr: lookup(&["tzAbbr", "tz_abbr"]).unwrap_or(defaults.tz_abbr),
        }
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }
}
