mod php_date;

pub use php_date::format_date;

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern used when a request supplies none, or sanitization empties it.
pub const DEFAULT_DATE_FORMAT: &str = "F j, Y";

/// Patterns offered by the block editor's date format picker.
pub const DATE_FORMAT_PRESETS: &[(&str, &str)] = &[
    ("F j, Y", "January 1, 2024"),
    ("M j, Y", "Jan 1, 2024"),
    ("n/j/Y", "1/1/2024"),
    ("m/d/Y", "01/01/2024"),
    ("Y-m-d", "2024-01-01"),
    ("l, F j, Y", "Monday, January 1, 2024"),
];

static UNSAFE_FORMAT_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9\s\-/\\:,.]").expect("date format allow-list regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("date format ends with an unfinished escape")]
    DanglingEscape,

    #[error("date format '{0}' contains no date or time directives")]
    NoDirectives(String),
}

/// Strip every character outside letters, digits, whitespace and `- / \ : , .`.
pub fn sanitize_date_format(pattern: &str) -> String {
    UNSAFE_FORMAT_CHARS.replace_all(pattern, "").into_owned()
}

/// Sanitized pattern, or `DEFAULT_DATE_FORMAT` when nothing usable is left.
pub fn effective_date_format(pattern: &str) -> Cow<'static, str> {
    let sanitized = sanitize_date_format(pattern);
    if sanitized.trim().is_empty() {
        Cow::Borrowed(DEFAULT_DATE_FORMAT)
    } else {
        Cow::Owned(sanitized)
    }
}
