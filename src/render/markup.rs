use super::escape::{escape_attr, escape_html};

pub const GREETING_CLASS: &str = "time-greeting";
pub const DATE_CLASS: &str = "time-greeting-date";
pub const TODAY_LEAD_IN: &str = "Today is";

/// Emitted in place of a date that could not be formatted.
pub const DATE_UNAVAILABLE_FRAGMENT: &str =
    r#"<span class="time-greeting-date time-greeting-unavailable">Date unavailable</span>"#;

pub fn greeting_fragment(zone: &str, iso_instant: &str, greeting: &str) -> String {
    format!(
        r#"<span class="{}" data-timezone="{}"><time datetime="{}">{}</time></span>"#,
        GREETING_CLASS,
        escape_attr(zone),
        escape_attr(iso_instant),
        escape_html(greeting)
    )
}

pub fn date_fragment(iso_date: &str, date: &str) -> String {
    format!(
        r#"<span class="{}"><time datetime="{}">{}</time></span>"#,
        DATE_CLASS,
        escape_attr(iso_date),
        escape_html(date)
    )
}

/// Date fragment used after a greeting: "Today is <date>."
pub fn today_fragment(iso_date: &str, date: &str) -> String {
    format!(
        r#"<span class="{}">{} <time datetime="{}">{}</time>.</span>"#,
        DATE_CLASS,
        escape_html(TODAY_LEAD_IN),
        escape_attr(iso_date),
        escape_html(date)
    )
}
