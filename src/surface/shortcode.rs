use crate::config::Settings;
use crate::render::{Attributes, RenderRequest};
use crate::resolver::GreetingResolver;
use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

pub const SHORTCODE_TAG: &str = "time_greeting";

/// Attribute names the shortcode understands; anything else is dropped.
pub const SHORTCODE_KEYS: &[&str] = &["display", "date_format", "timezone", "tz_abbr"];

// Groups: 1 = extra opening bracket, 2 = attribute text, 3 = extra closing bracket.
static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[(\[?){}(\s[^\]]*)?\](\]?)", SHORTCODE_TAG))
        .expect("shortcode regex is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s'"]+))"#)
        .expect("shortcode attribute regex is valid")
});

/// Parse `key="value" key='value' key=value` pairs. Keys are lowercased.
pub fn parse_shortcode_attributes(text: &str) -> Attributes {
    let text = text.trim().trim_end_matches('/');
    ATTRIBUTE
        .captures_iter(text)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().to_lowercase();
            let value = caps.get(2).or(caps.get(3)).or(caps.get(4))?.as_str();
            Some((key, value.to_string()))
        })
        .collect()
}

/// Keep only the attributes the shortcode declares.
pub fn shortcode_attributes(attributes: &Attributes) -> Attributes {
    attributes
        .iter()
        .filter(|(key, _)| SHORTCODE_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn shortcode_request(attributes: &Attributes) -> RenderRequest {
    RenderRequest::from_attributes(&shortcode_attributes(attributes))
}

/// Replace every `[time_greeting ...]` tag in `content` with its fragment.
/// `[[time_greeting]]` is left as the literal `[time_greeting]`.
pub fn expand_shortcodes<'c>(
    settings: &Settings,
    content: &'c str,
    now: DateTime<Utc>,
) -> Cow<'c, str> {
    let resolver = GreetingResolver::new(settings);
    SHORTCODE.replace_all(content, |caps: &Captures| {
        let whole = &caps[0];
        let opened = !caps[1].is_empty();
        let closed = !caps[3].is_empty();
        if opened && closed {
            return whole[1..whole.len() - 1].to_string();
        }

        let attributes =
            parse_shortcode_attributes(caps.get(2).map(|m| m.as_str()).unwrap_or_default());
        let fragment = resolver.resolve(shortcode_request(&attributes), now);

        // An unmatched extra bracket stays in the text around the fragment.
        format!(
            "{}{}{}",
            if opened { "[" } else { "" },
            fragment,
            if closed { "]" } else { "" }
        )
    })
}
