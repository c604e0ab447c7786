use crate::config::Settings;
use crate::render::{Attributes, RenderRequest};
use crate::resolver::GreetingResolver;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const BLOCK_NAME: &str = "time-greeting-block/time-greeting";

/// Attributes the block registers, with their defaults.
pub const BLOCK_ATTRIBUTES: &[(&str, &str)] = &[
    ("display", "greeting"),
    ("dateFormat", "F j, Y"),
    ("timezone", ""),
    ("tzAbbr", ""),
];

/// Snake-case spellings accepted in place of the registered camelCase names.
const ATTRIBUTE_ALIASES: &[(&str, &str)] = &[("dateFormat", "date_format"), ("tzAbbr", "tz_abbr")];

fn alias_of(key: &str) -> Option<&'static str> {
    ATTRIBUTE_ALIASES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, alias)| *alias)
}

/// Flatten a block attribute object. Strings pass through, numbers and
/// booleans are stringified, everything else is ignored. `align` is accepted
/// by the editor but does not affect the server render.
pub fn block_attributes(value: &Value) -> Attributes {
    let mut attributes: Attributes = BLOCK_ATTRIBUTES
        .iter()
        .map(|(key, default)| (key.to_string(), default.to_string()))
        .collect();

    let Some(object) = value.as_object() else {
        return attributes;
    };

    for (key, _) in BLOCK_ATTRIBUTES {
        let found = object
            .get(*key)
            .or_else(|| alias_of(key).and_then(|alias| object.get(alias)));
        let text = match found {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => continue,
        };
        attributes.insert(key.to_string(), text);
    }
    attributes
}

/// Server-side render callback for the block.
pub fn render_block(settings: &Settings, attributes: &Value, now: DateTime<Utc>) -> String {
    let request = RenderRequest::from_attributes(&block_attributes(attributes));
    GreetingResolver::new(settings).resolve(request, now)
}
