//! Entry points a host calls to put a greeting on a page. Each one gathers
//! attributes its own way and hands them to `RenderRequest::from_attributes`.

mod block;
mod shortcode;

pub use block::{BLOCK_ATTRIBUTES, BLOCK_NAME, block_attributes, render_block};
pub use shortcode::{
    SHORTCODE_KEYS, SHORTCODE_TAG, expand_shortcodes, parse_shortcode_attributes,
    shortcode_attributes, shortcode_request,
};

use crate::config::Settings;
use crate::render::{Attributes, Display, RenderRequest};
use crate::resolver::GreetingResolver;
use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// Direct call. Accepts both `dateFormat`/`date_format` and `tzAbbr`/`tz_abbr`.
pub fn render_greeting(settings: &Settings, attributes: &Attributes, now: DateTime<Utc>) -> String {
    GreetingResolver::new(settings).resolve(RenderRequest::from_attributes(attributes), now)
}

/// Direct call that writes the fragment to `out`, for templates that print
/// rather than return.
pub fn echo_greeting<W: Write>(
    settings: &Settings,
    attributes: &Attributes,
    now: DateTime<Utc>,
    out: &mut W,
) -> io::Result<()> {
    out.write_all(render_greeting(settings, attributes, now).as_bytes())
}

/// What the settings page shows as the current greeting and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub greeting: String,
    pub date: String,
}

pub fn admin_preview(settings: &Settings, now: DateTime<Utc>) -> Preview {
    let resolver = GreetingResolver::new(settings);
    Preview {
        greeting: resolver.resolve(RenderRequest::default().with_display(Display::Greeting), now),
        date: resolver.resolve(RenderRequest::default().with_display(Display::Date), now),
    }
}
