use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>")
        .expect("script/style regex is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n\f\v]+").expect("whitespace regex is valid"));

fn strip_tags(value: &str) -> String {
    let without_scripts = SCRIPT_OR_STYLE.replace_all(value, "");
    TAG.replace_all(&without_scripts, "").into_owned()
}

/// Single-line attribute or setting value: markup removed, control
/// characters dropped, whitespace collapsed, ends trimmed.
pub fn sanitize_text_field(value: &str) -> String {
    let stripped = strip_tags(value);
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Like `sanitize_text_field`, but line breaks survive.
pub fn sanitize_textarea_field(value: &str) -> String {
    let stripped = strip_tags(value);
    stripped
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_strips_markup_and_trims() {
        assert_eq!(sanitize_text_field("  <em>both</em>  "), "both");
        assert_eq!(sanitize_text_field("F j,\n\tY"), "F j, Y");
        assert_eq!(sanitize_text_field("CT<script>alert(1)</script>"), "CT");
        assert_eq!(sanitize_text_field("a\u{0000}b"), "ab");
    }

    #[test]
    fn textarea_field_keeps_line_breaks() {
        assert_eq!(
            sanitize_textarea_field("Closed.\r\nBack at {time} {tz}  \n"),
            "Closed.\nBack at {time} {tz}"
        );
        assert_eq!(
            sanitize_textarea_field("<style>p{}</style>{time}"),
            "{time}"
        );
    }
}
