use super::DateFormatError;
use chrono::{DateTime, Datelike, NaiveDate, Offset, Timelike};
use chrono_tz::{OffsetComponents, Tz};

/// Render `dt` with a PHP `date()` style pattern. Unknown characters are
/// copied through; `\x` emits `x` literally.
pub fn format_date(dt: &DateTime<Tz>, pattern: &str) -> Result<String, DateFormatError> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut directives = 0usize;
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(DateFormatError::DanglingEscape),
            }
            continue;
        }
        match directive(dt, c) {
            Some(text) => {
                directives += 1;
                out.push_str(&text);
            }
            None => out.push(c),
        }
    }

    if directives == 0 {
        return Err(DateFormatError::NoDirectives(pattern.to_string()));
    }
    Ok(out)
}

fn directive(dt: &DateTime<Tz>, c: char) -> Option<String> {
    let text = match c {
        // Day
        'd' => format!("{:02}", dt.day()),
        'D' => dt.format("%a").to_string(),
        'j' => dt.day().to_string(),
        'l' => dt.format("%A").to_string(),
        'N' => dt.weekday().number_from_monday().to_string(),
        'S' => ordinal_suffix(dt.day()).to_string(),
        'w' => dt.weekday().num_days_from_sunday().to_string(),
        'z' => dt.ordinal0().to_string(),
        // Week
        'W' => format!("{:02}", dt.iso_week().week()),
        // Month
        'F' => dt.format("%B").to_string(),
        'm' => format!("{:02}", dt.month()),
        'M' => dt.format("%b").to_string(),
        'n' => dt.month().to_string(),
        't' => days_in_month(dt.year(), dt.month()).to_string(),
        // Year
        'L' => u8::from(NaiveDate::from_ymd_opt(dt.year(), 2, 29).is_some()).to_string(),
        'o' => dt.iso_week().year().to_string(),
        'Y' => format!("{:04}", dt.year()),
        'y' => format!("{:02}", dt.year().rem_euclid(100)),
        // Time
        'a' => (if dt.hour() < 12 { "am" } else { "pm" }).to_string(),
        'A' => (if dt.hour() < 12 { "AM" } else { "PM" }).to_string(),
        'B' => swatch_beat(dt),
        'g' => dt.hour12().1.to_string(),
        'G' => dt.hour().to_string(),
        'h' => format!("{:02}", dt.hour12().1),
        'H' => format!("{:02}", dt.hour()),
        'i' => format!("{:02}", dt.minute()),
        's' => format!("{:02}", dt.second()),
        'u' => format!("{:06}", dt.timestamp_subsec_micros()),
        'v' => format!("{:03}", dt.timestamp_subsec_millis()),
        // Timezone
        'e' => dt.timezone().name().to_string(),
        'I' => u8::from(!dt.offset().dst_offset().is_zero()).to_string(),
        'O' => utc_offset(dt, false),
        'P' => utc_offset(dt, true),
        'p' => {
            if offset_seconds(dt) == 0 {
                "Z".to_string()
            } else {
                utc_offset(dt, true)
            }
        }
        'T' => dt.format("%Z").to_string(),
        'Z' => offset_seconds(dt).to_string(),
        // Full date/time
        'c' => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        'r' => dt.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
        'U' => dt.timestamp().to_string(),
        _ => return None,
    };
    Some(text)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

fn offset_seconds(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc()
}

fn utc_offset(dt: &DateTime<Tz>, colon: bool) -> String {
    let seconds = offset_seconds(dt);
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    if colon {
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    } else {
        format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
    }
}

/// Swatch Internet Time, measured from UTC+1.
fn swatch_beat(dt: &DateTime<Tz>) -> String {
    let seconds = (dt.timestamp() + 3600).rem_euclid(86_400);
    format!("{:03}", seconds * 10 / 864)
}
