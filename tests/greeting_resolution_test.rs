use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::{Chicago, New_York};
use time_greeting::{
    Attributes, Display, FixedClock, GreetingResolver, RenderRequest, Settings, admin_preview,
    echo_greeting, expand_shortcodes, render_block, render_greeting, resolve,
};

fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn chicago_afternoon() -> DateTime<Utc> {
    Chicago
        .with_ymd_and_hms(2024, 1, 15, 14, 30, 0)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_chicago_both_scenario_through_every_surface() {
    let settings = Settings::default();
    let now = chicago_afternoon();
    let expected = concat!(
        r#"<span class="time-greeting" data-timezone="America/Chicago">"#,
        r#"<time datetime="2024-01-15T14:30:00-06:00">Good afternoon!</time></span> "#,
        r#"<span class="time-greeting-date">Today is <time datetime="2024-01-15">January 15, 2024</time>.</span>"#,
    );

    let direct = render_greeting(
        &settings,
        &attrs(&[("display", "both"), ("timezone", "America/Chicago"), ("tz_abbr", "CT")]),
        now,
    );
    let shortcode = expand_shortcodes(
        &settings,
        r#"[time_greeting display="both" timezone="America/Chicago" tz_abbr="CT"]"#,
        now,
    );
    let block = render_block(
        &settings,
        &serde_json::json!({"display": "both", "timezone": "America/Chicago", "tzAbbr": "CT"}),
        now,
    );

    assert_eq!(direct, expected);
    assert_eq!(shortcode, expected);
    assert_eq!(block, expected);
}

#[test]
fn test_night_scenario_in_default_zone() {
    let settings = Settings::default();
    let now = New_York
        .with_ymd_and_hms(2024, 1, 15, 23, 10, 0)
        .unwrap()
        .with_timezone(&Utc);

    let output = resolve(&settings, RenderRequest::default(), now);
    assert!(output.contains(">It's 11:10 PM ET and we're asleep.</time>"));
}

#[test]
fn test_custom_boundaries_and_template() {
    let settings = Settings {
        morning_start: 7,
        afternoon_start: 11,
        evening_start: 16,
        night_start: 20,
        night_message: "Office closed ({time}, {tz}). Back at 7.".to_string(),
        default_tz_abbr: "EST".to_string(),
        ..Settings::default()
    };
    let at = |hour| {
        New_York
            .with_ymd_and_hms(2024, 1, 15, hour, 5, 0)
            .unwrap()
            .with_timezone(&Utc)
    };

    assert!(resolve(&settings, RenderRequest::default(), at(6)).contains("Office closed (6:05 AM, EST)"));
    assert!(resolve(&settings, RenderRequest::default(), at(7)).contains("Good morning!"));
    assert!(resolve(&settings, RenderRequest::default(), at(11)).contains("Good afternoon!"));
    assert!(resolve(&settings, RenderRequest::default(), at(19)).contains("Good evening!"));
    assert!(resolve(&settings, RenderRequest::default(), at(20)).contains("Office closed (8:05 PM, EST)"));
}

#[test]
fn test_echo_matches_return_value() {
    let settings = Settings::default();
    let now = chicago_afternoon();
    let attributes = attrs(&[("display", "date"), ("date_format", "jS F")]);

    let mut buffer = Vec::new();
    echo_greeting(&settings, &attributes, now, &mut buffer).unwrap();
    let echoed = String::from_utf8(buffer).unwrap();

    assert_eq!(echoed, render_greeting(&settings, &attributes, now));
    assert!(echoed.contains(">15th January</time>"));
}

#[test]
fn test_parallel_renders_share_settings() {
    let settings = Settings::default();
    let resolver = GreetingResolver::new(&settings);
    let clock = FixedClock(chicago_afternoon());
    let request = RenderRequest {
        display: Display::Both,
        timezone: "America/Chicago".to_string(),
        ..RenderRequest::default()
    };
    let expected = resolver.resolve_now(request.clone(), &clock);

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let request = request.clone();
                let clock = &clock;
                scope.spawn(move || resolver.resolve_now(request, clock))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(outputs.iter().all(|output| *output == expected));
}

#[test]
fn test_admin_preview_uses_stored_zone() {
    let settings = Settings {
        default_timezone: "Asia/Tokyo".to_string(),
        default_tz_abbr: "JST".to_string(),
        ..Settings::default()
    };
    // 23:45 in Tokyo
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 14, 45, 0).unwrap();

    let preview = admin_preview(&settings, now);
    assert!(preview.greeting.contains(r#"data-timezone="Asia/Tokyo""#));
    assert!(preview.greeting.contains("It's 11:45 PM JST and we're asleep."));
    assert!(preview.date.contains(r#"<time datetime="2024-01-15">January 15, 2024</time>"#));
}
