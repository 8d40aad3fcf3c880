use localekit::{LocaleData, Locales};

const PACK_JSON: &str = r#"[
    {
        "name": "English",
        "code": "en",
        "dir": "ltr",
        "flag": "<svg width=\"10\" height=\"20\"></svg>"
    },
    {
        "name": "العربية",
        "code": "ar",
        "dir": "rtl",
        "flag": "<svg></svg>"
    }
]"#;

#[test]
fn locale_records_use_plain_field_names() {
    let entries: Vec<LocaleData> = serde_json::from_str(PACK_JSON).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "English");
    assert_eq!(entries[0].code, "en");
    assert_eq!(entries[0].dir, "ltr");
    assert_eq!(entries[1].name, "العربية");
}

#[test]
fn locale_records_round_trip_through_json() {
    let entries: Vec<LocaleData> = serde_json::from_str(PACK_JSON).unwrap();
    let encoded = serde_json::to_string(&entries).unwrap();
    let decoded: Vec<LocaleData> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(entries, decoded);
}

#[test]
fn json_loading_matches_direct_construction() {
    let entries: Vec<LocaleData> = serde_json::from_str(PACK_JSON).unwrap();
    let from_records = Locales::new(entries, Some("ar")).unwrap();
    let from_json = Locales::from_json(PACK_JSON, Some("ar")).unwrap();

    assert_eq!(from_json.current().code(), from_records.current().code());
    let json_codes: Vec<&str> = from_json.locales().iter().map(|l| l.code()).collect();
    let record_codes: Vec<&str> = from_records.locales().iter().map(|l| l.code()).collect();
    assert_eq!(json_codes, record_codes);
}

#[test]
fn flags_render_at_requested_dimensions_after_loading() {
    let registry = Locales::from_json(PACK_JSON, None).unwrap();

    let en = registry.get_by_code("en").expect("en is in the pack");
    assert_eq!(en.svg_flag(48.0, 32.0), r#"<svg width="48" height="32"></svg>"#);

    // No dimension attributes to rewrite on this one.
    let ar = registry.get_by_code("ar").expect("ar is in the pack");
    assert_eq!(ar.svg_flag(48.0, 32.0), "<svg></svg>");
}
