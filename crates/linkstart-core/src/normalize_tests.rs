use super::*;
use linkstart_protocols::Group;
use serde_json::json;

fn raw(value: serde_json::Value) -> Vec<RawEntry> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_legacy_string_defaults() {
    let entries = EntryNormalizer::default()
        .normalize(&raw(json!(["https://www.example.com/docs"])))
        .unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.url, "https://www.example.com/docs");
    assert_eq!(entry.title, "www.example.com");
    assert_eq!(
        entry.favicon,
        "https://www.google.com/s2/favicons?sz=64&domain=www.example.com"
    );
    assert_eq!(entry.group, Group::Current);
    assert!(!entry.pinned);
}

#[test]
fn test_record_keeps_given_fields() {
    let entries = EntryNormalizer::default()
        .normalize(&raw(json!([{
            "url": "https://news.example.org",
            "title": "News",
            "favicon": "https://news.example.org/icon.png",
            "group": 2,
            "pinned": true
        }])))
        .unwrap();

    let entry = &entries[0];
    assert_eq!(entry.title, "News");
    assert_eq!(entry.favicon, "https://news.example.org/icon.png");
    assert_eq!(entry.group, Group::Side);
    assert!(entry.pinned);
}

#[test]
fn test_record_empty_title_uses_host() {
    let entries = EntryNormalizer::default()
        .normalize(&raw(json!([{"url": "https://a.com", "title": "", "favicon": ""}])))
        .unwrap();
    assert_eq!(entries[0].title, "a.com");
    assert!(entries[0].favicon.ends_with("domain=a.com"));
}

#[test]
fn test_out_of_range_group_is_one() {
    let entries = EntryNormalizer::default()
        .normalize(&raw(json!([
            {"url": "https://a.com", "group": 0},
            {"url": "https://b.com", "group": 3},
            {"url": "https://c.com", "group": "2"},
            {"url": "https://d.com", "group": null},
            {"url": "https://e.com"}
        ])))
        .unwrap();
    assert!(entries.iter().all(|e| e.group == Group::Current));
}

#[test]
fn test_order_and_length_preserved() {
    let input = raw(json!([
        "https://1.com",
        {"url": "https://2.com", "group": 2},
        "https://3.com",
        {"url": "https://4.com"}
    ]));
    let entries = EntryNormalizer::default().normalize(&input).unwrap();
    let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["https://1.com", "https://2.com", "https://3.com", "https://4.com"]);
}

#[test]
fn test_invalid_url_fails_by_default() {
    let input = raw(json!(["https://ok.com", "not a url", "https://after.com"]));
    let result = EntryNormalizer::default().normalize(&input);
    assert!(matches!(result, Err(EntryError::InvalidUrl { .. })));
}

#[test]
fn test_invalid_url_skipped_with_skip_policy() {
    let normalizer = EntryNormalizer::new(
        linkstart_protocols::DEFAULT_FAVICON_TEMPLATE,
        InvalidEntryPolicy::Skip,
    );
    let input = raw(json!(["https://ok.com", "not a url", {"title": "no url"}, "https://after.com"]));
    let entries = normalizer.normalize(&input).unwrap();
    let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["https://ok.com", "https://after.com"]);
}

#[test]
fn test_custom_favicon_template() {
    let normalizer = EntryNormalizer::new("https://icons.local/{host}.ico", InvalidEntryPolicy::Fail);
    let entry = normalizer.normalize_one(&RawEntry::from("https://rust-lang.org")).unwrap();
    assert_eq!(entry.favicon, "https://icons.local/rust-lang.org.ico");
}

#[test]
fn test_url_kept_verbatim() {
    let entry = EntryNormalizer::default()
        .normalize_one(&RawEntry::from("https://a.com"))
        .unwrap();
    assert_eq!(entry.url, "https://a.com");
}
