//! `<title>` extraction.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>(.*?)</title>").ok());

/// Extract the declared title of an HTML document.
///
/// Returns `None` when there is no title element or it is blank.
pub fn extract_title(html: &str) -> Option<String> {
    let pattern = TITLE_PATTERN.as_ref()?;
    let raw = pattern.captures(html)?.get(1)?.as_str();
    let title = decode_entities(raw.trim());
    if title.is_empty() { None } else { Some(title) }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
