/// Collapse whitespace, strip zero-width characters, and lowercase so that
/// dedup keys survive copy/paste artifacts in the source spreadsheet.
pub(crate) fn normalize_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// URL dedup key: normalized text without a trailing slash.
pub(crate) fn normalize_url(value: &str) -> String {
    normalize_key(value).trim_end_matches('/').to_string()
}
