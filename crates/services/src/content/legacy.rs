use serde_json::Value;

fn is_blank(raw: &Value, section: &str, key: &str) -> bool {
    raw.get(section)
        .and_then(|s| s.get(key))
        .and_then(Value::as_str)
        .is_none_or(|s| s.trim().is_empty())
}

fn image_count(raw: &Value, section: &str) -> usize {
    raw.get(section)
        .and_then(|s| s.get("images"))
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Recognizes drafts saved by the old empty-seed logic: no names, no date
/// labels and at most one hero and one gallery image. Such drafts get
/// re-seeded from the template on next load.
pub fn is_legacy_empty_content(raw: &Value) -> bool {
    is_blank(raw, "couple", "groomName")
        && is_blank(raw, "couple", "brideName")
        && is_blank(raw, "wedding", "dateLabel")
        && is_blank(raw, "wedding", "headerLabel")
        && image_count(raw, "heroSection") <= 1
        && image_count(raw, "gallerySection") <= 1
}
