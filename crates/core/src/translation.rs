use serde_json::Value;

/// Pull the translated text out of a FunTranslations response body
///
/// Expects a body shaped `{"contents": {"translated": "..."}}`. Field names
/// are matched case-insensitively, mirroring the tolerant parsing the API
/// consumers rely on. Returns `None` for malformed JSON, missing fields, or
/// an empty translated string.
pub fn extract_translated(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let contents = field_ignore_case(&value, "contents")?;
    let translated = field_ignore_case(contents, "translated")?;

    match translated.as_str() {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => None,
    }
}

fn field_ignore_case<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value
        .as_object()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}
