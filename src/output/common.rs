//! Common utilities for output formatters

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty-print a raw JSON value from an API response
pub fn output_raw(raw: &serde_json::Value) {
    match serde_json::to_string_pretty(raw) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Extract a metric field from an opaque statistics payload as plain text
///
/// Statistics payloads carry mixed types ("completed" is a string,
/// "translated_entities" a number).
pub fn metric(payload: &serde_json::Value, key: &str) -> String {
    match payload.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_metric_string_field() {
        let payload = serde_json::json!({ "completed": "75%" });
        assert_eq!(metric(&payload, "completed"), "75%");
    }

    #[test]
    fn test_metric_numeric_field() {
        let payload = serde_json::json!({ "translated_entities": 30 });
        assert_eq!(metric(&payload, "translated_entities"), "30");
    }

    #[test]
    fn test_metric_missing_or_null_field() {
        let payload = serde_json::json!({ "completed": null });
        assert_eq!(metric(&payload, "completed"), "");
        assert_eq!(metric(&payload, "absent"), "");
    }
}
