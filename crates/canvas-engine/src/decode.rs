//! JSON decoding of sanitized model replies.

use canvas_core::{CanvasError, CanvasResult, CANVAS_SECTIONS};
use serde_json::Value;

/// Parses `sanitized` as a JSON object.
///
/// On failure the error carries `raw`, the reply as the model sent it, so
/// callers can report what the model actually produced.
pub fn decode(raw: &str, sanitized: &str) -> Result<CanvasResult, CanvasError> {
    match serde_json::from_str::<Value>(sanitized) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CanvasError::parse(
            raw,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(CanvasError::parse(raw, e)),
    }
}

/// Returns the expected sections absent from `canvas`, in canvas order.
pub fn missing_sections(canvas: &CanvasResult) -> Vec<&'static str> {
    CANVAS_SECTIONS
        .iter()
        .copied()
        .filter(|section| !canvas.contains_key(*section))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_canvas() -> Value {
        let mut map = serde_json::Map::new();
        for section in CANVAS_SECTIONS {
            map.insert(section.to_string(), json!(["one", "two", "three"]));
        }
        Value::Object(map)
    }

    #[test]
    fn decodes_object_with_all_sections_unchanged() {
        let expected = full_canvas();
        let text = expected.to_string();
        let canvas = decode(&text, &text).unwrap();

        assert_eq!(Value::Object(canvas.clone()), expected);
        assert!(missing_sections(&canvas).is_empty());
    }

    #[test]
    fn passes_through_unexpected_shapes() {
        let text = r#"{"Problem": "just a string", "Extra": 7}"#;
        let canvas = decode(text, text).unwrap();

        assert_eq!(canvas["Problem"], json!("just a string"));
        assert_eq!(canvas["Extra"], json!(7));
    }

    #[test]
    fn malformed_json_keeps_raw_not_sanitized() {
        let raw = "```json\n{\"Problem\": [\n```";
        let err = decode(raw, "{\"Problem\": [").unwrap_err();

        match err {
            CanvasError::ParseError { raw: kept, .. } => assert_eq!(kept, raw),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_json_is_a_parse_error() {
        let err = decode("[1, 2]", "[1, 2]").unwrap_err();
        match err {
            CanvasError::ParseError { raw, reason } => {
                assert_eq!(raw, "[1, 2]");
                assert!(reason.contains("an array"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_text_is_a_parse_error() {
        assert!(matches!(decode("```json", ""), Err(CanvasError::ParseError { .. })));
    }

    #[test]
    fn reports_missing_sections_in_order() {
        let text = r#"{"Solution": [], "Problem": [], "Cost Structure": []}"#;
        let canvas = decode(text, text).unwrap();

        assert_eq!(
            missing_sections(&canvas),
            vec![
                "Unique Value Propositions",
                "Key Metrics",
                "Unfair Advantage",
                "Distribution Channels",
                "Customer Agents",
                "Revenue Streams",
                "Technical Overview",
            ]
        );
    }
}
