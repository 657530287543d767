use serde_json::{Map, Value};
use tracing::warn;

/// Recover the first JSON object embedded anywhere in a model reply.
///
/// Models are asked to answer with JSON only, but that instruction is
/// advisory; replies routinely arrive wrapped in prose or markdown fences.
/// The scan is depth-balanced: it starts at the first `{` and ends at its
/// matching close brace, so braces inside string literals and trailing
/// commentary do not derail it. Any failure yields an empty map, never an
/// error.
pub fn extract_json(text: &str) -> Map<String, Value> {
    let Some(span) = first_object_span(text) else {
        return Map::new();
    };
    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(err) => {
            warn!(event = "extract_failed", error = %err, "model reply did not decode as JSON");
            Map::new()
        }
    }
}

fn first_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &byte) in text.as_bytes()[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_object_surrounded_by_prose() {
        let reply = "تفضل النتيجة:\n{\"flashcards\": [{\"question\": \"س\", \"answer\": \"ج\"}]}\nأتمنى أن تفيدك.";
        let map = extract_json(reply);
        assert_eq!(map["flashcards"][0]["question"], "س");
    }

    #[test]
    fn finds_object_inside_markdown_fence() {
        let reply = "```json\n{\"quiz\": {\"title\": \"اختبار\", \"questions\": []}}\n```";
        let map = extract_json(reply);
        assert_eq!(map["quiz"]["title"], "اختبار");
    }

    #[test]
    fn text_without_braces_yields_empty_map() {
        assert!(extract_json("لا يوجد أي JSON هنا").is_empty());
    }

    #[test]
    fn truncated_object_yields_empty_map() {
        assert!(extract_json("{\"quiz\": {\"title\": \"مقطوع\"").is_empty());
    }

    #[test]
    fn invalid_span_yields_empty_map() {
        assert!(extract_json("prefix {not json at all} suffix").is_empty());
    }

    #[test]
    fn first_balanced_object_wins() {
        let reply = "{\"first\": 1} junk {\"second\": 2}";
        let map = extract_json(reply);
        assert_eq!(map.get("first"), Some(&json!(1)));
        assert!(!map.contains_key("second"));
    }

    #[test]
    fn braces_inside_string_values_do_not_close_the_scan() {
        let reply = "note {\"a\": \"}{\", \"b\": {\"c\": \"x\\\"}\"}} tail";
        let map = extract_json(reply);
        assert_eq!(map["a"], "}{");
        assert_eq!(map["b"]["c"], "x\"}");
    }

    #[test]
    fn nested_objects_parse_whole() {
        let reply = "{\"mindmap\": {\"title\": \"ت\", \"branches\": [{\"name\": \"ف\", \"children\": []}]}}";
        let map = extract_json(reply);
        assert_eq!(map["mindmap"]["branches"][0]["name"], "ف");
    }
}
