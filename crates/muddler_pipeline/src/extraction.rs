//! Utilities for extracting structured data from generation responses.
//!
//! Backend responses often wrap JSON in markdown code fences or surround it
//! with explanatory prose. This module recovers the JSON payload without
//! ever failing: when no candidate is found the input passes through
//! unchanged so the downstream parse produces the clear syntax error.

/// Extract the JSON object substring from a response.
///
/// Strategies, in priority order:
/// 1. A triple-backtick fenced block (optionally tagged `json`): the trimmed
///    content between the first fence pair.
/// 2. The trimmed substring from the first `{` to the last `}` (handles
///    prose wrapped around bare JSON).
/// 3. The trimmed input unchanged. This is deliberate: the caller's JSON
///    parse then fails with a clear syntax error instead of silently losing
///    data here.
///
/// No semantic validation is performed.
///
/// # Examples
///
/// ```
/// use muddler_pipeline::extract_json;
///
/// let response = "Here's the recipe:\n\
///     \n\
///     ```json\n\
///     {\"name\": \"Mojito\"}\n\
///     ```\n";
///
/// assert_eq!(extract_json(response), "{\"name\": \"Mojito\"}");
/// ```
pub fn extract_json(response: &str) -> String {
    if let Some(content) = extract_from_code_block(response) {
        return content;
    }

    if let Some(content) = extract_braced(response) {
        return content;
    }

    tracing::debug!(
        response_length = response.len(),
        "No fenced block or braces found; passing response through"
    );
    response.trim().to_string()
}

/// Extract content from the first complete markdown code fence pair.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences. A lone
/// opening fence with no closing partner does not count as a pair.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let mut content_start = start + 3;

    // Skip an optional `json` language tag directly after the fence.
    if response[content_start..].starts_with("json") {
        content_start += 4;
    }

    let end = response[content_start..].find("```")?;
    Some(response[content_start..content_start + end].trim().to_string())
}

/// Extract the substring spanning the first `{` and the last `}`.
fn extract_braced(response: &str) -> Option<String> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }
    Some(response[start..=end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_code_block() {
        let response = r#"
Here's the recipe you requested:

```json
{
  "name": "Sunrise",
  "steps": ["Shake"]
}
```

Hope this helps!
"#;
        let json = extract_json(response);
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("\"name\": \"Sunrise\""));
    }

    #[test]
    fn extracts_from_bare_code_block() {
        let response = "```\n{\"name\": \"Negroni\"}\n```";
        assert_eq!(extract_json(response), "{\"name\": \"Negroni\"}");
    }

    #[test]
    fn extracts_braced_span_from_prose() {
        let response = r#"Sure! Here it is: {"name": "Spritz", "nested": {"value": 1}} Enjoy."#;
        let json = extract_json(response);
        assert_eq!(json, r#"{"name": "Spritz", "nested": {"value": 1}}"#);
    }

    #[test]
    fn raw_json_passes_through_trimmed() {
        let response = "  {\"name\": \"Daiquiri\"}  ";
        assert_eq!(extract_json(response), "{\"name\": \"Daiquiri\"}");
    }

    #[test]
    fn no_json_returns_input_unchanged() {
        assert_eq!(extract_json("no json here"), "no json here");
    }

    #[test]
    fn unclosed_fence_falls_back_to_braces() {
        let response = "```json\n{\"name\": \"Old Fashioned\"}";
        assert_eq!(extract_json(response), "{\"name\": \"Old Fashioned\"}");
    }

    #[test]
    fn round_trips_embedded_objects() {
        let original = serde_json::json!({"name": "Paloma", "ingredients": [{"name": "Tequila", "amount": "50 ml"}]});
        let text = serde_json::to_string_pretty(&original).unwrap();

        for wrapped in [
            text.clone(),
            format!("```json\n{}\n```", text),
            format!("```\n{}\n```", text),
            format!("Here you go:\n{}\nCheers!", text),
        ] {
            let extracted = extract_json(&wrapped);
            let reparsed: serde_json::Value = serde_json::from_str(&extracted).unwrap();
            assert_eq!(reparsed, original);
        }
    }
}
