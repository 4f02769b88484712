use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;

lazy_static! {
    /// Markdown code fence, with or without a `json` language tag
    static ref CODE_FENCE_RE: Regex = Regex::new(r"```(?:json)?").unwrap();
}

/// Remove markdown code fences that models like to wrap JSON in
///
/// Example: "```json\n{\"a\": 1}\n```" -> "{\"a\": 1}"
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Parse a completion as JSON after stripping code fences
///
/// No repair is attempted: anything that is not valid JSON for `T` is an
/// error, and the caller decides on the fallback.
pub fn parse_json_reply<T>(text: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    let cleaned = strip_code_fences(text);

    tracing::debug!(
        "Parsing LLM reply (first 200 chars): {}",
        cleaned.chars().take(200).collect::<String>()
    );

    serde_json::from_str(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        label: String,
    }

    // ==================== strip_code_fences tests ====================

    #[test]
    fn test_strip_json_code_block() {
        let text = "```json\n{\"label\": \"x\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"label\": \"x\"}");
    }

    #[test]
    fn test_strip_generic_code_block() {
        let text = "```\n{\"label\": \"x\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"label\": \"x\"}");
    }

    #[test]
    fn test_strip_plain_json_untouched() {
        let text = "  {\"label\": \"x\"}\n";
        assert_eq!(strip_code_fences(text), "{\"label\": \"x\"}");
    }

    // ==================== parse_json_reply tests ====================

    #[test]
    fn test_parse_fenced_reply() {
        let reply: Reply = parse_json_reply("```json\n{\"label\": \"billing\"}\n```").unwrap();
        assert_eq!(
            reply,
            Reply {
                label: "billing".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_prose() {
        let result = parse_json_reply::<Reply>("I think this is a billing issue.");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_comma() {
        let result = parse_json_reply::<Reply>(r#"{"label": "x",}"#);
        assert!(result.is_err());
    }
}
