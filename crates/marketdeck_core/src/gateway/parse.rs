//! Response decoding for model replies.
//!
//! Models asked for JSON sometimes wrap it in a Markdown fence; the fence is
//! stripped before decoding. Everything else must be valid JSON for `T`.

use crate::gateway::{GatewayError, GatewayResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

static JSON_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```(?:json|JSON)?\s*\n?(.*?)\n?\s*```\s*$").expect("valid fence regex")
});

/// Returns the fenced body when `text` is one fenced block, else `text` trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    match JSON_FENCE_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim(),
        None => text.trim(),
    }
}

pub fn parse_json<T: DeserializeOwned>(text: &str) -> GatewayResult<T> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    serde_json::from_str(body).map_err(|err| GatewayError::MalformedJson {
        message: err.to_string(),
    })
}

pub fn non_empty_text(text: String) -> GatewayResult<String> {
    if text.trim().is_empty() {
        Err(GatewayError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_json, strip_code_fence};
    use crate::gateway::GatewayError;

    #[test]
    fn fenced_and_bare_json_decode_the_same() {
        let fenced = "```json\n[\"a\", \"b\"]\n```";
        let bare = " [\"a\", \"b\"] ";
        assert_eq!(strip_code_fence(fenced), "[\"a\", \"b\"]");
        let a: Vec<String> = parse_json(fenced).unwrap();
        let b: Vec<String> = parse_json(bare).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn blank_reply_is_empty_response() {
        let err = parse_json::<Vec<String>>("   ").unwrap_err();
        assert_eq!(err, GatewayError::EmptyResponse);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let err = parse_json::<Vec<String>>("{\"a\":1}").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedJson { .. }));
    }
}
