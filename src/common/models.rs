// Wire types for the /crew endpoint
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /crew`. The address is sent verbatim, empty strings included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrewRequest {
    pub address: String,
}

impl CrewRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }
}

/// Indented rendering used for the response block.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_address_field() {
        let body = serde_json::to_string(&CrewRequest::new("123 Main St")).unwrap();
        assert_eq!(body, r#"{"address":"123 Main St"}"#);
    }

    #[test]
    fn empty_address_is_still_sent() {
        let body = serde_json::to_string(&CrewRequest::new("")).unwrap();
        assert_eq!(body, r#"{"address":""}"#);
    }

    #[test]
    fn pretty_uses_two_space_indent() {
        let value = serde_json::json!({"crew": ["a", "b"]});
        assert_eq!(pretty(&value), "{\n  \"crew\": [\n    \"a\",\n    \"b\"\n  ]\n}");
    }
}
