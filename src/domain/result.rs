use serde::{Deserialize, Serialize};

/// Outcome of a single validation call.
///
/// A failed validation is an ordinary value, never an error: `is_valid` is
/// `false` and `message` explains which gate rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: Some(message.into()),
            value: Some(value.into()),
        }
    }

    /// Success for an empty input accepted through `allowEmpty`.
    #[must_use]
    pub fn allowed_empty() -> Self {
        Self {
            is_valid: true,
            message: None,
            value: Some(String::new()),
        }
    }

    /// Failure without a value. Used for the "required" gate and for
    /// unsupported document types.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            value: None,
        }
    }

    /// Failure carrying the best-effort cleaned input.
    #[must_use]
    pub fn invalid_with(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            value: Some(value.into()),
        }
    }
}

/// Picks the caller's override when present and non-empty, the gate default
/// otherwise. Only failure sites call this; success messages are never
/// overridden.
#[must_use]
pub fn failure_message(custom: Option<&str>, default: &str) -> String {
    custom.filter(|m| !m.is_empty()).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_skips_none() {
        let json = serde_json::to_string(&ValidationResult::invalid("CPF é obrigatório")).unwrap();
        assert_eq!(json, r#"{"isValid":false,"message":"CPF é obrigatório"}"#);
    }

    #[test]
    fn test_allowed_empty_has_empty_value() {
        let result = ValidationResult::allowed_empty();
        assert!(result.is_valid);
        assert_eq!(result.value.as_deref(), Some(""));
        assert!(result.message.is_none());
    }

    #[test]
    fn test_failure_message_prefers_custom() {
        assert_eq!(failure_message(Some("custom"), "default"), "custom");
        assert_eq!(failure_message(None, "default"), "default");
    }

    #[test]
    fn test_empty_custom_message_uses_default() {
        assert_eq!(failure_message(Some(""), "default"), "default");
    }
}
