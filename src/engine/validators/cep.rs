use crate::domain::{failure_message, DocumentFormat, DocumentOptions, ValidationResult};
use crate::utils::{clean_numeric, format_cep, is_blank, is_repeated_digit};

pub const CEP_LEN: usize = 8;

/// Validate a Brazilian postal code. CEPs carry no check digit, so only the
/// length and degenerate-value gates apply.
#[must_use]
pub fn validate_cep(value: &str, options: &DocumentOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(custom, "CEP é obrigatório"));
    }

    let cleaned = clean_numeric(value);

    if cleaned.len() != CEP_LEN {
        return ValidationResult::invalid_with(
            failure_message(custom, "CEP deve ter 8 dígitos"),
            cleaned,
        );
    }

    if is_repeated_digit(&cleaned) {
        return ValidationResult::invalid_with(failure_message(custom, "CEP inválido"), cleaned);
    }

    let value = match options.format {
        DocumentFormat::Formatted => format_cep(&cleaned),
        DocumentFormat::Raw => cleaned,
    };
    ValidationResult::valid("CEP válido", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> ValidationResult {
        validate_cep(value, &DocumentOptions::default())
    }

    #[test]
    fn test_cep_valid() {
        let result = check("01310-100");
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("CEP válido"));
        assert_eq!(result.value.as_deref(), Some("01310-100"));
        assert_eq!(check("01310100").value.as_deref(), Some("01310-100"));
    }

    #[test]
    fn test_cep_wrong_length() {
        for value in ["0131010", "013101001"] {
            let result = check(value);
            assert!(!result.is_valid);
            assert_eq!(result.message.as_deref(), Some("CEP deve ter 8 dígitos"));
            assert_eq!(result.value.as_deref(), Some(value));
        }
    }

    #[test]
    fn test_cep_repeated() {
        let result = check("00000-000");
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("CEP inválido"));
        assert_eq!(result.value.as_deref(), Some("00000000"));
    }

    #[test]
    fn test_cep_empty() {
        assert_eq!(check("").message.as_deref(), Some("CEP é obrigatório"));
    }
}
