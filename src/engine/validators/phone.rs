use crate::domain::{failure_message, PhoneFormat, PhoneOptions, ValidationResult};
use crate::utils::{clean_numeric, format_phone, is_blank, is_repeated_digit};

/// Validate a Brazilian phone number with area code: 10 digits for
/// landlines, 11 for mobiles.
#[must_use]
pub fn validate_phone(value: &str, options: &PhoneOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(custom, "Telefone é obrigatório"));
    }

    let cleaned = clean_numeric(value);

    if cleaned.len() != 10 && cleaned.len() != 11 {
        return ValidationResult::invalid_with(
            failure_message(custom, "Telefone deve ter 10 ou 11 dígitos"),
            cleaned,
        );
    }

    if is_repeated_digit(&cleaned) {
        return ValidationResult::invalid_with(
            failure_message(custom, "Telefone inválido"),
            cleaned,
        );
    }

    if !is_valid_ddd(&cleaned[..2]) {
        return ValidationResult::invalid_with(failure_message(custom, "DDD inválido"), cleaned);
    }

    // only `formatted` renders; `raw` and `international` keep the digits
    let value = match options.format {
        PhoneFormat::Formatted => format_phone(&cleaned),
        PhoneFormat::Raw | PhoneFormat::International => cleaned,
    };
    ValidationResult::valid("Telefone válido", value)
}

/// Area codes run from 11 to 99.
fn is_valid_ddd(ddd: &str) -> bool {
    ddd.parse::<u8>().is_ok_and(|n| (11..=99).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> ValidationResult {
        validate_phone(value, &PhoneOptions::default())
    }

    #[test]
    fn test_phone_mobile() {
        let result = check("(11) 98765-4321");
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Telefone válido"));
        assert_eq!(result.value.as_deref(), Some("(11) 98765-4321"));
    }

    #[test]
    fn test_phone_landline() {
        let result = check("2133334444");
        assert!(result.is_valid);
        assert_eq!(result.value.as_deref(), Some("(21) 3333-4444"));
    }

    #[test]
    fn test_phone_formats() {
        let raw = PhoneOptions {
            format: PhoneFormat::Raw,
            ..PhoneOptions::default()
        };
        assert_eq!(
            validate_phone("(11) 98765-4321", &raw).value.as_deref(),
            Some("11987654321")
        );

        let international = PhoneOptions {
            format: PhoneFormat::International,
            ..PhoneOptions::default()
        };
        assert_eq!(
            validate_phone("(11) 98765-4321", &international).value.as_deref(),
            Some("11987654321")
        );
    }

    #[test]
    fn test_phone_wrong_length() {
        for value in ["119876543", "119876543210"] {
            let result = check(value);
            assert!(!result.is_valid);
            assert_eq!(
                result.message.as_deref(),
                Some("Telefone deve ter 10 ou 11 dígitos")
            );
        }
    }

    #[test]
    fn test_phone_invalid_ddd() {
        for value in ["0198765432", "1098765432"] {
            let result = check(value);
            assert!(!result.is_valid);
            assert_eq!(result.message.as_deref(), Some("DDD inválido"));
        }
    }

    #[test]
    fn test_phone_repeated_digits_checked_before_ddd() {
        let result = check("0000000000");
        assert_eq!(result.message.as_deref(), Some("Telefone inválido"));
        let result = check("11111111111");
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Telefone inválido"));
    }

    #[test]
    fn test_phone_empty() {
        assert_eq!(check(" ").message.as_deref(), Some("Telefone é obrigatório"));
    }
}
