use crate::domain::{failure_message, CreditCardOptions, ValidationResult};
use crate::engine::brand::detect_brand;
use crate::utils::{clean_numeric, is_blank, is_repeated_digit, luhn_is_valid};

pub const MIN_CARD_LEN: usize = 13;
pub const MAX_CARD_LEN: usize = 19;

/// Validate a payment card number: brand prefix, brand length, optional
/// brand allow-list, then Luhn.
#[must_use]
pub fn validate_credit_card(value: &str, options: &CreditCardOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(
            custom,
            "Número do cartão é obrigatório",
        ));
    }

    let cleaned = clean_numeric(value);

    if !(MIN_CARD_LEN..=MAX_CARD_LEN).contains(&cleaned.len()) {
        return ValidationResult::invalid_with(
            failure_message(custom, "Número do cartão deve ter entre 13 e 19 dígitos"),
            cleaned,
        );
    }

    if is_repeated_digit(&cleaned) {
        return ValidationResult::invalid_with(
            failure_message(custom, "Número do cartão inválido"),
            cleaned,
        );
    }

    let Some(brand) = detect_brand(&cleaned) else {
        return ValidationResult::invalid_with(
            failure_message(custom, "Bandeira do cartão não reconhecida"),
            cleaned,
        );
    };

    if !brand.accepts_length(cleaned.len()) {
        let default = format!("Número de dígitos inválido para {}", brand.name);
        return ValidationResult::invalid_with(failure_message(custom, &default), cleaned);
    }

    if !options.allowed_brands.is_empty()
        && !options.allowed_brands.iter().any(|name| name == brand.name)
    {
        let default = format!("Bandeira {} não é aceita", brand.name);
        return ValidationResult::invalid_with(failure_message(custom, &default), cleaned);
    }

    if !luhn_is_valid(&cleaned) {
        return ValidationResult::invalid_with(
            failure_message(custom, "Número do cartão inválido"),
            cleaned,
        );
    }

    ValidationResult::valid(format!("Cartão {} válido", brand.name), cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> ValidationResult {
        validate_credit_card(value, &CreditCardOptions::default())
    }

    #[test]
    fn test_visa_valid() {
        let result = check("4111 1111 1111 1111");
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Cartão Visa válido"));
        assert_eq!(result.value.as_deref(), Some("4111111111111111"));
    }

    #[test]
    fn test_visa_bad_luhn() {
        let result = check("4111111111111112");
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Número do cartão inválido"));
    }

    #[test]
    fn test_known_test_numbers() {
        assert_eq!(
            check("5500000000000004").message.as_deref(),
            Some("Cartão Mastercard válido")
        );
        assert_eq!(
            check("378282246310005").message.as_deref(),
            Some("Cartão American Express válido")
        );
        assert_eq!(
            check("6011111111111117").message.as_deref(),
            Some("Cartão Discover válido")
        );
        assert_eq!(
            check("30569309025904").message.as_deref(),
            Some("Cartão Diners Club válido")
        );
    }

    #[test]
    fn test_length_out_of_range() {
        for value in ["411111111111", "41111111111111111111"] {
            let result = check(value);
            assert_eq!(
                result.message.as_deref(),
                Some("Número do cartão deve ter entre 13 e 19 dígitos")
            );
        }
    }

    #[test]
    fn test_repeated_digits() {
        let result = check("4444444444444444");
        assert_eq!(result.message.as_deref(), Some("Número do cartão inválido"));
    }

    #[test]
    fn test_unknown_brand_checked_before_length_and_luhn() {
        let result = check("9999999999999995");
        assert_eq!(
            result.message.as_deref(),
            Some("Bandeira do cartão não reconhecida")
        );
    }

    #[test]
    fn test_length_must_match_brand() {
        // 15 digits is a valid card length, but not for Visa
        let result = check("411111111111111");
        assert_eq!(
            result.message.as_deref(),
            Some("Número de dígitos inválido para Visa")
        );
    }

    #[test]
    fn test_allowed_brands() {
        let options = CreditCardOptions {
            allowed_brands: vec!["Mastercard".to_string()],
            ..CreditCardOptions::default()
        };
        let result = validate_credit_card("4111111111111111", &options);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Bandeira Visa não é aceita"));

        let options = CreditCardOptions {
            allowed_brands: vec!["Visa".to_string()],
            ..CreditCardOptions::default()
        };
        assert!(validate_credit_card("4111111111111111", &options).is_valid);
    }

    #[test]
    fn test_allow_empty_and_required() {
        assert_eq!(
            check("").message.as_deref(),
            Some("Número do cartão é obrigatório")
        );
        let options = CreditCardOptions {
            allow_empty: true,
            ..CreditCardOptions::default()
        };
        assert_eq!(validate_credit_card("", &options).value.as_deref(), Some(""));
    }

    #[test]
    fn test_custom_message_overrides_brand_failures() {
        let options = CreditCardOptions {
            custom_message: Some("Cartão recusado".to_string()),
            ..CreditCardOptions::default()
        };
        assert_eq!(
            validate_credit_card("411111111111111", &options).message.as_deref(),
            Some("Cartão recusado")
        );
        assert_eq!(
            validate_credit_card("4111111111111111", &options).message.as_deref(),
            Some("Cartão Visa válido")
        );
    }
}
