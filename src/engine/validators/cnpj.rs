use crate::domain::{failure_message, DocumentFormat, DocumentOptions, ValidationResult};
use crate::engine::checksum::cnpj_checksum_matches;
use crate::utils::{clean_numeric, digits_of, format_cnpj, is_blank, is_repeated_digit};

pub const CNPJ_LEN: usize = 14;

/// Validate a Brazilian CNPJ (Cadastro Nacional da Pessoa Jurídica).
#[must_use]
pub fn validate_cnpj(value: &str, options: &DocumentOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(custom, "CNPJ é obrigatório"));
    }

    let cleaned = clean_numeric(value);

    if cleaned.len() != CNPJ_LEN {
        return ValidationResult::invalid_with(
            failure_message(custom, "CNPJ deve ter 14 dígitos"),
            cleaned,
        );
    }

    if is_repeated_digit(&cleaned) {
        return ValidationResult::invalid_with(failure_message(custom, "CNPJ inválido"), cleaned);
    }

    if !cnpj_checksum_matches(&digits_of(&cleaned)) {
        return ValidationResult::invalid_with(failure_message(custom, "CNPJ inválido"), cleaned);
    }

    let value = match options.format {
        DocumentFormat::Formatted => format_cnpj(&cleaned),
        DocumentFormat::Raw => cleaned,
    };
    ValidationResult::valid("CNPJ válido", value)
}
