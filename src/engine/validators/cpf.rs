use crate::domain::{failure_message, DocumentFormat, DocumentOptions, ValidationResult};
use crate::engine::checksum::cpf_checksum_matches;
use crate::utils::{clean_numeric, digits_of, format_cpf, is_blank, is_repeated_digit};

pub const CPF_LEN: usize = 11;

/// Validate a Brazilian CPF (Cadastro de Pessoas Físicas).
#[must_use]
pub fn validate_cpf(value: &str, options: &DocumentOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(custom, "CPF é obrigatório"));
    }

    let cleaned = clean_numeric(value);

    if cleaned.len() != CPF_LEN {
        return ValidationResult::invalid_with(
            failure_message(custom, "CPF deve ter 11 dígitos"),
            cleaned,
        );
    }

    // 111.111.111-11 passes Módulo 11, so this gate comes first
    if is_repeated_digit(&cleaned) {
        return ValidationResult::invalid_with(failure_message(custom, "CPF inválido"), cleaned);
    }

    if !cpf_checksum_matches(&digits_of(&cleaned)) {
        return ValidationResult::invalid_with(failure_message(custom, "CPF inválido"), cleaned);
    }

    let value = match options.format {
        DocumentFormat::Formatted => format_cpf(&cleaned),
        DocumentFormat::Raw => cleaned,
    };
    ValidationResult::valid("CPF válido", value)
}
