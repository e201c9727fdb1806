use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{failure_message, EmailOptions, ValidationResult};
use crate::utils::is_blank;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Single-label domain: no subdomains.
static STRICT_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9]+\.[a-zA-Z]{2,}$").expect("strict email regex")
});

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;

/// Pattern for the given flags. `allow_international` dominates: with it set,
/// or with only `allow_subdomains` set, the permissive pattern applies. The
/// strict one is used only when both are off.
fn pattern_for(options: &EmailOptions) -> &'static Regex {
    if options.allow_international || options.allow_subdomains {
        &EMAIL_RE
    } else {
        &STRICT_EMAIL_RE
    }
}

/// Validate an e-mail address. The success value is trimmed and lowercased.
#[must_use]
pub fn validate_email(value: &str, options: &EmailOptions) -> ValidationResult {
    let custom = options.custom_message.as_deref();

    if is_blank(value) {
        if options.allow_empty {
            return ValidationResult::allowed_empty();
        }
        return ValidationResult::invalid(failure_message(custom, "E-mail é obrigatório"));
    }

    let trimmed = value.trim();

    if !pattern_for(options).is_match(trimmed) {
        return ValidationResult::invalid_with(failure_message(custom, "E-mail inválido"), trimmed);
    }

    // the pattern guarantees exactly one '@'
    let Some((local, domain)) = trimmed.split_once('@') else {
        return ValidationResult::invalid_with(failure_message(custom, "E-mail inválido"), trimmed);
    };

    if local.len() > MAX_LOCAL_LEN {
        return ValidationResult::invalid_with(
            failure_message(custom, "Parte local do e-mail muito longa"),
            trimmed,
        );
    }

    if domain.len() > MAX_DOMAIN_LEN {
        return ValidationResult::invalid_with(
            failure_message(custom, "Domínio do e-mail muito longo"),
            trimmed,
        );
    }

    if local.starts_with('.') || local.ends_with('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return ValidationResult::invalid_with(
            failure_message(custom, "E-mail não pode começar ou terminar com ponto"),
            trimmed,
        );
    }

    ValidationResult::valid("E-mail válido", trimmed.to_lowercase())
}
