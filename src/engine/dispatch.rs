use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{DocumentKind, ValidationResult};
use crate::error::{CheckitError, Result};
use crate::engine::validators::{
    validate_cep, validate_cnpj, validate_cpf, validate_credit_card, validate_email,
    validate_phone,
};

/// Generic validation request: `{ "type": ..., "value": ..., "options": ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub options: serde_json::Value,
}

impl ValidationRequest {
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            options: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }
}

/// Options for one call. `null` gives the defaults and unknown keys are
/// ignored. A known key with the wrong type rejects the whole call, so a
/// restriction such as `allowedBrands` is never dropped silently.
///
/// # Errors
///
/// [`CheckitError::InvalidOptions`] when `options` does not fit `T`.
pub fn parse_options<T: DeserializeOwned + Default>(options: &serde_json::Value) -> Result<T> {
    if options.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(options.clone()).map_err(|e| {
        warn!("rejecting malformed validation options: {e}");
        CheckitError::InvalidOptions(e.to_string())
    })
}

/// Validate `value` as a document of `kind` with JSON-shaped options.
///
/// # Errors
///
/// [`CheckitError::InvalidOptions`] when the options are malformed.
pub fn validate_kind(
    kind: DocumentKind,
    value: &str,
    options: &serde_json::Value,
) -> Result<ValidationResult> {
    Ok(match kind {
        DocumentKind::Cpf => validate_cpf(value, &parse_options(options)?),
        DocumentKind::Cnpj => validate_cnpj(value, &parse_options(options)?),
        DocumentKind::Cep => validate_cep(value, &parse_options(options)?),
        DocumentKind::Email => validate_email(value, &parse_options(options)?),
        DocumentKind::Phone => validate_phone(value, &parse_options(options)?),
        DocumentKind::CreditCard => validate_credit_card(value, &parse_options(options)?),
    })
}

/// Route a generic request to its validator. An unknown type is a failed
/// validation, not an error.
///
/// # Errors
///
/// [`CheckitError::InvalidOptions`] when the options are malformed.
pub fn validate(request: &ValidationRequest) -> Result<ValidationResult> {
    match DocumentKind::from_wire(&request.kind) {
        Some(kind) => validate_kind(kind, &request.value, &request.options),
        None => Ok(ValidationResult::invalid(format!(
            "Tipo de validação '{}' não suportado",
            request.kind
        ))),
    }
}
