//! Validation and generation of Brazilian identifiers: CPF, CNPJ, CEP,
//! phone numbers, e-mail addresses and credit cards.
//!
//! Validators never fail. Every outcome, including malformed input, is a
//! [`ValidationResult`] carrying a pt-BR message and, on success, the
//! normalized value.
//!
//! # Example
//! ```
//! use checkit::{validate_cpf, DocumentOptions};
//!
//! let result = validate_cpf("123.456.789-09", &DocumentOptions::default());
//! assert!(result.is_valid);
//! assert_eq!(result.message.as_deref(), Some("CPF válido"));
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod server;
pub mod utils;

pub use config::CheckitConfig;
pub use domain::{
    CreditCardOptions, DocumentFormat, DocumentKind, DocumentOptions, EmailOptions, PhoneFormat,
    PhoneOptions, ValidationResult,
};
pub use engine::{
    credit_card_brand, generate, generate_cep, generate_cnpj, generate_cpf, generate_credit_card,
    generate_email, generate_phone, validate, validate_cep, validate_cnpj, validate_cpf,
    validate_credit_card, validate_email, validate_phone, ValidationRequest,
};
pub use error::{CheckitError, Result};
pub use output::OutputFormat;

/// Validate a value given its wire type name, with default options.
///
/// # Example
/// ```
/// # fn main() -> checkit::Result<()> {
/// let result = checkit::validate_value("creditCard", "4111111111111111")?;
/// assert_eq!(result.message.as_deref(), Some("Cartão Visa válido"));
///
/// let unknown = checkit::validate_value("rg", "123")?;
/// assert!(!unknown.is_valid);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Never fails with default options; the `Result` mirrors [`validate`].
pub fn validate_value(kind: &str, value: &str) -> Result<ValidationResult> {
    validate(&ValidationRequest::new(kind, value))
}
