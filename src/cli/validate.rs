use anyhow::Result;

use checkit::domain::{
    CreditCardOptions, DocumentFormat, DocumentKind, DocumentOptions, EmailOptions, PhoneFormat,
    PhoneOptions, ValidationResult,
};
use checkit::engine::{
    credit_card_brand, validate_cep, validate_cnpj, validate_cpf, validate_credit_card,
    validate_email, validate_phone,
};
use checkit::output::{format_validation, OutputFormat};

/// Flags shared by every `validate` invocation. Each validator reads the
/// ones that apply to it.
#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidateFlags {
    pub allow_empty: bool,
    pub custom_message: Option<String>,
    pub raw: bool,
    pub international: bool,
    pub strict_domain: bool,
    pub brands: Vec<String>,
}

impl ValidateFlags {
    fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            allow_empty: self.allow_empty,
            custom_message: self.custom_message.clone(),
            format: if self.raw {
                DocumentFormat::Raw
            } else {
                DocumentFormat::Formatted
            },
            ..DocumentOptions::default()
        }
    }

    fn phone_options(&self) -> PhoneOptions {
        let format = if self.international {
            PhoneFormat::International
        } else if self.raw {
            PhoneFormat::Raw
        } else {
            PhoneFormat::Formatted
        };
        PhoneOptions {
            allow_empty: self.allow_empty,
            custom_message: self.custom_message.clone(),
            format,
            ..PhoneOptions::default()
        }
    }

    fn email_options(&self) -> EmailOptions {
        EmailOptions {
            allow_empty: self.allow_empty,
            custom_message: self.custom_message.clone(),
            allow_subdomains: !self.strict_domain,
            allow_international: !self.strict_domain,
            ..EmailOptions::default()
        }
    }

    fn card_options(&self) -> CreditCardOptions {
        CreditCardOptions {
            allow_empty: self.allow_empty,
            custom_message: self.custom_message.clone(),
            allowed_brands: self.brands.clone(),
            ..CreditCardOptions::default()
        }
    }
}

#[must_use]
pub fn validate_with_flags(kind: DocumentKind, value: &str, flags: &ValidateFlags) -> ValidationResult {
    match kind {
        DocumentKind::Cpf => validate_cpf(value, &flags.document_options()),
        DocumentKind::Cnpj => validate_cnpj(value, &flags.document_options()),
        DocumentKind::Cep => validate_cep(value, &flags.document_options()),
        DocumentKind::Email => validate_email(value, &flags.email_options()),
        DocumentKind::Phone => validate_phone(value, &flags.phone_options()),
        DocumentKind::CreditCard => validate_credit_card(value, &flags.card_options()),
    }
}

pub fn run_validate(
    kind: DocumentKind,
    value: &str,
    flags: &ValidateFlags,
    format: OutputFormat,
) -> Result<()> {
    let result = validate_with_flags(kind, value, flags);
    print!("{}", format_validation(kind, value, &result, format));

    if !result.is_valid {
        std::process::exit(1);
    }
    Ok(())
}

pub fn run_brand(number: &str) -> Result<()> {
    match credit_card_brand(number) {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => {
            println!("unknown");
            std::process::exit(1);
        }
    }
}
