mod kind;
mod options;
mod result;

pub use kind::DocumentKind;
pub use options::{
    Country, CreditCardOptions, DocumentFormat, DocumentOptions, EmailOptions, PhoneFormat,
    PhoneOptions,
};
pub use result::{failure_message, ValidationResult};
