pub mod brand;
pub mod checksum;
mod dispatch;
pub mod generator;
pub mod validators;

pub use brand::{credit_card_brand, detect_brand, find_brand, CardBrand, BRANDS};
pub use dispatch::{parse_options, validate, validate_kind, ValidationRequest};
pub use generator::{
    generate, generate_cep, generate_cnpj, generate_cpf, generate_credit_card, generate_email,
    generate_phone, generate_with,
};
pub use validators::{
    validate_cep, validate_cnpj, validate_cpf, validate_credit_card, validate_email,
    validate_phone,
};
