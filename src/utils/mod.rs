mod format;
mod luhn;
mod numeric;

pub use format::{format_cep, format_cnpj, format_cpf, format_phone};
pub use luhn::{check_digit as luhn_check_digit, is_valid as luhn_is_valid};
pub use numeric::{clean_numeric, digits_of, is_blank, is_empty, is_repeated_digit};
