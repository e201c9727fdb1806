mod cep;
mod cnpj;
mod cpf;
mod credit_card;
mod email;
mod phone;

pub use cep::{validate_cep, CEP_LEN};
pub use cnpj::{validate_cnpj, CNPJ_LEN};
pub use cpf::{validate_cpf, CPF_LEN};
pub use credit_card::{validate_credit_card, MAX_CARD_LEN, MIN_CARD_LEN};
pub use email::validate_email;
pub use phone::validate_phone;
