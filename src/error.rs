use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckitError {
    #[error("Bandeira {0} não suportada")]
    UnsupportedBrand(String),

    #[error("Opções inválidas: {0}")]
    InvalidOptions(String),

    #[error("Unknown document type '{0}'. Expected one of: cpf, cnpj, cep, email, phone, creditCard")]
    UnknownKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckitError>;
