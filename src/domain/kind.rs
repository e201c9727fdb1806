use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CheckitError;

/// Document types understood by the dispatcher and the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    Cep,
    Email,
    Phone,
    CreditCard,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        Self::Cpf,
        Self::Cnpj,
        Self::Cep,
        Self::Email,
        Self::Phone,
        Self::CreditCard,
    ];

    /// Wire name used in `{ "type": ... }` request bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Cep => "cep",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CreditCard => "creditCard",
        }
    }

    /// Wire name only, no aliases. The generic endpoint is strict about it.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = CheckitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_wire(s) {
            return Ok(kind);
        }
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "cep" => Ok(Self::Cep),
            "email" | "e-mail" => Ok(Self::Email),
            "phone" | "telefone" => Ok(Self::Phone),
            "creditcard" | "credit-card" | "credit_card" | "card" => Ok(Self::CreditCard),
            _ => Err(CheckitError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_is_exact() {
        assert_eq!(DocumentKind::from_wire("creditCard"), Some(DocumentKind::CreditCard));
        assert_eq!(DocumentKind::from_wire("credit-card"), None);
        assert_eq!(DocumentKind::from_wire("CPF"), None);
    }

    #[test]
    fn test_from_str_accepts_cli_aliases() {
        assert_eq!("credit-card".parse::<DocumentKind>().unwrap(), DocumentKind::CreditCard);
        assert_eq!("CPF".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert!("rg".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.to_string().parse::<DocumentKind>().unwrap(), kind);
        }
    }
}
