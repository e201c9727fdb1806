use serde::Deserialize;

/// Output shape for CPF, CNPJ and CEP success values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Raw,
    #[default]
    Formatted,
}

/// Output shape for phone success values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    Raw,
    #[default]
    Formatted,
    International,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "BR")]
    Br,
}

/// Options shared by the CPF, CNPJ and CEP validators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentOptions {
    pub allow_empty: bool,
    pub custom_message: Option<String>,
    /// Accepted for wire compatibility; no gate reads it.
    pub strict: bool,
    pub format: DocumentFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneOptions {
    pub allow_empty: bool,
    pub custom_message: Option<String>,
    pub strict: bool,
    pub format: PhoneFormat,
    pub country: Country,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmailOptions {
    pub allow_empty: bool,
    pub custom_message: Option<String>,
    pub strict: bool,
    pub allow_subdomains: bool,
    pub allow_international: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            allow_empty: false,
            custom_message: None,
            strict: false,
            allow_subdomains: true,
            allow_international: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCardOptions {
    pub allow_empty: bool,
    pub custom_message: Option<String>,
    pub strict: bool,
    /// Brand names accepted by this call. Empty means every brand.
    pub allowed_brands: Vec<String>,
}
