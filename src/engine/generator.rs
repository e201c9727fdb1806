//! Random values that pass their own validators.
//!
//! Every generator has a `*_with` form taking any [`rand::Rng`], so tests can
//! seed a deterministic source, and a plain form that uses the thread-local
//! generator.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::DocumentKind;
use crate::engine::brand::{find_brand, CardBrand, BRANDS};
use crate::engine::checksum::{cnpj_check_digits, cpf_check_digits};
use crate::error::{CheckitError, Result};
use crate::utils::{
    format_cep, format_cnpj, format_cpf, format_phone, is_repeated_digit, luhn_check_digit,
};

/// Brazilian area codes in service.
pub const VALID_DDDS: &[u8] = &[
    11, 12, 13, 14, 15, 16, 17, 18, 19, 21, 22, 24, 27, 28, 31, 32, 33, 34, 35, 37, 38, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 51, 53, 54, 55, 61, 62, 63, 64, 65, 66, 67, 68, 69, 71, 73, 74, 75, 77,
    79, 81, 82, 83, 84, 85, 86, 87, 88, 89, 91, 92, 93, 94, 95, 96, 97, 98, 99,
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "example.com",
];

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.gen_range(0..10u8)).collect()
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Draw with `draw` until the result is not a single repeated digit.
fn non_degenerate<R, F>(rng: &mut R, mut draw: F) -> String
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> String,
{
    loop {
        let candidate = draw(rng);
        if !is_repeated_digit(&candidate) {
            return candidate;
        }
    }
}

pub fn generate_cpf_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = non_degenerate(rng, |rng| {
        let mut digits = random_digits(rng, 9);
        digits.extend(cpf_check_digits(&digits));
        to_string(&digits)
    });
    format_cpf(&digits)
}

/// Random valid CPF, formatted as `XXX.XXX.XXX-XX`.
#[must_use]
pub fn generate_cpf() -> String {
    generate_cpf_with(&mut rand::thread_rng())
}

pub fn generate_cnpj_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = non_degenerate(rng, |rng| {
        let mut digits = random_digits(rng, 12);
        digits.extend(cnpj_check_digits(&digits));
        to_string(&digits)
    });
    format_cnpj(&digits)
}

/// Random valid CNPJ, formatted as `XX.XXX.XXX/XXXX-XX`.
#[must_use]
pub fn generate_cnpj() -> String {
    generate_cnpj_with(&mut rand::thread_rng())
}

pub fn generate_cep_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = non_degenerate(rng, |rng| to_string(&random_digits(rng, 8)));
    format_cep(&digits)
}

/// Random CEP, formatted as `XXXXX-XXX`.
#[must_use]
pub fn generate_cep() -> String {
    generate_cep_with(&mut rand::thread_rng())
}

pub fn generate_phone_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = non_degenerate(rng, |rng| {
        let ddd = VALID_DDDS.choose(rng).copied().unwrap_or(11);
        let subscriber_len = if rng.gen_bool(0.5) { 9 } else { 8 };
        format!("{ddd}{}", to_string(&random_digits(rng, subscriber_len)))
    });
    format_phone(&digits)
}

/// Random phone number with a real area code, 8 or 9 subscriber digits.
#[must_use]
pub fn generate_phone() -> String {
    generate_phone_with(&mut rand::thread_rng())
}

pub fn generate_email_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name: String = (0..8)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    let number = rng.gen_range(0..1000u16);
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    format!("{name}{number}@{domain}")
}

/// Random address on one of [`EMAIL_DOMAINS`].
#[must_use]
pub fn generate_email() -> String {
    generate_email_with(&mut rand::thread_rng())
}

/// Card number of exactly `length` digits for `brand`: a generation prefix,
/// random filler, then the Luhn check digit.
pub fn generate_card_number_with<R: Rng + ?Sized>(
    rng: &mut R,
    brand: &CardBrand,
    length: usize,
) -> String {
    let prefixes: Vec<&str> = brand.generation_prefixes().collect();
    non_degenerate(rng, |rng| {
        let prefix = prefixes.choose(rng).copied().unwrap_or(brand.prefixes[0]);
        let mut payload: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        let filler = length.saturating_sub(payload.len() + 1);
        payload.extend(random_digits(rng, filler));
        payload.push(luhn_check_digit(&payload));
        to_string(&payload)
    })
}

/// Card number for `brand` (case-insensitive), or for a random brand when
/// `None`. The length is drawn from the brand's accepted lengths.
///
/// # Errors
///
/// [`CheckitError::UnsupportedBrand`] when `brand` names no known brand.
pub fn generate_credit_card_with<R: Rng + ?Sized>(rng: &mut R, brand: Option<&str>) -> Result<String> {
    let selected = match brand {
        Some(name) => {
            find_brand(name).ok_or_else(|| CheckitError::UnsupportedBrand(name.to_string()))?
        }
        None => BRANDS.choose(rng).unwrap_or(&BRANDS[0]),
    };
    let length = selected.lengths.choose(rng).copied().unwrap_or(16);
    debug!("generating {} card with {length} digits", selected.name);
    Ok(generate_card_number_with(rng, selected, length))
}

/// # Errors
///
/// [`CheckitError::UnsupportedBrand`] when `brand` names no known brand.
pub fn generate_credit_card(brand: Option<&str>) -> Result<String> {
    generate_credit_card_with(&mut rand::thread_rng(), brand)
}

/// Generate a value of `kind`. `brand` only applies to credit cards.
///
/// # Errors
///
/// [`CheckitError::UnsupportedBrand`] for an unknown card brand.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    kind: DocumentKind,
    brand: Option<&str>,
) -> Result<String> {
    Ok(match kind {
        DocumentKind::Cpf => generate_cpf_with(rng),
        DocumentKind::Cnpj => generate_cnpj_with(rng),
        DocumentKind::Cep => generate_cep_with(rng),
        DocumentKind::Email => generate_email_with(rng),
        DocumentKind::Phone => generate_phone_with(rng),
        DocumentKind::CreditCard => generate_credit_card_with(rng, brand)?,
    })
}

/// # Errors
///
/// [`CheckitError::UnsupportedBrand`] for an unknown card brand.
pub fn generate(kind: DocumentKind, brand: Option<&str>) -> Result<String> {
    generate_with(&mut rand::thread_rng(), kind, brand)
}
