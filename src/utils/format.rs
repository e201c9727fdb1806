//! Separator insertion for the Brazilian document layouts.
//!
//! Each formatter cleans its input first. When the digit count is not the one
//! the layout expects, the cleaned digits come back unchanged.

use super::numeric::clean_numeric;

fn layout(digits: &str, groups: &[usize], separators: &[&str]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len() * 2);
    let mut start = 0;
    for (i, &len) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(separators[i - 1]);
        }
        out.push_str(&digits[start..start + len]);
        start += len;
    }
    out
}

/// `XXX.XXX.XXX-XX`
#[must_use]
pub fn format_cpf(value: &str) -> String {
    let digits = clean_numeric(value);
    if digits.len() != 11 {
        return digits;
    }
    layout(&digits, &[3, 3, 3, 2], &[".", ".", "-"])
}

/// `XX.XXX.XXX/XXXX-XX`
#[must_use]
pub fn format_cnpj(value: &str) -> String {
    let digits = clean_numeric(value);
    if digits.len() != 14 {
        return digits;
    }
    layout(&digits, &[2, 3, 3, 4, 2], &[".", ".", "/", "-"])
}

/// `XXXXX-XXX`
#[must_use]
pub fn format_cep(value: &str) -> String {
    let digits = clean_numeric(value);
    if digits.len() != 8 {
        return digits;
    }
    layout(&digits, &[5, 3], &["-"])
}

/// `(DD) NNNNN-NNNN` for mobiles, `(DD) NNNN-NNNN` for landlines.
#[must_use]
pub fn format_phone(value: &str) -> String {
    let digits = clean_numeric(value);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => digits,
    }
}
