//! Módulo 11 check digits for CPF and CNPJ.

const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn mod11_digit(sum: u32) -> u8 {
    let rem = sum % 11;
    // 11 - rem is in 2..=9 here
    if rem < 2 {
        0
    } else {
        (11 - rem) as u8
    }
}

/// CPF check digit for a prefix of `N` digits. Weights start at `N + 1` and
/// decrease by one per digit: 10..2 for the first check digit, 11..2 for the
/// second.
#[must_use]
pub fn cpf_check_digit(prefix: &[u8]) -> u8 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    mod11_digit(sum)
}

/// CNPJ check digit. The fixed weight table is aligned to the right end of
/// `prefix`, so 12 digits use `5,4,3,2,9,...,2` and 13 digits use the whole
/// table. Digits beyond the table's reach are ignored.
#[must_use]
pub fn cnpj_check_digit(prefix: &[u8]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .rev()
        .zip(CNPJ_WEIGHTS.iter().rev())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    mod11_digit(sum)
}

/// Both CPF check digits for a 9-digit base.
#[must_use]
pub fn cpf_check_digits(base: &[u8]) -> [u8; 2] {
    let first = cpf_check_digit(base);
    let mut extended = base.to_vec();
    extended.push(first);
    [first, cpf_check_digit(&extended)]
}

/// Both CNPJ check digits for a 12-digit base.
#[must_use]
pub fn cnpj_check_digits(base: &[u8]) -> [u8; 2] {
    let first = cnpj_check_digit(base);
    let mut extended = base.to_vec();
    extended.push(first);
    [first, cnpj_check_digit(&extended)]
}

/// True when the last two of 11 digits match the CPF check digits.
#[must_use]
pub fn cpf_checksum_matches(digits: &[u8]) -> bool {
    digits.len() == 11 && cpf_check_digits(&digits[..9]) == [digits[9], digits[10]]
}

/// True when the last two of 14 digits match the CNPJ check digits.
#[must_use]
pub fn cnpj_checksum_matches(digits: &[u8]) -> bool {
    digits.len() == 14 && cnpj_check_digits(&digits[..12]) == [digits[12], digits[13]]
}
