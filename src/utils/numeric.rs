/// Keep only the ASCII decimal digits of `value`.
#[must_use]
pub fn clean_numeric(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Digits of `value` as numbers, non-digits skipped.
#[must_use]
pub fn digits_of(value: &str) -> Vec<u8> {
    value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True for a missing value or one made only of whitespace.
#[must_use]
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}

#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when `value` is non-empty and every character equals the first one
/// (e.g. `11111111111`).
#[must_use]
pub fn is_repeated_digit(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.first() {
        Some(first) => bytes.iter().all(|b| b == first),
        None => false,
    }
}
