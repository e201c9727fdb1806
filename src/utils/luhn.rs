/// Luhn sum of `digits`, read right to left. `rightmost_doubled` tells whether
/// the last digit of the slice sits at a doubled position, which is the case
/// when the check digit still has to be appended.
fn luhn_sum(digits: &[u8], rightmost_doubled: bool) -> u32 {
    let offset = usize::from(rightmost_doubled);
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if (i + offset) % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Luhn checksum over already-extracted digits.
#[must_use]
pub fn is_valid_digits(digits: &[u8]) -> bool {
    !digits.is_empty() && luhn_sum(digits, false) % 10 == 0
}

/// Luhn checksum over the digits of `number`. Separators are ignored and no
/// length policy is applied.
#[must_use]
pub fn is_valid(number: &str) -> bool {
    let digits: Vec<u8> = number
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    is_valid_digits(&digits)
}

/// Digit that makes `payload` followed by it pass the checksum.
#[must_use]
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum = luhn_sum(payload, true);
    // (10 - sum % 10) % 10 is always < 10
    ((10 - sum % 10) % 10) as u8
}
