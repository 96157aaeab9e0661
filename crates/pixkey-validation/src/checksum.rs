//! # Check-Digit Arithmetic — Modulo-11 Verifiers
//!
//! Pure, stateless functions verifying the two check digits of the
//! national tax identifiers: CPF (11 digits, natural person) and CNPJ
//! (14 digits, legal entity). Both use the standard modulo-11 scheme:
//! a weighted sum of the preceding digits is reduced mod 11, and a
//! remainder below 2 maps to check digit 0, anything else to
//! `11 − remainder`.
//!
//! ## Invariant
//!
//! Inputs that are not all-ASCII-digit or not exactly the required
//! length are rejected *before* any arithmetic — these functions return
//! `false` and never panic on malformed input.

/// CNPJ first-check-digit weights, applied over digits 0–11.
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ second-check-digit weights, applied over digits 0–11 plus the
/// first check digit.
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Verify the two check digits of an 11-digit CPF.
///
/// The first check digit (position 9) is computed from the first nine
/// digits with weights descending from 10 to 2; the second (position 10)
/// from the first ten digits with weights descending from 11 to 2.
pub fn cpf_checksum_is_valid(value: &str) -> bool {
    let Some(digits) = digits_of(value, 11) else {
        return false;
    };
    cpf_check_digit(&digits, 9) == digits[9] && cpf_check_digit(&digits, 10) == digits[10]
}

/// Verify the two check digits of a 14-digit CNPJ.
///
/// The first check digit (position 12) is computed from the first twelve
/// digits; the second (position 13) from the first twelve digits followed
/// by the just-computed first check digit.
pub fn cnpj_checksum_is_valid(value: &str) -> bool {
    let Some(digits) = digits_of(value, 14) else {
        return false;
    };

    let sum1: u32 = digits[..12]
        .iter()
        .zip(CNPJ_WEIGHTS_FIRST)
        .map(|(&d, w)| d as u32 * w)
        .sum();
    let digit1 = map_remainder(sum1 % 11);

    let sum2: u32 = (0..13)
        .map(|i| {
            let d = if i < 12 { digits[i] } else { digit1 };
            d as u32 * CNPJ_WEIGHTS_SECOND[i]
        })
        .sum();
    let digit2 = map_remainder(sum2 % 11);

    digits[12] == digit1 && digits[13] == digit2
}

/// Compute the CPF check digit over the first `len` digits, with weights
/// descending from `len + 1` to 2.
fn cpf_check_digit(digits: &[u8], len: usize) -> u8 {
    let sum: u32 = digits[..len]
        .iter()
        .enumerate()
        .map(|(i, &d)| d as u32 * (len + 1 - i) as u32)
        .sum();
    map_remainder(sum % 11)
}

/// Map a modulo-11 remainder to its check digit: 0 and 1 map to 0,
/// anything else to `11 − remainder`.
fn map_remainder(remainder: u32) -> u8 {
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Decode `value` into exactly `len` decimal digits, or `None` if it has
/// the wrong length or contains a non-digit.
fn digits_of(value: &str, len: usize) -> Option<Vec<u8>> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.bytes().map(|b| b - b'0').collect())
}
