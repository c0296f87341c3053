use crate::common::error::{FormatError, FormatResult};

pub const PHARMACODE_MIN: u32 = 3;
pub const PHARMACODE_MAX: u32 = 131070;

// Weighted mod 10 check digit
//------------------------------------------------------------------------------

/// Weights applied to digits at even and odd 0-based positions.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
struct Weights {
    even: u32,
    odd: u32,
}

const EAN13_WEIGHTS: Weights = Weights { even: 1, odd: 3 };
const EAN8_WEIGHTS: Weights = Weights { even: 3, odd: 1 };
const UPCA_WEIGHTS: Weights = Weights { even: 3, odd: 1 };

fn digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

fn mod10_check_digit(payload: &[u32], weights: Weights) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, d)| d * if i & 1 == 0 { weights.even } else { weights.odd })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn compute(payload: &str, len: usize, weights: Weights) -> Option<u8> {
    let digits = digits(payload)?;
    (digits.len() == len).then(|| mod10_check_digit(&digits, weights))
}

fn verify(value: &str, len: usize, weights: Weights) -> bool {
    let Some(digits) = digits(value) else { return false };
    if digits.len() != len {
        return false;
    }
    let (payload, check) = digits.split_at(len - 1);
    mod10_check_digit(payload, weights) as u32 == check[0]
}

/// Check digit for a 12 digit EAN-13 payload.
pub fn ean13_check_digit(payload: &str) -> Option<u8> {
    compute(payload, 12, EAN13_WEIGHTS)
}

/// Check digit for a 7 digit EAN-8 payload.
pub fn ean8_check_digit(payload: &str) -> Option<u8> {
    compute(payload, 7, EAN8_WEIGHTS)
}

/// Check digit for an 11 digit UPC-A payload.
pub fn upca_check_digit(payload: &str) -> Option<u8> {
    compute(payload, 11, UPCA_WEIGHTS)
}

// Verifiers
//------------------------------------------------------------------------------

pub fn verify_ean13(value: &str) -> FormatResult<()> {
    verify(value, 13, EAN13_WEIGHTS).then_some(()).ok_or(FormatError::Ean13CheckDigit)
}

pub fn verify_ean8(value: &str) -> FormatResult<()> {
    verify(value, 8, EAN8_WEIGHTS).then_some(()).ok_or(FormatError::Ean8CheckDigit)
}

pub fn verify_upca(value: &str) -> FormatResult<()> {
    verify(value, 12, UPCA_WEIGHTS).then_some(()).ok_or(FormatError::UpcaCheckDigit)
}

/// Interleaved 2 of 5 encodes digits in pairs. No check digit is computed.
pub fn verify_itf_parity(value: &str) -> FormatResult<()> {
    if value.chars().count() % 2 != 0 {
        return Err(FormatError::ItfOddLength);
    }
    Ok(())
}

pub fn verify_pharmacode_range(value: &str) -> FormatResult<()> {
    match value.parse::<u32>() {
        Ok(n) if (PHARMACODE_MIN..=PHARMACODE_MAX).contains(&n) => Ok(()),
        _ => Err(FormatError::PharmacodeRange),
    }
}
