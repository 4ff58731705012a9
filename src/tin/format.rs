//! Offline TIN format checks.
//!
//! These never contact the TIN service and are not applied by
//! [`check_with`](super::check_with), which forwards input unchanged.

use crate::core::TinFormatError;

/// NIF reserved for anonymous final consumers on Portuguese invoices.
pub const PT_FINAL_CONSUMER_NIF: &str = "999999990";

/// Allowed leading digits of a Portuguese NIF.
static PT_NIF_PREFIXES: &[&str] = &[
    "1", "2", "3", "45", "5", "6", "70", "71", "72", "74", "75", "77", "78", "79", "8", "90",
    "91", "98", "99",
];

/// Validate a Portuguese NIF (Número de Identificação Fiscal).
///
/// Checks the 9-digit length, the leading-digit table, and the
/// modulo-11 check digit.
pub fn validate_nif_pt(nif: &str) -> Result<(), TinFormatError> {
    let nif = nif.trim();
    if nif.len() != 9 || !nif.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TinFormatError::new(nif, "must be exactly 9 digits"));
    }
    if !PT_NIF_PREFIXES.iter().any(|p| nif.starts_with(p)) {
        return Err(TinFormatError::new(nif, "unknown leading digits"));
    }

    let digits: Vec<u32> = nif.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = digits[..8]
        .iter()
        .zip((2..=9).rev())
        .map(|(d, w)| d * w)
        .sum();
    let check = match 11 - sum % 11 {
        c if c > 9 => 0,
        c => c,
    };

    if digits[8] != check {
        return Err(TinFormatError::new(nif, "check digit mismatch"));
    }
    Ok(())
}

/// Validate a NIF that must identify a real taxpayer, e.g. an invoice issuer.
pub fn validate_taxpayer_nif_pt(nif: &str) -> Result<(), TinFormatError> {
    if nif.trim() == PT_FINAL_CONSUMER_NIF {
        return Err(TinFormatError::new(
            nif.trim(),
            "final consumer NIF does not identify a taxpayer",
        ));
    }
    validate_nif_pt(nif)
}
