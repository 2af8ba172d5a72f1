//! # Donor Compliance Records
//!
//! Federal reporting requires name, mailing address, occupation and
//! employer for every contributor. A donation is refused unless every
//! required field is present and well-formed.
//!
//! ## Field rules
//!
//! | Field   | Rule                                                   |
//! |---------|--------------------------------------------------------|
//! | email   | `local@domain.tld`, no whitespace, exactly one `@`     |
//! | phone   | 7–20 characters; only digits, spaces and `-()+.x,`     |
//! | zip     | `12345` or `12345-6789`                                |
//! | comment | optional                                               |
//! | any     | at most [`MAX_FIELD_LEN`] bytes                        |
//!
//! Leading and trailing whitespace is ignored.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::campaign::{load_record, store_record, DataKey};
use crate::errors::DonationError;

/// Upper bound on any single donor field, in bytes.
pub const MAX_FIELD_LEN: usize = 128;

const MIN_PHONE_LEN: usize = 7;
const MAX_PHONE_LEN: usize = 20;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonorInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub occupation: String,
    pub employer: String,
    /// Free-form note to the campaign. May be empty.
    pub comment: String,
}

/// Check every field of `info`.
pub fn validate(info: &DonorInfo) -> Result<(), DonationError> {
    let mut buf = [0u8; MAX_FIELD_LEN];

    for field in [
        &info.first_name,
        &info.last_name,
        &info.street,
        &info.city,
        &info.state,
        &info.occupation,
        &info.employer,
    ] {
        required(field_bytes(field, &mut buf)?)?;
    }

    if !is_valid_email(required(field_bytes(&info.email, &mut buf)?)?) {
        return Err(DonationError::InvalidEmail);
    }
    if !is_valid_phone(required(field_bytes(&info.phone, &mut buf)?)?) {
        return Err(DonationError::InvalidPhone);
    }
    if !is_valid_zip(required(field_bytes(&info.zip, &mut buf)?)?) {
        return Err(DonationError::InvalidZip);
    }

    field_bytes(&info.comment, &mut buf)?;
    Ok(())
}

pub fn get_profile(env: &Env, donor: &Address) -> Option<DonorInfo> {
    load_record(env, &DataKey::DonorProfile(donor.clone()))
}

pub fn set_profile(env: &Env, donor: &Address, info: &DonorInfo) {
    store_record(env, &DataKey::DonorProfile(donor.clone()), info);
}

// ════════════════════════════════════════════════════════════════════
//  Byte-level checks
// ════════════════════════════════════════════════════════════════════

/// Copy `value` into `buf` and return the trimmed bytes.
fn field_bytes<'a>(value: &String, buf: &'a mut [u8; MAX_FIELD_LEN]) -> Result<&'a [u8], DonationError> {
    let len = value.len() as usize;
    if len > MAX_FIELD_LEN {
        return Err(DonationError::DonorFieldTooLong);
    }
    let bytes = &mut buf[..len];
    value.copy_into_slice(bytes);
    Ok(trim(bytes))
}

fn required(bytes: &[u8]) -> Result<&[u8], DonationError> {
    if bytes.is_empty() {
        return Err(DonationError::MissingDonorField);
    }
    Ok(bytes)
}

pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

pub(crate) fn is_valid_email(bytes: &[u8]) -> bool {
    if bytes.iter().any(|b| b.is_ascii_whitespace()) {
        return false;
    }
    let mut parts = bytes.split(|b| *b == b'@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    // Needs a dot with at least one character on each side.
    domain[1..domain.len() - 1].contains(&b'.')
}

pub(crate) fn is_valid_phone(bytes: &[u8]) -> bool {
    let allowed = |b: &u8| {
        b.is_ascii_digit()
            || b.is_ascii_whitespace()
            || matches!(b, b'-' | b'(' | b')' | b'+' | b'.' | b'x' | b',')
    };
    (MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&bytes.len()) && bytes.iter().all(allowed)
}

pub(crate) fn is_valid_zip(bytes: &[u8]) -> bool {
    let all_digits = |s: &[u8]| s.iter().all(u8::is_ascii_digit);
    match bytes.len() {
        5 => all_digits(bytes),
        10 => all_digits(&bytes[..5]) && bytes[5] == b'-' && all_digits(&bytes[6..]),
        _ => false,
    }
}
