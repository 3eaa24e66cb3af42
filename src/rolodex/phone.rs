use crate::error::{Result, RolodexError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Raw input forms accepted as a North American number:
/// `1234567890`, `123-456-7890`, `123.456.7890`, `123 456 7890`,
/// `(123) 456 7890`.
static NANP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})$").unwrap());

/// Length of the canonical `DDD-DDD-DDDD` form: 10 digits plus 2 dashes.
pub const CANONICAL_LEN: usize = 12;

/// A phone number in canonical `DDD-DDD-DDDD` form.
///
/// The only way to construct one is [`PhoneNumber::parse`], so every value
/// in circulation is already validated and formatted. Equality is plain
/// string equality, which is exactly number equality for canonical forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalizes a raw phone number into canonical form.
    ///
    /// The raw input (ignoring surrounding whitespace) must match one of the
    /// accepted North American formats, and stripping every non-digit must
    /// leave exactly ten digits. Anything else is `InvalidPhoneFormat`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !NANP_PATTERN.is_match(trimmed) {
            return Err(RolodexError::InvalidPhoneFormat(raw.to_string()));
        }

        let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 10 {
            return Err(RolodexError::InvalidPhoneFormat(raw.to_string()));
        }

        let canonical = format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]);
        debug_assert_eq!(canonical.len(), CANONICAL_LEN);
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
