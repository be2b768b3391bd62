use num_bigint::BigInt;
use num_traits::Num;

use crate::{Error, Result, constants::{MAX_BASE, MIN_BASE}};

fn validate_base(base: u32) -> Result<()> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }
    Ok(())
}

/// Decodes a share value written in `base` (2 through 36) into an integer.
///
/// The value may carry a single leading `+` or `-`. Letters are accepted in
/// either case. Digit separators and surrounding whitespace are rejected, so a
/// value either decodes exactly or fails.
///
/// ```
/// use bc_lagrange::decode_value;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode_value("111", 2).unwrap(), BigInt::from(7));
/// assert_eq!(decode_value("2A", 16).unwrap(), BigInt::from(42));
/// ```
pub fn decode_value(encoded: &str, base: u32) -> Result<BigInt> {
    validate_base(base)?;

    let digits = encoded
        .strip_prefix('-')
        .or_else(|| encoded.strip_prefix('+'))
        .unwrap_or(encoded);
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(Error::MalformedValue { value: encoded.to_string(), base });
    }

    let magnitude = BigInt::from_str_radix(digits, base)
        .map_err(|_| Error::MalformedValue { value: encoded.to_string(), base })?;
    if encoded.starts_with('-') {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Renders `value` in `base` using lowercase digits and a leading `-` for
/// negative values.
pub fn encode_value(value: &BigInt, base: u32) -> Result<String> {
    validate_base(base)?;
    Ok(value.to_str_radix(base))
}
