use log::{debug, warn};
use num_bigint::BigInt;
use num_integer::Integer;

use crate::{
    Error, Point, Result, ShareRecord,
    constants::{LEGACY_CLAMP_BITS, MAX_CLAMP_BITS},
    interpolate::{interpolate, reconstruct},
};

/// Options applied after interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecoveryOptions {
    /// Reduce the recovered value modulo `2^bits`. This is not part of
    /// Shamir's scheme over the integers and is off by default. Widths from 1
    /// through `MAX_CLAMP_BITS` are accepted.
    pub clamp_bits: Option<u32>,
}

impl RecoveryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `mod 2^256` reduction applied by older recovery tools.
    pub fn legacy() -> Self {
        Self::new().with_clamp_bits(LEGACY_CLAMP_BITS)
    }

    pub fn with_clamp_bits(mut self, bits: u32) -> Self {
        self.clamp_bits = Some(bits);
        self
    }

    pub fn validate(&self) -> Result<()> {
        match self.clamp_bits {
            Some(bits) if bits < 1 || bits > MAX_CLAMP_BITS => {
                Err(Error::UnsupportedClampBits(bits))
            }
            _ => Ok(()),
        }
    }

    fn apply(&self, secret: BigInt) -> BigInt {
        match self.clamp_bits {
            Some(bits) => {
                warn!("Reducing recovered secret modulo 2^{bits}");
                secret.mod_floor(&(BigInt::from(1) << bits))
            }
            None => secret,
        }
    }
}

/// Recover the secret from a parsed record.
///
/// The parameters are checked, every share is decoded, and the first `k`
/// points are interpolated at zero. Shares beyond `k` are decoded but do not
/// take part in the result.
pub fn recover_secret(record: &ShareRecord, options: &RecoveryOptions) -> Result<BigInt> {
    let parameters = record.parameters;
    parameters.validate()?;
    options.validate()?;
    if record.shares.len() > parameters.n {
        warn!(
            "Record carries {} shares but n = {}",
            record.shares.len(),
            parameters.n
        );
    }

    let points = record.points()?;
    let secret = reconstruct(&points, parameters.k)?;
    debug!("Recovered secret from {} of {} shares", parameters.k, points.len());
    Ok(options.apply(secret))
}

/// Parse a JSON share record and recover its secret with default options.
///
/// ```
/// use bc_lagrange::recover_secret_from_json;
/// use num_bigint::BigInt;
///
/// let json = r#"{
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" },
///     "3": { "base": "10", "value": "12" },
///     "6": { "base": "4", "value": "213" }
/// }"#;
/// assert_eq!(recover_secret_from_json(json).unwrap(), BigInt::from(3));
/// ```
pub fn recover_secret_from_json(json: &str) -> Result<BigInt> {
    let record = ShareRecord::from_json(json)?;
    recover_secret(&record, &RecoveryOptions::default())
}

/// Check the points beyond the first `threshold` against the polynomial those
/// first points define, returning the x-coordinate of every point that is off
/// the polynomial. A point where that polynomial takes a fractional value is
/// off it by definition.
pub fn verify_shares(points: &[Point], threshold: usize) -> Result<Vec<BigInt>> {
    reconstruct(points, threshold)?;
    let basis = &points[..threshold];
    let mut mismatched = Vec::new();
    for point in &points[threshold..] {
        let on_polynomial = match interpolate(basis, &point.x) {
            Ok(y) => y == point.y,
            Err(Error::NonIntegralSecret) => false,
            Err(e) => return Err(e),
        };
        if !on_polynomial {
            mismatched.push(point.x.clone());
        }
    }
    if !mismatched.is_empty() {
        warn!(
            "{} of {} extra shares do not match",
            mismatched.len(),
            points.len() - threshold
        );
    }
    Ok(mismatched)
}
