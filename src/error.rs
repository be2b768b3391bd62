use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported base {0}, expected 2 through 36")]
    UnsupportedBase(u32),

    #[error("Value {value:?} is not a valid base-{base} integer")]
    MalformedValue { value: String, base: u32 },

    #[error("Insufficient shares: threshold is {threshold} but {available} available")]
    InsufficientShares { threshold: usize, available: usize },

    #[error("Duplicate share x-coordinate {0}")]
    DuplicateShareX(BigInt),

    #[error("Invalid threshold: k = {k} with n = {n}")]
    InvalidThreshold { n: usize, k: usize },

    #[error("Shares do not lie on a polynomial with integer coefficients")]
    NonIntegralSecret,

    #[error("Unsupported clamp width of {0} bits")]
    UnsupportedClampBits(u32),

    #[error("Malformed share record: {0}")]
    MalformedRecord(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
