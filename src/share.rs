use num_bigint::BigInt;
use serde::Deserialize;

use crate::{Error, Result, decode_value};

/// A point `(x, y)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// One participant's share as it appears in a record: the x-coordinate and
/// the y-coordinate still encoded in `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub index: BigInt,
    pub base: u32,
    pub value: String,
}

impl Share {
    pub fn new(index: impl Into<BigInt>, base: u32, value: impl Into<String>) -> Self {
        Self { index: index.into(), base, value: value.into() }
    }

    /// Decode the share's value into a point.
    pub fn to_point(&self) -> Result<Point> {
        Ok(Point { x: self.index.clone(), y: decode_value(&self.value, self.base)? })
    }
}

/// The `n`-of-`k` parameters a set of shares was produced with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SharingParameters {
    pub n: usize,
    pub k: usize,
}

impl SharingParameters {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, k }
    }

    pub fn validate(&self) -> Result<()> {
        if self.k < 1 || self.k > self.n {
            return Err(Error::InvalidThreshold { n: self.n, k: self.k });
        }
        Ok(())
    }
}
