use std::{collections::HashSet, fmt, str::FromStr};

use log::debug;
use num_traits::Signed;
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

use crate::{
    Error, Point, Result, Share, SharingParameters, constants::RESERVED_PARAMETERS_KEY,
    decode_value,
};

/// A parsed share record: the sharing parameters and the shares, in the order
/// they appear in the source.
///
/// The JSON form is a single object. The `"keys"` entry holds the parameters
/// and every other entry is a share keyed by its decimal x-coordinate. Share
/// x-coordinates must be positive and distinct:
///
/// ```
/// use bc_lagrange::ShareRecord;
///
/// let record: ShareRecord = r#"{
///     "keys": { "n": 3, "k": 2 },
///     "1": { "base": 10, "value": "4" },
///     "2": { "base": 2, "value": "111" }
/// }"#.parse().unwrap();
/// assert_eq!(record.parameters.k, 2);
/// assert_eq!(record.shares.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ShareRecord {
    pub parameters: SharingParameters,
    pub shares: Vec<Share>,
}

impl ShareRecord {
    pub fn new(parameters: SharingParameters, shares: Vec<Share>) -> Self {
        Self { parameters, shares }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Decode every share, keeping record order.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.shares.iter().map(Share::to_point).collect()
    }
}

impl FromStr for ShareRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

#[derive(Deserialize)]
struct RawShare {
    #[serde(deserialize_with = "base_from_number_or_string")]
    base: u32,
    value: String,
}

fn base_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(base) => Ok(base),
        NumberOrString::String(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("base {s:?} is not a decimal integer"))),
    }
}

/// The record as it appears on the wire, before keys are interpreted.
struct RawRecord {
    parameters: Option<SharingParameters>,
    shares: Vec<(String, RawShare)>,
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawRecordVisitor;

        impl<'de> Visitor<'de> for RawRecordVisitor {
            type Value = RawRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a share record object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawRecord, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut parameters = None;
                let mut shares = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(key) = map.next_key::<String>()? {
                    if key == RESERVED_PARAMETERS_KEY {
                        if parameters.is_some() {
                            return Err(de::Error::duplicate_field(RESERVED_PARAMETERS_KEY));
                        }
                        parameters = Some(map.next_value()?);
                    } else {
                        let share = map.next_value()?;
                        shares.push((key, share));
                    }
                }
                Ok(RawRecord { parameters, shares })
            }
        }

        deserializer.deserialize_map(RawRecordVisitor)
    }
}

impl TryFrom<RawRecord> for ShareRecord {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let parameters = raw.parameters.ok_or_else(|| {
            Error::MalformedRecord(format!("missing {RESERVED_PARAMETERS_KEY:?} entry"))
        })?;
        let mut seen = HashSet::with_capacity(raw.shares.len());
        let shares = raw
            .shares
            .into_iter()
            .map(|(key, share)| {
                let index = decode_value(&key, 10).map_err(|_| {
                    Error::MalformedRecord(format!("share key {key:?} is not a decimal integer"))
                })?;
                if !index.is_positive() {
                    return Err(Error::MalformedRecord(format!(
                        "share key {key:?} is not a positive integer"
                    )));
                }
                if !seen.insert(index.clone()) {
                    return Err(Error::MalformedRecord(format!(
                        "share x-coordinate {index} appears more than once"
                    )));
                }
                Ok(Share { index, base: share.base, value: share.value })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Parsed record with n = {}, k = {} and {} shares",
            parameters.n,
            parameters.k,
            shares.len()
        );
        Ok(Self { parameters, shares })
    }
}
