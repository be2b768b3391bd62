#![doc(html_root_url = "https://docs.rs/bc-lagrange/0.1.0")]

//! Exact recovery of Shamir-shared secrets over the integers.
//!
//! Share values arrive as strings in any base from 2 to 36. They are decoded
//! into arbitrary-precision integers and the secret is recovered by Lagrange
//! interpolation at zero, without floating point and without truncating
//! division.

pub mod constants;

mod error;
pub use error::{Error, Result};

mod decode;
pub use decode::{decode_value, encode_value};

mod share;
pub use share::{Point, Share, SharingParameters};

mod interpolate;
pub use interpolate::{interpolate, reconstruct};

mod record;
pub use record::ShareRecord;

mod shamir;
pub use shamir::{RecoveryOptions, recover_secret, recover_secret_from_json, verify_shares};
