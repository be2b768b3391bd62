/// Smallest numeric base a share value may be encoded in.
pub const MIN_BASE: u32 = 2;
/// Largest numeric base a share value may be encoded in (`0-9a-z`).
pub const MAX_BASE: u32 = 36;

/// Top-level record key holding the sharing parameters rather than a share.
pub const RESERVED_PARAMETERS_KEY: &str = "keys";

/// Bit width of the `mod 2^256` clamp applied by legacy recovery tools.
pub const LEGACY_CLAMP_BITS: u32 = 256;

/// Widest clamp `RecoveryOptions` accepts.
pub const MAX_CLAMP_BITS: u32 = 8192;
