//! Protocol-wide numeric parameters.

/// Number of decimal places every [`Fixed64`](crate::Fixed64) carries.
pub const MAX_PRECISION: u8 = 8;

/// Scale factor between one whole unit and one raw unit (`10^MAX_PRECISION`).
pub const FIXED_SCALE: i64 = 100_000_000;

/// Maximum length in bytes of an asset name.
pub const MAX_ASSET_NAME_LEN: usize = 255;
