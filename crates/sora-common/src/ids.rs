//! Typed identifiers.
//!
//! Identifiers arrive as path segments and are validated once, at the edge.
//! Anything that survives [`TvId::parse`] is a strictly positive integer that
//! can be sent to a metadata provider as-is.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a TV show in the metadata provider's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TvId(NonZeroU64);

impl TvId {
    /// Parse a raw identifier token.
    ///
    /// The token is converted with the same loose numeric rules used for
    /// query parameters (see [`to_number`]). Zero, negative, NaN and infinite
    /// values are rejected. Fractional values are truncated toward zero, so
    /// `"0.5"` is rejected as well.
    ///
    /// Every rejection is a [`Error::NotFound`]: an identifier that can never
    /// name a show is reported the same way as a show that does not exist.
    pub fn parse(raw: &str) -> Result<Self> {
        let value = to_number(raw)
            .filter(|v| v.is_finite() && *v >= 1.0)
            .ok_or_else(|| Error::not_found(format!("tv show {raw:?}")))?;

        // `as` saturates for values beyond u64::MAX.
        NonZeroU64::new(value.trunc() as u64)
            .map(Self)
            .ok_or_else(|| Error::not_found(format!("tv show {raw:?}")))
    }

    /// Build an identifier from a known-positive integer.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for TvId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TvId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a query or path token to a number.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// notation, `Infinity` (case-sensitive, optionally signed) and unsigned
/// `0x`/`0o`/`0b` integer prefixes. Returns `None` when the token is empty or
/// not a number; the caller decides what an out-of-range value means.
pub fn to_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let radix = match trimmed.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.starts_with(['+', '-']) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust accepts "inf"/"nan" spellings that are not numbers here.
    if trimmed
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_alphabetic())
    {
        return None;
    }

    trimmed.parse::<f64>().ok()
}
