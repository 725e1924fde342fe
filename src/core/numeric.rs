//! Presence-tagged numeric values and their display forms.
//!
//! Numeric fields in the model are `Option<T>`: `None` means "unspecified or
//! unavailable" and is kept strictly apart from any measured value, including
//! `u64::MAX`. Every string accessor funnels through the helpers here so that
//! absent values always render as [`UNSPECIFIED`] and present values render
//! the same way regardless of locale or process environment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering of an absent numeric value, for every radix.
pub const UNSPECIFIED: &str = "";

/// Numeric base selector passed by renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Radix {
    /// Decimal (`4096`)
    #[default]
    Dec,
    /// Lower-case hexadecimal without prefix (`1000`)
    Hex,
    /// Lower-case hexadecimal with `0x` prefix (`0x1000`)
    HexWithPrefix,
    /// Octal without prefix (`10000`)
    Oct,
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Dec => write!(f, "dec"),
            Radix::Hex => write!(f, "hex"),
            Radix::HexWithPrefix => write!(f, "hex-with-prefix"),
            Radix::Oct => write!(f, "oct"),
        }
    }
}

impl Radix {
    /// Render a present unsigned value.
    pub fn render(self, value: u64) -> String {
        match self {
            Radix::Dec => value.to_string(),
            Radix::Hex => format!("{:x}", value),
            Radix::HexWithPrefix => format!("{:#x}", value),
            Radix::Oct => format!("{:o}", value),
        }
    }

    /// Render a present signed value; the sign precedes any prefix (`-0x10`).
    pub fn render_signed(self, value: i64) -> String {
        let magnitude = self.render(value.unsigned_abs());
        if value < 0 {
            format!("-{}", magnitude)
        } else {
            magnitude
        }
    }
}

/// Render an optional unsigned value in the requested radix.
pub fn num_str<T: Into<u64> + Copy>(value: Option<T>, radix: Radix) -> String {
    match value {
        Some(v) => radix.render(v.into()),
        None => UNSPECIFIED.to_string(),
    }
}

/// Render an optional value in decimal.
pub fn dec_str<T: Into<u64> + Copy>(value: Option<T>) -> String {
    num_str(value, Radix::Dec)
}

/// Render an optional signed value in the requested radix.
pub fn signed_str(value: Option<i64>, radix: Radix) -> String {
    match value {
        Some(v) => radix.render_signed(v),
        None => UNSPECIFIED.to_string(),
    }
}

/// Render an optional floating-point value with a fixed number of decimals.
///
/// Non-finite values are treated as unspecified.
pub fn float_str(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", precision, v),
        _ => UNSPECIFIED.to_string(),
    }
}
