//! Numeric helpers shared by the chart layout code.
//!
//! - [`linear_map()`]: affine remapping of a value between two intervals.
//! - [`parse_percent`]: resolve `"50%"`, `"center"`, `"12"` or `12` against a base.
//! - [`normalize_css_array`]: expand margin/padding-style shorthand into four sides.
//!
//! Every entry point is total. Failures surface as `f64::NAN` or as a pass-through of
//! the input, never as a panic. The strict helpers ([`parse_percent_checked`],
//! [`PercentValue::try_resolve`] and [`parse_css_array`]) report failures through
//! [`ParseError`] instead.

#![forbid(unsafe_code)]

pub mod css_array;
pub mod linear_map;
pub mod percent;

pub use css_array::{CssShorthand, Edges, normalize_css_array, parse_css_array};
pub use linear_map::linear_map;
pub use percent::{PercentValue, PositionKeyword, parse_percent, parse_percent_checked};

use std::error::Error;
use std::fmt;

/// Parse error for the strict helpers in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The identifier is not one of the position keywords.
    UnknownKeyword,
    /// The value has no numeric interpretation.
    InvalidNumber,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => write!(formatter, "unexpected token"),
            Self::UnknownKeyword => write!(formatter, "unknown position keyword"),
            Self::InvalidNumber => write!(formatter, "value is not a number"),
        }
    }
}

impl Error for ParseError {}
