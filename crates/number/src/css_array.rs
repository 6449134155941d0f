//! CSS-style shorthand for box edges (`padding: [5, 10]` and friends).
//!
//! Shorthand follows the margin/padding convention:
//!
//! | input       | top | right | bottom | left |
//! |-------------|-----|-------|--------|------|
//! | `a`         | a   | a     | a      | a    |
//! | `[a, b]`    | a   | b     | a      | b    |
//! | `[a, b, c]` | a   | b     | c      | b    |
//!
//! Sequences of any other length are not expanded.

use cssparser::{Parser, ParserInput, Token};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A single value or a sequence of edge values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssShorthand {
    /// One value for all four sides.
    Scalar(f64),
    /// Explicit values in top, right, bottom, left order.
    Sequence(Vec<f64>),
}

impl CssShorthand {
    /// Expand into `[top, right, bottom, left]`.
    ///
    /// Sequences whose length is not 2 or 3 come back unchanged, so lengths 0, 1 and
    /// 5+ are not four elements long afterwards.
    pub fn normalize(self) -> Vec<f64> {
        match self {
            Self::Scalar(value) => vec![value; 4],
            Self::Sequence(values) => match *values.as_slice() {
                // vertical | horizontal
                [vertical, horizontal] => vec![vertical, horizontal, vertical, horizontal],
                // top | horizontal | bottom
                [top, horizontal, bottom] => vec![top, horizontal, bottom, horizontal],
                [_, _, _, _] => values,
                _ => {
                    trace!("normalize_css_array: length {} left as is", values.len());
                    values
                }
            },
        }
    }
}

impl From<f64> for CssShorthand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f32> for CssShorthand {
    fn from(value: f32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<i32> for CssShorthand {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for CssShorthand {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&[f64]> for CssShorthand {
    fn from(values: &[f64]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for CssShorthand {
    fn from(values: [f64; N]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

/// Normalize a CSS-like array configuration.
///
/// ```
/// use chart_number::normalize_css_array;
///
/// assert_eq!(normalize_css_array(3.0), vec![3.0, 3.0, 3.0, 3.0]);
/// assert_eq!(normalize_css_array([4.0, 2.0]), vec![4.0, 2.0, 4.0, 2.0]);
/// assert_eq!(normalize_css_array([4.0, 3.0, 2.0]), vec![4.0, 3.0, 2.0, 3.0]);
/// ```
pub fn normalize_css_array(val: impl Into<CssShorthand>) -> Vec<f64> {
    val.into().normalize()
}

/// Named view of a normalized four-value sequence.
///
/// ```
/// use chart_number::Edges;
///
/// let edges = Edges::from_shorthand([8.0, 16.0]).unwrap_or_default();
/// assert_eq!((edges.top, edges.right, edges.bottom, edges.left), (8.0, 16.0, 8.0, 16.0));
/// assert_eq!(edges.to_array(), [8.0, 16.0, 8.0, 16.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// First value of the normalized sequence.
    pub top: f64,
    /// Second value.
    pub right: f64,
    /// Third value.
    pub bottom: f64,
    /// Fourth value.
    pub left: f64,
}

impl Edges {
    /// `Some` only for exactly four values.
    pub fn from_normalized(values: &[f64]) -> Option<Self> {
        match *values {
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }

    /// Normalize `shorthand` and name its sides. `None` when the shorthand has a
    /// length that is passed through unexpanded.
    pub fn from_shorthand(shorthand: impl Into<CssShorthand>) -> Option<Self> {
        Self::from_normalized(&normalize_css_array(shorthand))
    }

    /// Back to `[top, right, bottom, left]`.
    pub const fn to_array(self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Parse a whitespace-separated shorthand string such as `"4 2"` or `"4px 3px 2px"`.
///
/// Unitless numbers and `px` dimensions are accepted. One value gives
/// [`CssShorthand::Scalar`], several give [`CssShorthand::Sequence`].
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for empty input or any other token.
pub fn parse_css_array(input: &str) -> Result<CssShorthand, ParseError> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);

    let mut values = Vec::new();
    while !parser.is_exhausted() {
        parser.skip_whitespace();
        let start = parser.position();
        let token = parser
            .next()
            .map_err(|_| ParseError::UnexpectedToken)?
            .clone();
        let source = parser.slice_from(start);
        let value = match token {
            Token::Number { value, .. } => exact_value(source, value),
            Token::Dimension { value, ref unit, .. } if unit.eq_ignore_ascii_case("px") => source
                .get(..source.len().saturating_sub(unit.len()))
                .map_or(f64::from(value), |number| exact_value(number, value)),
            _ => return Err(ParseError::UnexpectedToken),
        };
        values.push(value);
    }

    match *values.as_slice() {
        [] => Err(ParseError::UnexpectedToken),
        [single] => Ok(CssShorthand::Scalar(single)),
        _ => Ok(CssShorthand::Sequence(values)),
    }
}

/// Re-read the token source at `f64` precision; the tokenizer only keeps `f32`.
fn exact_value(source: &str, fallback: f32) -> f64 {
    source
        .trim()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(fallback))
}
