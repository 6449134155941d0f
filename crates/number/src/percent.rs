//! Percent descriptors resolved against a base length.
//!
//! Chart options position things with a mix of keywords (`"center"`), percent strings
//! (`"35%"`), numeric strings (`"12"`) and plain numbers. [`PercentValue`] classifies
//! each shape once; [`PercentValue::resolve`] turns it into an absolute number.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::ParseError;

/// Position keywords accepted in place of a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKeyword {
    /// `left`, same as `0%`.
    Left,
    /// `top`, same as `0%`.
    Top,
    /// `center`, same as `50%`.
    Center,
    /// `right`, same as `100%`.
    Right,
    /// `bottom`, same as `100%`.
    Bottom,
}

impl PositionKeyword {
    /// The percentage this keyword stands for.
    pub const fn percent(self) -> f64 {
        match self {
            Self::Left | Self::Top => 0.0,
            Self::Center => 50.0,
            Self::Right | Self::Bottom => 100.0,
        }
    }
}

impl FromStr for PositionKeyword {
    type Err = ParseError;

    /// Exact, case-sensitive match. Surrounding whitespace is not a keyword.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "left" => Ok(Self::Left),
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseError::UnknownKeyword),
        }
    }
}

/// A percent-like descriptor, one variant per accepted input shape.
///
/// String variants hold the leading numeric prefix of the source text, or NaN when it
/// has none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentValue {
    /// One of the position keywords.
    Keyword(PositionKeyword),
    /// A string ending in `%`; holds the number before the sign.
    Percent(f64),
    /// Any other string; holds its leading number.
    NumericString(f64),
    /// A non-string value after numeric coercion.
    Number(f64),
}

impl PercentValue {
    /// Resolve against `all`.
    ///
    /// Keywords and percent strings scale `all`; numeric strings and numbers are
    /// returned as they are. A string without a numeric prefix yields NaN.
    pub fn resolve(self, all: f64) -> f64 {
        match self {
            Self::Keyword(keyword) => keyword.percent() / 100.0 * all,
            Self::Percent(percent) => percent / 100.0 * all,
            Self::NumericString(value) | Self::Number(value) => value,
        }
    }

    /// Like [`PercentValue::resolve`], but reports a NaN result as an error.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNumber` when the resolved value is NaN.
    pub fn try_resolve(self, all: f64) -> Result<f64, ParseError> {
        let value = self.resolve(all);
        if value.is_nan() {
            return Err(ParseError::InvalidNumber);
        }
        Ok(value)
    }
}

impl From<&str> for PercentValue {
    fn from(text: &str) -> Self {
        if let Ok(keyword) = text.parse::<PositionKeyword>() {
            return Self::Keyword(keyword);
        }
        let number = leading_number(text);
        if trim(text).ends_with('%') {
            Self::Percent(number)
        } else {
            Self::NumericString(number)
        }
    }
}

impl From<&String> for PercentValue {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<String> for PercentValue {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<PositionKeyword> for PercentValue {
    fn from(keyword: PositionKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<f64> for PercentValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for PercentValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for PercentValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PercentValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for PercentValue {
    fn from(value: bool) -> Self {
        Self::Number(if value { 1.0 } else { 0.0 })
    }
}

/// Null coerces to zero.
impl From<()> for PercentValue {
    fn from((): ()) -> Self {
        Self::Number(0.0)
    }
}

/// Convert a percent descriptor into an absolute number relative to `all`.
///
/// ```
/// use chart_number::parse_percent;
///
/// assert_eq!(parse_percent("50%", 200.0), 100.0);
/// assert_eq!(parse_percent("center", 200.0), 100.0);
/// assert_eq!(parse_percent(10.0, 200.0), 10.0);
/// assert!(parse_percent("abc", 200.0).is_nan());
/// ```
pub fn parse_percent(percent: impl Into<PercentValue>, all: f64) -> f64 {
    let descriptor = percent.into();
    let value = descriptor.resolve(all);
    if value.is_nan() {
        trace!("parse_percent: {descriptor:?} against {all} is not a number");
    }
    value
}

/// Strict form of [`parse_percent`].
///
/// # Errors
/// Returns `ParseError::InvalidNumber` where [`parse_percent`] would return NaN.
pub fn parse_percent_checked(percent: impl Into<PercentValue>, all: f64) -> Result<f64, ParseError> {
    percent.into().try_resolve(all)
}

/// Whitespace as understood by JSON-sourced chart options: Unicode white space plus
/// the byte order mark, minus NEL.
fn is_option_whitespace(character: char) -> bool {
    character == '\u{feff}' || (character.is_whitespace() && character != '\u{85}')
}

fn trim(text: &str) -> &str {
    text.trim_matches(is_option_whitespace)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Grammar: `[+-]? (Infinity | digits [. [digits]] | . digits) ([eE] [+-]? digits)?`.
/// Whatever follows the prefix is ignored. No prefix at all gives NaN.
fn leading_number(text: &str) -> f64 {
    let body = text.trim_start_matches(is_option_whitespace);
    let bytes = body.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let unsigned = body.get(sign_len..).unwrap_or_default();
    if unsigned.starts_with("Infinity") {
        return if body.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(unsigned.as_bytes());
    let mut end = sign_len + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes.get(end + 1..).unwrap_or_default());
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(bytes.get(exponent_end..).unwrap_or_default());
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    body.get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Accepts strings, numbers, booleans and null with the same coercions as the
/// `From` conversions. Arrays coerce through their joined text: `[]` and `[null]` are
/// 0, `[5]`, `["5"]` and `[[5]]` are 5, anything longer is NaN. Objects are NaN.
impl<'de> Deserialize<'de> for PercentValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PercentValueVisitor)
    }
}

struct PercentValueVisitor;

impl<'de> Visitor<'de> for PercentValueVisitor {
    type Value = PercentValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a percent string, position keyword, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        Ok(PercentValue::from(text))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(PercentValue::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(PercentValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(PercentValue::Number(value as f64))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(PercentValue::from(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PercentValue::Number(0.0))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        coerce_seq(seq).map(PercentValue::Number)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        drain_map(map).map(PercentValue::Number)
    }
}

/// Numeric value of an array element once the array is joined into text.
struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        Ok(strict_number(text))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value as f64)
    }

    // `true` and `false` join as words.
    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(f64::NAN)
    }

    // Null joins as the empty string.
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        coerce_seq(seq)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        drain_map(map)
    }
}

struct Element(f64);

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ElementVisitor).map(Element)
    }
}

/// Empty is 0, a single element keeps its own value, more than one joins with a
/// comma and is never a number. The rest of the sequence is always consumed.
fn coerce_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<f64, A::Error> {
    let Some(Element(first)) = seq.next_element::<Element>()? else {
        return Ok(0.0);
    };
    let mut value = first;
    while seq.next_element::<IgnoredAny>()?.is_some() {
        value = f64::NAN;
    }
    Ok(value)
}

fn drain_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<f64, A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(f64::NAN)
}

/// Whole-string numeric conversion: blank is 0, otherwise the trimmed text must be a
/// decimal literal or a signed `Infinity`. Radix prefixes are not recognized.
fn strict_number(text: &str) -> f64 {
    let body = trim(text);
    if body.is_empty() {
        return 0.0;
    }
    if body.strip_prefix(['+', '-']).unwrap_or(body) == "Infinity" {
        return if body.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if !body
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    body.parse::<f64>().unwrap_or(f64::NAN)
}
