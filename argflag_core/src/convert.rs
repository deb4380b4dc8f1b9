use thiserror::Error;

use crate::model::{render_float, ElementType, Token, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Bounds of the i64 range, as floats: [-2^63, 2^63).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub(crate) struct InvalidConversion {
    pub token: String,
    pub type_name: &'static str,
}

impl InvalidConversion {
    fn new(token: &Token, type_name: &'static str) -> Self {
        Self {
            token: token.to_string(),
            type_name,
        }
    }
}

/// Convert a single token with the scalar constructor for `target`.
///
/// `ElementType::NoConvert` passes the token through unchanged.
pub(crate) fn convert_scalar(
    token: &Token,
    target: ElementType,
) -> Result<Value, InvalidConversion> {
    match target {
        ElementType::NoConvert => Ok(Value::from(token.clone())),
        ElementType::Str => Ok(Value::Str(to_str(token))),
        ElementType::Int => to_int(token)
            .map(Value::Int)
            .ok_or_else(|| InvalidConversion::new(token, "int")),
        ElementType::Float => to_float(token)
            .map(Value::Float)
            .ok_or_else(|| InvalidConversion::new(token, "float")),
        ElementType::Bool => Ok(Value::Bool(truthy(token))),
    }
}

/// Convert every token in order, failing on the first one that cannot convert.
pub(crate) fn convert_elements(
    tokens: &[Token],
    target: ElementType,
) -> Result<Vec<Value>, InvalidConversion> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Converting {} elements to {:?}.", tokens.len(), target);
    }

    tokens
        .iter()
        .map(|token| convert_scalar(token, target))
        .collect()
}

fn to_str(token: &Token) -> String {
    match token {
        Token::Text(text) => text.clone(),
        Token::Int(value) => value.to_string(),
        Token::Float(value) => render_float(*value),
        Token::Bool(true) => "True".to_string(),
        Token::Bool(false) => "False".to_string(),
    }
}

fn to_int(token: &Token) -> Option<i64> {
    match token {
        Token::Text(text) => parse_int(text),
        Token::Int(value) => Some(*value),
        Token::Float(value) => {
            let truncated = value.trunc();
            if truncated.is_finite() && truncated >= I64_LOWER && truncated < I64_UPPER {
                Some(truncated as i64)
            } else {
                None
            }
        }
        Token::Bool(value) => Some(i64::from(*value)),
    }
}

fn to_float(token: &Token) -> Option<f64> {
    match token {
        Token::Text(text) => parse_float(text),
        Token::Int(value) => Some(*value as f64),
        Token::Float(value) => Some(*value),
        Token::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
    }
}

fn truthy(token: &Token) -> bool {
    match token {
        Token::Text(text) => !text.is_empty(),
        Token::Int(value) => *value != 0,
        // NaN != 0.0, so NaN is truthy.
        Token::Float(value) => *value != 0.0,
        Token::Bool(value) => *value,
    }
}

/// Parse a decimal integer: surrounding whitespace, an optional sign, and `_` between digits are allowed.
fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }

    let digits = strip_separators(digits)?;
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits
    };
    signed.parse::<i64>().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if trimmed.contains('_') {
        strip_separators(trimmed)?.parse::<f64>().ok()
    } else {
        trimmed.parse::<f64>().ok()
    }
}

/// Remove `_` separators, each of which must sit between two ASCII digits.
fn strip_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();

            match (before, after) {
                (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {}
                _ => return None,
            }
        }
    }

    Some(text.replace('_', ""))
}
